pub mod background;
pub mod carousel;
pub mod color;
pub mod device;
pub mod features;
pub mod geometry;
pub mod glyph;
