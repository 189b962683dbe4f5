pub mod app;
pub mod scene;
pub mod theme;
pub mod view;
