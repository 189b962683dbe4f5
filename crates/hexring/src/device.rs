use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Windows narrower than this (logical px) get the compact ring.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[strum(serialize = "compact", serialize = "mobile")]
    Compact,
    #[default]
    #[strum(serialize = "full", serialize = "desktop")]
    Full,
}

impl DeviceClass {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Compact
        } else {
            Self::Full
        }
    }

    pub fn layout(self) -> &'static RingLayout {
        match self {
            Self::Compact => &COMPACT,
            Self::Full => &FULL,
        }
    }
}

/// Every per-device constant of the ring in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    pub radius: f64,
    /// Flattens the ring vertically.
    pub aspect: f64,
    pub depth: f64,
    /// Degrees from the front within which tiles get the hero bonus.
    pub hero_threshold: f64,
    pub hero_bonus: f64,
    /// Degrees of rotation per pixel of smoothed drag. Negative so dragging
    /// right turns the front tile right.
    pub drag_sensitivity: f64,
    pub tile_size: f64,
    pub visible_tiles: usize,
    pub shape_count: usize,
    pub font_size: f64,
    /// Edge of the square the tile glyph is drawn in.
    pub icon_size: f64,
    /// Titles wrap at this width, in unscaled tile pixels.
    pub title_width: f64,
}

pub const COMPACT: RingLayout = RingLayout {
    radius: 200.0,
    aspect: 0.30,
    depth: 100.0,
    hero_threshold: 48.0,
    hero_bonus: 0.50,
    drag_sensitivity: -0.15,
    tile_size: 75.0,
    visible_tiles: 6,
    shape_count: 12,
    font_size: 11.0,
    icon_size: 20.0,
    title_width: 90.0,
};

pub const FULL: RingLayout = RingLayout {
    radius: 360.0,
    aspect: 0.36,
    depth: 120.0,
    hero_threshold: 54.0,
    hero_bonus: 0.65,
    drag_sensitivity: -0.25,
    tile_size: 98.0,
    visible_tiles: 8,
    shape_count: 24,
    font_size: 13.0,
    icon_size: 24.0,
    title_width: 120.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_deserialization() {
        let cases = vec![
            ("\"compact\"", DeviceClass::Compact),
            ("\"Compact\"", DeviceClass::Compact),
            ("\"MOBILE\"", DeviceClass::Compact),
            ("\"full\"", DeviceClass::Full),
            ("\"Desktop\"", DeviceClass::Full),
        ];

        for (json, expected) in cases {
            let deserialized: DeviceClass = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_from_width() {
        assert_eq!(
            DeviceClass::from_width(767.0, DEFAULT_BREAKPOINT),
            DeviceClass::Compact
        );
        assert_eq!(
            DeviceClass::from_width(768.0, DEFAULT_BREAKPOINT),
            DeviceClass::Full
        );
    }

    #[test]
    fn test_layouts_differ_per_class() {
        assert_eq!(DeviceClass::Compact.layout().visible_tiles, 6);
        assert_eq!(DeviceClass::Full.layout().visible_tiles, 8);
        assert!(DeviceClass::Compact.layout().radius < DeviceClass::Full.layout().radius);
        assert_eq!(DeviceClass::Compact.layout().icon_size, 20.0);
        assert_eq!(DeviceClass::Full.layout().title_width, 120.0);
    }
}
