use super::{Point, angular_distance, normalize_degrees};
use crate::device::DeviceClass;
use std::f64::consts::FRAC_PI_2;

/// Ring slots. Compact layouts leave the last two empty.
pub const SLOT_COUNT: usize = 8;
pub const SLOT_SPACING: f64 = 360.0 / SLOT_COUNT as f64;
/// Angle at which a tile faces the viewer (bottom-centre of the flattened ring).
pub const FRONT_ANGLE: f64 = 90.0;
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 1.85;
pub const BASE_Z_INDEX: f64 = 1000.0;

/// Where a tile sits on screen for one rotation value.
///
/// Offsets are relative to the ring centre. `cycle_position` is 1 when the
/// tile faces the viewer and 0 when it is directly behind the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
    pub opacity: f64,
    pub cycle_position: f64,
    pub z_index: f64,
    pub depth_factor: f64,
    /// Normalized ring angle in degrees.
    pub angle: f64,
}

impl TilePosition {
    pub fn calculate(index: usize, rotation: f64, device: DeviceClass) -> Self {
        let layout = device.layout();

        let angle = normalize_degrees(index as f64 * SLOT_SPACING + rotation);
        let radians = angle.to_radians();

        let x = radians.cos() * layout.radius;
        let y = radians.sin() * layout.radius * layout.aspect;
        let z = radians.sin() * layout.depth;

        let distance = angular_distance(angle, FRONT_ANGLE);
        let cycle_position = 1.0 - distance / 180.0;

        let eased = (cycle_position * FRAC_PI_2).sin();
        let mut scale = MIN_SCALE + eased * 0.7;

        if distance <= layout.hero_threshold {
            scale += (1.0 - distance / layout.hero_threshold) * layout.hero_bonus;
        }

        Self {
            x,
            y,
            z,
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
            opacity: opacity_for(cycle_position).clamp(0.0, 1.0),
            cycle_position,
            z_index: BASE_Z_INDEX + cycle_position * 100.0 + angle * 0.01,
            depth_factor: cycle_position,
            angle,
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Back tiles vanish, front tiles are opaque, with eased bands in between.
fn opacity_for(cycle_position: f64) -> f64 {
    match cycle_position {
        c if c < 0.05 => 0.0,
        c if c < 0.2 => {
            let t = (c - 0.05) / 0.15;
            t * t * 0.3
        }
        c if c < 0.8 => {
            let t = (c - 0.2) / 0.6;
            0.3 + (t * FRAC_PI_2).sin() * 0.5
        }
        c => {
            let t = (c - 0.8) / 0.2;
            0.8 + (t * FRAC_PI_2).sin() * 0.2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const ROTATIONS: &[f64] = &[
        -1234.5, -360.0, -90.0, -0.05, 0.0, 0.05, 17.3, 90.0, 179.99, 359.99, 720.0, 98765.4,
    ];

    #[test]
    fn test_cycle_position_in_unit_range() {
        for device in DeviceClass::iter() {
            for &r in ROTATIONS {
                for i in 0..SLOT_COUNT {
                    let p = TilePosition::calculate(i, r, device);
                    assert!((0.0..=1.0).contains(&p.cycle_position), "{i} {r} {p:?}");
                }
            }
        }
    }

    #[test]
    fn test_front_tile_has_full_cycle_position() {
        let p = TilePosition::calculate(2, 0.0, DeviceClass::Compact);
        assert_eq!(p.cycle_position, 1.0);

        let p = TilePosition::calculate(1, 45.0, DeviceClass::Compact);
        assert_eq!(p.cycle_position, 1.0);

        let p = TilePosition::calculate(0, -270.0, DeviceClass::Full);
        assert_eq!(p.cycle_position, 1.0);
    }

    #[test]
    fn test_back_tile_has_zero_cycle_position() {
        let p = TilePosition::calculate(6, 0.0, DeviceClass::Full);
        assert_eq!(p.angle, 270.0);
        assert_eq!(p.cycle_position, 0.0);
        assert_eq!(p.opacity, 0.0);
        assert_eq!(p.scale, MIN_SCALE);
    }

    #[test]
    fn test_spacing_is_invariant() {
        for &r in ROTATIONS {
            for i in 0..SLOT_COUNT - 1 {
                let a = TilePosition::calculate(i, r, DeviceClass::Full);
                let b = TilePosition::calculate(i + 1, r, DeviceClass::Full);
                let step = (b.angle - a.angle).rem_euclid(360.0);
                assert!((step - SLOT_SPACING).abs() < 1e-6, "{r}: {step}");
            }
        }
    }

    #[test]
    fn test_scale_and_opacity_bounds() {
        for device in DeviceClass::iter() {
            for step in 0..3600 {
                let r = step as f64 * 0.1;
                let p = TilePosition::calculate(0, r, device);
                assert!((MIN_SCALE..=MAX_SCALE).contains(&p.scale));
                assert!((0.0..=1.0).contains(&p.opacity));
            }
        }
    }

    #[test]
    fn test_hero_bonus_at_front() {
        let full = TilePosition::calculate(2, 0.0, DeviceClass::Full);
        assert!((full.scale - 1.85).abs() < 1e-12);
        assert!((full.opacity - 1.0).abs() < 1e-12);

        let compact = TilePosition::calculate(2, 0.0, DeviceClass::Compact);
        assert!((compact.scale - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_hero_bonus_fades_at_threshold() {
        // 54 degrees off the front on the full layout: no bonus left
        let p = TilePosition::calculate(2, 54.0, DeviceClass::Full);
        let eased = ((1.0 - 54.0 / 180.0) * FRAC_PI_2).sin();
        assert!((p.scale - (0.5 + eased * 0.7)).abs() < 1e-12);
    }

    #[test]
    fn test_opacity_bands_are_continuous() {
        for edge in [0.05, 0.2, 0.8] {
            let below = opacity_for(edge - 1e-9);
            let above = opacity_for(edge + 1e-9);
            assert!((below - above).abs() < 1e-6, "jump at {edge}");
        }
        assert!((opacity_for(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_opacity_monotonic() {
        let mut last = 0.0;
        for step in 0..=1000 {
            let o = opacity_for(step as f64 / 1000.0);
            assert!(o >= last);
            last = o;
        }
    }

    #[test]
    fn test_z_index_orders_by_closeness() {
        let front = TilePosition::calculate(2, 0.0, DeviceClass::Full);
        let side = TilePosition::calculate(0, 0.0, DeviceClass::Full);
        let back = TilePosition::calculate(6, 0.0, DeviceClass::Full);
        assert!(front.z_index > side.z_index);
        assert!(side.z_index > back.z_index);

        // equal cycle positions are broken by angle
        let left = TilePosition::calculate(0, 0.0, DeviceClass::Full);
        let right = TilePosition::calculate(4, 0.0, DeviceClass::Full);
        assert_eq!(left.cycle_position, right.cycle_position);
        assert!(right.z_index > left.z_index);
    }

    #[test]
    fn test_deterministic() {
        let a = TilePosition::calculate(3, 123.456, DeviceClass::Compact);
        let b = TilePosition::calculate(3, 123.456, DeviceClass::Compact);
        assert_eq!(a, b);
    }
}
