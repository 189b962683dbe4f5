//! The rotating hexagon ring: rotation state, drag input and per-frame layout.

pub mod drag;
pub mod driver;
pub mod easing;
pub mod frame;

pub use drag::{DragHandler, PointerId, PointerSample};
pub use driver::{Direction, DriveMode, Rotation};
pub use easing::Easing;
pub use frame::{
    Frame, TileAppearance, TileFrame, blur_amount, depth_faded_opacity, transition_duration,
};

use crate::device::DeviceClass;
use crate::features::visible_features;
use crate::geometry::{HexagonPath, TilePosition};
use rand::Rng;

/// Owns the ring's only mutable state. Layout is derived from it on demand.
#[derive(Debug, Clone)]
pub struct Carousel {
    rotation: Rotation,
    drag: DragHandler,
    device: DeviceClass,
    /// Angle seen by the previous frame, for speed tracking.
    last_angle: f64,
    speed: f64,
}

impl Carousel {
    pub fn new(device: DeviceClass, rotation: Rotation) -> Self {
        let last_angle = rotation.angle();
        Self {
            rotation,
            drag: DragHandler::new(),
            device,
            last_angle,
            speed: 0.0,
        }
    }

    pub fn with_rng<R: Rng + ?Sized>(device: DeviceClass, rng: &mut R) -> Self {
        Self::new(device, Rotation::with_rng(rng))
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Degrees the ring moved between the last two frames.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns whether the class changed.
    pub fn set_device_class(&mut self, device: DeviceClass) -> bool {
        if device == self.device {
            return false;
        }
        log::debug!("carousel layout {} -> {}", self.device, device);
        self.device = device;
        true
    }

    /// One display refresh of the continuous driver.
    pub fn tick(&mut self) -> bool {
        let moved = self.rotation.apply_continuous_tick();
        self.track_speed();
        moved
    }

    pub fn press(&mut self, sample: PointerSample) -> bool {
        if !self.drag.press(sample) {
            return false;
        }
        self.rotation.suspend();
        true
    }

    /// Returns whether the ring moved.
    pub fn motion(&mut self, sample: PointerSample) -> bool {
        let sensitivity = self.device.layout().drag_sensitivity;
        match self.drag.motion(sample, sensitivity) {
            Some(delta) => {
                self.rotation.apply_drag_delta(delta);
                self.track_speed();
                true
            }
            None => false,
        }
    }

    /// Ends the drag for `id`, flushing leftover motion. The continuous
    /// driver resumes in whichever direction the ring was last flicked.
    pub fn release(&mut self, id: PointerId) -> bool {
        if self.drag.tracked() != Some(id) {
            return false;
        }
        let sensitivity = self.device.layout().drag_sensitivity;
        if let Some(delta) = self.drag.release(id, sensitivity) {
            self.rotation.apply_drag_delta(delta);
            self.track_speed();
        }
        self.rotation.resume();
        true
    }

    fn track_speed(&mut self) {
        // folded onto the circle: drag deltas wrap the angle, ticks do not
        let delta = (self.rotation.angle() - self.last_angle).rem_euclid(360.0);
        self.speed = delta.min(360.0 - delta);
        self.last_angle = self.rotation.angle();
    }

    pub fn positions(&self) -> Vec<TilePosition> {
        let angle = self.rotation.angle();
        (0..visible_features(self.device).len())
            .map(|i| TilePosition::calculate(i, angle, self.device))
            .collect()
    }

    /// Lays out every visible tile for the current rotation.
    pub fn frame(&self) -> Frame {
        let layout = self.device.layout();
        let positions = self.positions();
        let transition_ms = transition_duration(self.speed);

        let tiles = visible_features(self.device)
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(index, (feature, position))| {
                let opacity = depth_faded_opacity(&positions, index, layout.tile_size);
                let blur = blur_amount(position.cycle_position);
                TileFrame {
                    index,
                    feature,
                    position: *position,
                    opacity,
                    blur,
                    transition_ms,
                    shown: TileAppearance {
                        x: position.x,
                        y: position.y,
                        scale: position.scale,
                        opacity,
                        blur,
                    },
                }
            })
            .collect();

        Frame {
            tiles,
            outline: HexagonPath::new(layout.tile_size),
            tile_size: layout.tile_size,
        }
    }
}
