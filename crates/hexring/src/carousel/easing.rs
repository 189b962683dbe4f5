use super::frame::{Frame, TileAppearance, TileFrame};

/// An ease-out transition of `d` ms covers all but `e^-SETTLE_RATE` of the
/// distance after `d` ms.
pub const SETTLE_RATE: f64 = 3.0;

/// Remembers what was painted last so each new frame eases towards its
/// targets over the tiles' `transition_ms`.
#[derive(Debug, Clone, Default)]
pub struct Easing {
    shown: Vec<TileAppearance>,
    last_ms: Option<f64>,
}

/// Fraction of the remaining distance covered after `elapsed_ms`.
fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    1.0 - (-SETTLE_RATE * elapsed_ms / duration_ms).exp()
}

impl Easing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites each tile's `shown` appearance for a frame painted at
    /// `now_ms`. Returns whether every tile has reached its target.
    ///
    /// The first frame, and any frame with a different tile count, snaps.
    pub fn apply(&mut self, frame: &mut Frame, now_ms: f64) -> bool {
        let elapsed = self.last_ms.map(|last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);

        let Some(elapsed) = elapsed.filter(|_| self.shown.len() == frame.tiles.len()) else {
            self.shown = frame.tiles.iter().map(TileFrame::target).collect();
            for tile in &mut frame.tiles {
                tile.shown = tile.target();
            }
            return true;
        };

        let mut settled = true;
        for (tile, shown) in frame.tiles.iter_mut().zip(&mut self.shown) {
            let target = tile.target();
            let next = shown.approach(target, progress(elapsed, tile.transition_ms));
            *shown = if next.is_near(&target) {
                target
            } else {
                settled = false;
                next
            };
            tile.shown = *shown;
        }
        settled
    }

    /// Forgets the painted state so the next frame snaps.
    pub fn reset(&mut self) {
        self.shown.clear();
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Carousel, Direction, PointerSample, Rotation};
    use crate::device::DeviceClass;

    fn dragged() -> Carousel {
        let mut c = Carousel::new(DeviceClass::Full, Rotation::new(Direction::Forward));
        c.press(PointerSample::new(0.0, 0, 0));
        c.motion(PointerSample::new(200.0, 0, 20));
        c
    }

    #[test]
    fn test_first_frame_snaps() {
        let c = Carousel::new(DeviceClass::Full, Rotation::new(Direction::Forward));
        let mut frame = c.frame();
        let mut easing = Easing::new();
        assert!(easing.apply(&mut frame, 0.0));
        assert!(frame.tiles.iter().all(|t| t.shown == t.target()));
    }

    #[test]
    fn test_jump_is_eased_then_settles() {
        let mut c = Carousel::new(DeviceClass::Full, Rotation::new(Direction::Forward));
        let mut easing = Easing::new();
        let mut first = c.frame();
        easing.apply(&mut first, 0.0);

        c.press(PointerSample::new(0.0, 0, 0));
        c.motion(PointerSample::new(200.0, 0, 20));

        let mut moving = c.frame();
        assert!(!easing.apply(&mut moving, 16.0));
        let front = &moving.tiles[2];
        let start = first.tiles[2].target();
        let target = front.target();
        // part of the way, not all of it
        assert!((front.shown.x - start.x).abs() > 0.0);
        assert!((front.shown.x - target.x).abs() > 0.0);
        assert!((front.shown.x - start.x).abs() < (target.x - start.x).abs());

        let mut later = c.frame();
        assert!(easing.apply(&mut later, 16.0 + 10_000.0));
        assert!(later.tiles.iter().all(|t| t.shown == t.target()));
    }

    #[test]
    fn test_faster_rotation_eases_faster() {
        let slow = progress(16.0, 700.0);
        let fast = progress(16.0, 50.0);
        assert!(fast > slow);
        assert_eq!(progress(16.0, 0.0), 1.0);
        assert!((progress(700.0, 700.0) - (1.0 - (-3.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_tile_count_change_snaps() {
        let mut c = dragged();
        let mut easing = Easing::new();
        let mut full = c.frame();
        easing.apply(&mut full, 0.0);

        c.set_device_class(DeviceClass::Compact);
        let mut compact = c.frame();
        assert!(easing.apply(&mut compact, 16.0));
        assert_eq!(compact.tiles.len(), 6);

        easing.reset();
        let mut again = c.frame();
        assert!(easing.apply(&mut again, 32.0));
    }
}
