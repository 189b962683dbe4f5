use rand::Rng;
use strum::Display as StrumDisplay;

/// Degrees added per display refresh while running.
pub const TICK_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Forward
        } else {
            Self::Reverse
        }
    }

    fn of(delta: f64) -> Self {
        if delta < 0.0 {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum DriveMode {
    Running,
    Suspended,
}

/// The ring's phase and the continuous driver that advances it.
///
/// There are two writers: the per-frame tick and drag input. Ticks are
/// ignored while suspended, so only one of them changes the angle at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    angle: f64,
    direction: Direction,
    mode: DriveMode,
}

impl Rotation {
    pub fn new(direction: Direction) -> Self {
        Self {
            angle: 0.0,
            direction,
            mode: DriveMode::Running,
        }
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Direction::random(rng))
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == DriveMode::Running
    }

    /// Advances the ring by one refresh. Returns whether anything moved.
    pub fn apply_continuous_tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.angle += self.direction.sign() * TICK_STEP;
        true
    }

    /// Applies drag rotation and makes the driver keep turning the same way
    /// once the drag ends.
    pub fn apply_drag_delta(&mut self, delta: f64) {
        self.angle = (self.angle + delta) % 360.0;
        let direction = Direction::of(delta);
        if direction != self.direction {
            log::trace!("rotation direction {} -> {}", self.direction, direction);
            self.direction = direction;
        }
    }

    pub fn suspend(&mut self) {
        self.mode = DriveMode::Suspended;
    }

    pub fn resume(&mut self) {
        self.mode = DriveMode::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ticks_accumulate() {
        let mut rotation = Rotation::new(Direction::Forward);
        let mut last = rotation.angle();
        for _ in 0..1000 {
            assert!(rotation.apply_continuous_tick());
            assert!(rotation.angle() > last);
            last = rotation.angle();
        }
        assert!((rotation.angle() - 0.05 * 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_reverse_ticks() {
        let mut rotation = Rotation::new(Direction::Reverse);
        for _ in 0..20 {
            rotation.apply_continuous_tick();
        }
        assert!((rotation.angle() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_suspended_ignores_ticks() {
        let mut rotation = Rotation::new(Direction::Forward);
        rotation.suspend();
        assert!(!rotation.apply_continuous_tick());
        assert_eq!(rotation.angle(), 0.0);

        rotation.resume();
        assert!(rotation.apply_continuous_tick());
        assert_eq!(rotation.mode(), DriveMode::Running);
    }

    #[test]
    fn test_drag_delta_wraps_and_sets_direction() {
        let mut rotation = Rotation::new(Direction::Forward);
        rotation.apply_drag_delta(-1.5);
        assert_eq!(rotation.angle(), -1.5);
        assert_eq!(rotation.direction(), Direction::Reverse);

        rotation.apply_drag_delta(400.0);
        assert!((rotation.angle() - 38.5).abs() < 1e-9);
        assert_eq!(rotation.direction(), Direction::Forward);
    }

    #[test]
    fn test_random_direction_is_seedable() {
        let a = Rotation::with_rng(&mut StdRng::seed_from_u64(4));
        let b = Rotation::with_rng(&mut StdRng::seed_from_u64(4));
        assert_eq!(a.direction(), b.direction());
        assert!(a.is_running());
    }
}
