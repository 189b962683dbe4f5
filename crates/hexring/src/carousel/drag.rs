use derive_more::{Display, From, Into};

/// Weight of the newest pointer delta in the smoothed accumulator.
pub const SMOOTHING: f64 = 0.2;
/// Smoothed motion below this is treated as jitter while moving.
pub const APPLY_THRESHOLD: f64 = 0.1;
/// Residual motion above this is flushed when the pointer is released.
pub const FLUSH_THRESHOLD: f64 = 0.02;
/// Moves closer together than this are dropped (about 60 Hz).
pub const MOVE_INTERVAL_MS: u64 = 16;

/// Platform identifier of a mouse pointer or touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct PointerId(u64);

impl PointerId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// One pointer or touch event, reduced to what the carousel needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub id: PointerId,
    /// Event time in milliseconds, from any monotonic clock.
    pub time_ms: u64,
}

impl PointerSample {
    pub fn new(x: f64, id: u64, time_ms: u64) -> Self {
        Self {
            x,
            id: PointerId(id),
            time_ms,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Turns horizontal pointer motion into rotation deltas (degrees).
///
/// Only the pointer that started the gesture is followed; others are ignored
/// until it is released.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragHandler {
    tracked: Option<PointerId>,
    last_x: Option<f64>,
    pending: f64,
    last_move_ms: Option<u64>,
}

impl DragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn tracked(&self) -> Option<PointerId> {
        self.tracked
    }

    /// Smoothed pixel motion not yet fully consumed.
    pub fn pending(&self) -> f64 {
        self.pending
    }

    /// Starts a gesture. Returns `false` if another pointer already owns one.
    pub fn press(&mut self, sample: PointerSample) -> bool {
        if let Some(tracked) = self.tracked {
            log::trace!("ignoring pointer {} while {} is dragging", sample.id, tracked);
            return false;
        }
        self.tracked = Some(sample.id);
        self.last_x = Some(sample.x);
        self.pending = 0.0;
        self.last_move_ms = None;
        true
    }

    /// Feeds a move. Returns the rotation delta to apply, if any.
    pub fn motion(&mut self, sample: PointerSample, sensitivity: f64) -> Option<f64> {
        if self.tracked != Some(sample.id) {
            return None;
        }
        let last_x = self.last_x?;

        if let Some(last) = self.last_move_ms
            && sample.time_ms.saturating_sub(last) < MOVE_INTERVAL_MS
        {
            return None;
        }
        self.last_move_ms = Some(sample.time_ms);

        let delta_x = sample.x - last_x;
        self.last_x = Some(sample.x);
        self.pending = lerp(self.pending, delta_x, SMOOTHING);

        (self.pending.abs() > APPLY_THRESHOLD).then(|| self.pending * sensitivity)
    }

    /// Ends the gesture, returning the flushed residual delta, if any.
    ///
    /// Releases from pointers other than the tracked one are ignored.
    pub fn release(&mut self, id: PointerId, sensitivity: f64) -> Option<f64> {
        if self.tracked != Some(id) {
            return None;
        }
        let flush = (self.pending.abs() > FLUSH_THRESHOLD).then(|| self.pending * sensitivity);

        self.tracked = None;
        self.last_x = None;
        self.pending = 0.0;
        self.last_move_ms = None;
        flush
    }
}
