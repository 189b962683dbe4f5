use crate::features::Feature;
use crate::geometry::{HexagonPath, TilePosition};

/// Tiles closer than this fraction of their scaled size count as overlapping.
pub const OVERLAP_FACTOR: f64 = 0.8;
/// Overlapping tiles further apart in depth than this are left alone.
pub const DEPTH_FADE_RANGE: f64 = 0.3;
pub const BACK_FADE: f64 = 0.7;
pub const FRONT_FADE: f64 = 0.3;

pub const MAX_BLUR: f64 = 4.0;
pub const TRANSITION_BLUR: f64 = 3.0;

/// Rotation speed (degrees per frame) at or below which tiles ease slowly.
pub const BASE_SPEED: f64 = 0.1;
pub const BASE_TRANSITION_MS: f64 = 700.0;
pub const MIN_TRANSITION_MS: f64 = 50.0;

/// Blur radius in pixels; only tiles near the front are sharp.
pub fn blur_amount(cycle_position: f64) -> f64 {
    if cycle_position > 0.9 {
        0.0
    } else if cycle_position > 0.6 {
        let progress = (cycle_position - 0.6) / 0.3;
        TRANSITION_BLUR * (1.0 - progress)
    } else {
        MAX_BLUR
    }
}

/// Opacity of `positions[index]` after fading against every tile that
/// overlaps it at a similar depth. The farther tile of a pair fades most.
pub fn depth_faded_opacity(positions: &[TilePosition], index: usize, tile_size: f64) -> f64 {
    let Some(current) = positions.get(index) else {
        return 0.0;
    };

    let opacity = positions
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .fold(current.opacity, |opacity, (_, other)| {
            let distance = current.offset().distance(other.offset());
            let threshold = tile_size * current.scale.max(other.scale) * OVERLAP_FACTOR;
            let depth_difference = (current.depth_factor - other.depth_factor).abs();

            if distance >= threshold || depth_difference >= DEPTH_FADE_RANGE {
                return opacity;
            }

            let closeness = 1.0 - depth_difference / DEPTH_FADE_RANGE;
            let reduction = if current.depth_factor < other.depth_factor {
                closeness * BACK_FADE
            } else {
                closeness * FRONT_FADE
            };
            opacity * (1.0 - reduction)
        });

    opacity.clamp(0.0, 1.0)
}

/// How long the renderer should ease a tile towards its new transform.
/// Faster rotation gets shorter transitions so tiles keep up.
pub fn transition_duration(speed: f64) -> f64 {
    let speed = speed.abs();
    if speed <= BASE_SPEED {
        return BASE_TRANSITION_MS;
    }
    (BASE_TRANSITION_MS * (BASE_SPEED / speed)).max(MIN_TRANSITION_MS)
}

/// How a tile looks on screen. Tiles ease towards the values their position
/// calls for instead of jumping there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileAppearance {
    /// Translation relative to the ring centre.
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur: f64,
}

impl TileAppearance {
    /// Moves `t` of the way towards `target`.
    pub fn approach(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        Self {
            x: lerp(self.x, target.x),
            y: lerp(self.y, target.y),
            scale: lerp(self.scale, target.scale),
            opacity: lerp(self.opacity, target.opacity),
            blur: lerp(self.blur, target.blur),
        }
    }

    /// Close enough to `target` that the difference is not visible.
    pub fn is_near(&self, target: &Self) -> bool {
        (self.x - target.x).abs() < 0.1
            && (self.y - target.y).abs() < 0.1
            && (self.scale - target.scale).abs() < 1e-3
            && (self.opacity - target.opacity).abs() < 1e-3
            && (self.blur - target.blur).abs() < 0.01
    }
}

/// Everything the renderer needs to paint one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileFrame {
    pub index: usize,
    pub feature: &'static Feature,
    pub position: TilePosition,
    /// Opacity after depth fading.
    pub opacity: f64,
    pub blur: f64,
    pub transition_ms: f64,
    /// What to paint. Starts at [`TileFrame::target`]; an
    /// [`Easing`](super::Easing) may hold it back.
    pub shown: TileAppearance,
}

impl TileFrame {
    pub fn target(&self) -> TileAppearance {
        TileAppearance {
            x: self.position.x,
            y: self.position.y,
            scale: self.position.scale,
            opacity: self.opacity,
            blur: self.blur,
        }
    }

    pub fn z_index(&self) -> f64 {
        self.position.z_index
    }
}

/// One rendered state of the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tiles: Vec<TileFrame>,
    /// Shared outline of every tile, in tile-local coordinates.
    pub outline: HexagonPath,
    pub tile_size: f64,
}

impl Frame {
    /// Tiles back to front.
    pub fn paint_order(&self) -> Vec<&TileFrame> {
        let mut tiles: Vec<&TileFrame> = self.tiles.iter().collect();
        tiles.sort_by(|a, b| a.z_index().total_cmp(&b.z_index()));
        tiles
    }
}
