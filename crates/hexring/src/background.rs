//! Decorative shapes scattered behind the carousel.
//!
//! Shapes are placed in three horizontal bands by index (top, a sparse middle
//! band that keeps clear of the ring, and bottom) and re-rolled until they
//! keep a minimum pixel gap from the shapes already placed. Placement is best
//! effort: after [`MAX_PLACEMENT_ATTEMPTS`] the last candidate is kept anyway.

use crate::device::DeviceClass;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Arc;
use strum::{Display as StrumDisplay, EnumIter};

pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;
/// Extra pixels required between two shapes on top of their half sizes.
pub const MIN_GAP: f64 = 10.0;
pub const MIN_SIZE: f64 = 20.0;
pub const MAX_SIZE: f64 = 80.0;
pub const MIN_OPACITY: f64 = 0.05;
pub const MAX_OPACITY: f64 = 0.15;
/// Positions are clamped into this percentage range.
pub const EDGE_MARGIN: f64 = 5.0;
/// Height of a hexagon relative to its width.
pub const HEXAGON_HEIGHT_RATIO: f64 = 0.866;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Circle,
            1 => Self::Square,
            2 => Self::Triangle,
            _ => Self::Hexagon,
        }
    }

    /// Outline in a `size`-wide box whose origin is the top-left corner.
    pub fn outline(self, size: f64) -> ShapeOutline {
        match self {
            Self::Circle => ShapeOutline::Ellipse {
                width: size,
                height: size,
            },
            Self::Square => ShapeOutline::Polygon(vec![
                (0.0, 0.0),
                (size, 0.0),
                (size, size),
                (0.0, size),
            ]),
            Self::Triangle => {
                ShapeOutline::Polygon(vec![(size / 2.0, 0.0), (size, size), (0.0, size)])
            }
            Self::Hexagon => {
                let h = size * HEXAGON_HEIGHT_RATIO;
                ShapeOutline::Polygon(vec![
                    (size * 0.25, 0.0),
                    (size * 0.75, 0.0),
                    (size, h * 0.5),
                    (size * 0.75, h),
                    (size * 0.25, h),
                    (0.0, h * 0.5),
                ])
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutline {
    Ellipse { width: f64, height: f64 },
    Polygon(Vec<(f64, f64)>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundShape {
    pub id: usize,
    pub kind: ShapeKind,
    /// Width in pixels.
    pub size: f64,
    /// Horizontal position in percent of the viewport width.
    pub x: f64,
    /// Vertical position in percent of the viewport height.
    pub y: f64,
    /// Degrees.
    pub rotation: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel distance between two percentage positions.
    pub fn distance(&self, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
        let dx = (x1 - x2).abs() / 100.0 * self.width;
        let dy = (y1 - y2).abs() / 100.0 * self.height;
        dx.hypot(dy)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

pub fn generate_shapes<R: Rng + ?Sized>(
    count: usize,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<BackgroundShape> {
    let mut shapes: Vec<BackgroundShape> = Vec::with_capacity(count);

    for i in 0..count {
        let kind = ShapeKind::for_index(i);
        let size = rng.random_range(MIN_SIZE..MAX_SIZE);

        let mut attempts = 0;
        let (x, y) = loop {
            let y = band_y(i, count, rng);
            let x = rng.random_range(5.0..95.0);
            let candidate = (x, y);
            attempts += 1;
            if attempts >= MAX_PLACEMENT_ATTEMPTS || !collides(candidate, size, &shapes, viewport)
            {
                break candidate;
            }
        };
        if attempts >= MAX_PLACEMENT_ATTEMPTS && collides((x, y), size, &shapes, viewport) {
            log::debug!("background shape {i} placed with overlap after {attempts} attempts");
        }

        shapes.push(BackgroundShape {
            id: i,
            kind,
            size,
            x: x.clamp(EDGE_MARGIN, 100.0 - EDGE_MARGIN),
            y: y.clamp(EDGE_MARGIN, 100.0 - EDGE_MARGIN),
            rotation: rng.random_range(0.0..360.0),
            opacity: rng.random_range(MIN_OPACITY..MAX_OPACITY),
        });
    }

    shapes
}

/// Vertical position by thirds of the index range; the middle band is
/// narrow to keep the carousel area mostly clear.
fn band_y<R: Rng + ?Sized>(index: usize, count: usize, rng: &mut R) -> f64 {
    let (i, n) = (index as f64, count as f64);
    if i < n / 3.0 {
        rng.random_range(0.0..25.0)
    } else if i < n * 2.0 / 3.0 {
        rng.random_range(30.0..50.0)
    } else {
        rng.random_range(60.0..100.0)
    }
}

fn collides(
    candidate: (f64, f64),
    size: f64,
    placed: &[BackgroundShape],
    viewport: Viewport,
) -> bool {
    placed.iter().any(|other| {
        let min_distance = (size + other.size) / 2.0 + MIN_GAP;
        viewport.distance(candidate, (other.x, other.y)) < min_distance
    })
}

/// Memoized shape sets, one per `(count, device class)`.
///
/// The viewport only matters the first time a key is generated; later
/// resizes within the same device class reuse the stored set.
#[derive(Debug, Default)]
pub struct ShapeCache {
    seed: Option<u64>,
    sets: RwLock<HashMap<(usize, DeviceClass), Arc<[BackgroundShape]>>>,
}

impl ShapeCache {
    /// `seed` makes every generated set reproducible; `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            sets: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_or_generate(
        &self,
        count: usize,
        device: DeviceClass,
        viewport: Viewport,
    ) -> Arc<[BackgroundShape]> {
        let key = (count, device);
        if let Some(shapes) = self.sets.read().get(&key) {
            return shapes.clone();
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let shapes: Arc<[BackgroundShape]> = generate_shapes(count, viewport, &mut rng).into();
        log::debug!("generated {count} background shapes for {device} layout");

        self.sets
            .write()
            .entry(key)
            .or_insert(shapes)
            .clone()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
