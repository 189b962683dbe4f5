use super::Point;
use std::f64::consts::PI;
use std::fmt;

/// Corner rounding as a fraction of the hexagon radius.
pub const CORNER_RADIUS_FACTOR: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

impl PathSegment {
    /// End point of the segment, if it has one.
    pub fn anchor(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::QuadTo { to: p, .. } => Some(p),
            Self::Close => None,
        }
    }
}

/// A regular hexagon with rounded corners, inscribed in a `2 * size` square
/// and centred at `(size, size)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HexagonPath {
    size: f64,
    corner_radius: f64,
    segments: Vec<PathSegment>,
}

/// Where a rounded corner starts (on the incoming edge) and ends (on the
/// outgoing edge).
#[derive(Debug, Clone, Copy)]
struct Corner {
    vertex: Point,
    entry: Point,
    exit: Point,
}

impl HexagonPath {
    pub fn new(size: f64) -> Self {
        let corner_radius = size * CORNER_RADIUS_FACTOR;
        let vertices = Self::vertices(size);
        let corners: Vec<Corner> = (0..6)
            .map(|i| Self::corner(&vertices, i, corner_radius))
            .collect();

        let mut segments = Vec::with_capacity(2 + corners.len() * 2);
        segments.push(PathSegment::MoveTo(corners[0].exit));
        // corner 0 is closed last so the contour ends where it began
        for corner in corners.iter().skip(1).chain(corners.first()) {
            segments.push(PathSegment::LineTo(corner.entry));
            segments.push(PathSegment::QuadTo {
                control: corner.vertex,
                to: corner.exit,
            });
        }
        segments.push(PathSegment::Close);

        Self {
            size,
            corner_radius,
            segments,
        }
    }

    /// Vertices of the sharp hexagon, 60 degrees apart starting at the
    /// rightmost point.
    pub fn vertices(size: f64) -> [Point; 6] {
        std::array::from_fn(|i| {
            let angle = (i as f64 * 60.0) * PI / 180.0;
            Point::new(size + angle.cos() * size, size + angle.sin() * size)
        })
    }

    fn corner(vertices: &[Point; 6], i: usize, radius: f64) -> Corner {
        let vertex = vertices[i];
        let prev = vertices[(i + 5) % 6];
        let next = vertices[(i + 1) % 6];

        let (dx1, dy1) = (vertex.x - prev.x, vertex.y - prev.y);
        let len1 = dx1.hypot(dy1);
        let (dx2, dy2) = (next.x - vertex.x, next.y - vertex.y);
        let len2 = dx2.hypot(dy2);

        Corner {
            vertex,
            entry: Point::new(
                vertex.x - dx1 / len1 * radius,
                vertex.y - dy1 / len1 * radius,
            ),
            exit: Point::new(
                vertex.x + dx2 / len2 * radius,
                vertex.y + dy2 / len2 * radius,
            ),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn first_anchor(&self) -> Option<Point> {
        self.segments.first().and_then(PathSegment::anchor)
    }

    pub fn last_anchor(&self) -> Option<Point> {
        self.segments.iter().rev().find_map(PathSegment::anchor)
    }
}

/// SVG path data, e.g. `M 186.2,0 L ... Q ... Z`.
impl fmt::Display for HexagonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match segment {
                PathSegment::MoveTo(p) => write!(f, "M {},{}", p.x, p.y)?,
                PathSegment::LineTo(p) => write!(f, "L {},{}", p.x, p.y)?,
                PathSegment::QuadTo { control, to } => {
                    write!(f, "Q {},{} {},{}", control.x, control.y, to.x, to.y)?
                }
                PathSegment::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contour_is_closed() {
        for size in [0.5, 1.0, 75.0, 98.0, 1234.5] {
            let path = HexagonPath::new(size);
            assert_eq!(path.first_anchor(), path.last_anchor(), "size {size}");
            assert_eq!(path.segments().last(), Some(&PathSegment::Close));
        }
    }

    #[test]
    fn test_segment_layout() {
        let path = HexagonPath::new(98.0);
        let segments = path.segments();
        // move + six (line, curve) pairs + close
        assert_eq!(segments.len(), 14);
        assert!(matches!(segments[0], PathSegment::MoveTo(_)));
        for pair in segments[1..13].chunks(2) {
            assert!(matches!(pair[0], PathSegment::LineTo(_)));
            assert!(matches!(pair[1], PathSegment::QuadTo { .. }));
        }
    }

    #[test]
    fn test_curves_pivot_on_vertices() {
        let size = 50.0;
        let vertices = HexagonPath::vertices(size);
        let path = HexagonPath::new(size);
        let controls: Vec<Point> = path
            .segments()
            .iter()
            .filter_map(|s| match s {
                PathSegment::QuadTo { control, .. } => Some(*control),
                _ => None,
            })
            .collect();
        let expected: Vec<Point> = vertices[1..].iter().chain(&vertices[..1]).copied().collect();
        assert_eq!(controls, expected);
    }

    #[test]
    fn test_corners_are_cut_by_radius() {
        let size = 100.0;
        let path = HexagonPath::new(size);
        assert_eq!(path.corner_radius(), 10.0);
        for segment in path.segments() {
            if let PathSegment::QuadTo { control, to } = segment {
                assert!((control.distance(*to) - 10.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_stays_inside_bounding_square() {
        let size = 60.0;
        let path = HexagonPath::new(size);
        for p in path.segments().iter().filter_map(PathSegment::anchor) {
            assert!((0.0..=2.0 * size + 1e-9).contains(&p.x));
            assert!((0.0..=2.0 * size + 1e-9).contains(&p.y));
        }
    }

    #[test]
    fn test_svg_string() {
        let svg = HexagonPath::new(10.0).to_string();
        assert!(svg.starts_with("M "));
        assert!(svg.ends_with(" Z"));
        assert_eq!(svg.matches('Q').count(), 6);
        assert_eq!(svg.matches('L').count(), 6);
    }
}
