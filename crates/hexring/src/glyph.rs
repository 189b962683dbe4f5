//! Line-art outlines for tile icons, drawn with round 2-unit strokes in a
//! 24 x 24 box.

use crate::features::Icon;

/// Edge of the square every glyph is designed in.
pub const GLYPH_BOX: f64 = 24.0;
pub const GLYPH_STROKE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphOp {
    Move(f64, f64),
    Line(f64, f64),
    /// Cubic curve: two control points, then the end point.
    Curve(f64, f64, f64, f64, f64, f64),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphPart {
    Path(&'static [GlyphOp]),
    Circle { cx: f64, cy: f64, r: f64 },
    /// Clockwise on screen from `from` to `to` degrees, 0 pointing right.
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        from: f64,
        to: f64,
    },
}

use GlyphOp::{Close, Curve, Line, Move};

const USER_CHECK: &[GlyphPart] = &[
    GlyphPart::Circle {
        cx: 9.0,
        cy: 7.0,
        r: 4.0,
    },
    GlyphPart::Path(&[
        Move(2.0, 21.0),
        Line(2.0, 19.0),
        Curve(2.0, 16.8, 3.8, 15.0, 6.0, 15.0),
        Line(12.0, 15.0),
        Curve(14.2, 15.0, 16.0, 16.8, 16.0, 19.0),
        Line(16.0, 21.0),
    ]),
    GlyphPart::Path(&[Move(16.0, 11.0), Line(18.0, 13.0), Line(22.0, 9.0)]),
];

const SHIELD: &[GlyphPart] = &[GlyphPart::Path(&[
    Move(12.0, 22.0),
    Curve(12.0, 22.0, 20.0, 18.0, 20.0, 12.0),
    Line(20.0, 5.0),
    Line(12.0, 2.0),
    Line(4.0, 5.0),
    Line(4.0, 12.0),
    Curve(4.0, 18.0, 12.0, 22.0, 12.0, 22.0),
    Close,
])];

const FILE_TEXT: &[GlyphPart] = &[
    GlyphPart::Path(&[
        Move(14.0, 2.0),
        Line(6.0, 2.0),
        Curve(4.9, 2.0, 4.0, 2.9, 4.0, 4.0),
        Line(4.0, 20.0),
        Curve(4.0, 21.1, 4.9, 22.0, 6.0, 22.0),
        Line(18.0, 22.0),
        Curve(19.1, 22.0, 20.0, 21.1, 20.0, 20.0),
        Line(20.0, 8.0),
        Close,
    ]),
    GlyphPart::Path(&[
        Move(14.0, 2.0),
        Line(14.0, 8.0),
        Line(20.0, 8.0),
        Move(16.0, 13.0),
        Line(8.0, 13.0),
        Move(16.0, 17.0),
        Line(8.0, 17.0),
        Move(10.0, 9.0),
        Line(8.0, 9.0),
    ]),
];

const ALERT_TRIANGLE: &[GlyphPart] = &[
    GlyphPart::Path(&[
        Move(10.3, 3.9),
        Line(1.8, 18.0),
        Curve(1.2, 19.2, 2.1, 21.0, 3.5, 21.0),
        Line(20.5, 21.0),
        Curve(21.9, 21.0, 22.8, 19.2, 22.2, 18.0),
        Line(13.7, 3.9),
        Curve(13.0, 2.7, 11.0, 2.7, 10.3, 3.9),
        Close,
    ]),
    GlyphPart::Path(&[
        Move(12.0, 9.0),
        Line(12.0, 13.0),
        Move(12.0, 17.0),
        Line(12.01, 17.0),
    ]),
];

const BRIEFCASE: &[GlyphPart] = &[
    GlyphPart::Path(&[
        Move(4.0, 7.0),
        Line(20.0, 7.0),
        Curve(21.1, 7.0, 22.0, 7.9, 22.0, 9.0),
        Line(22.0, 19.0),
        Curve(22.0, 20.1, 21.1, 21.0, 20.0, 21.0),
        Line(4.0, 21.0),
        Curve(2.9, 21.0, 2.0, 20.1, 2.0, 19.0),
        Line(2.0, 9.0),
        Curve(2.0, 7.9, 2.9, 7.0, 4.0, 7.0),
        Close,
    ]),
    GlyphPart::Path(&[
        Move(16.0, 21.0),
        Line(16.0, 5.0),
        Curve(16.0, 3.9, 15.1, 3.0, 14.0, 3.0),
        Line(10.0, 3.0),
        Curve(8.9, 3.0, 8.0, 3.9, 8.0, 5.0),
        Line(8.0, 21.0),
    ]),
];

const CAR_FRONT: &[GlyphPart] = &[
    GlyphPart::Path(&[
        Move(21.0, 8.0),
        Line(19.0, 10.0),
        Line(17.6, 6.3),
        Curve(17.3, 5.5, 16.6, 5.0, 15.7, 5.0),
        Line(8.3, 5.0),
        Curve(7.4, 5.0, 6.7, 5.5, 6.4, 6.3),
        Line(5.0, 10.0),
        Line(3.0, 8.0),
    ]),
    GlyphPart::Path(&[
        Move(5.0, 10.0),
        Line(19.0, 10.0),
        Curve(20.1, 10.0, 21.0, 10.9, 21.0, 12.0),
        Line(21.0, 16.0),
        Curve(21.0, 17.1, 20.1, 18.0, 19.0, 18.0),
        Line(5.0, 18.0),
        Curve(3.9, 18.0, 3.0, 17.1, 3.0, 16.0),
        Line(3.0, 12.0),
        Curve(3.0, 10.9, 3.9, 10.0, 5.0, 10.0),
        Close,
    ]),
    GlyphPart::Path(&[
        Move(7.0, 14.0),
        Line(7.01, 14.0),
        Move(17.0, 14.0),
        Line(17.01, 14.0),
        Move(5.0, 18.0),
        Line(5.0, 20.0),
        Move(19.0, 18.0),
        Line(19.0, 20.0),
    ]),
];

const HEART: &[GlyphPart] = &[GlyphPart::Path(&[
    Move(12.0, 21.0),
    Curve(5.0, 16.0, 2.0, 12.5, 2.0, 8.5),
    Curve(2.0, 5.4, 4.4, 3.0, 7.5, 3.0),
    Curve(9.3, 3.0, 11.0, 4.0, 12.0, 5.5),
    Curve(13.0, 4.0, 14.7, 3.0, 16.5, 3.0),
    Curve(19.6, 3.0, 22.0, 5.4, 22.0, 8.5),
    Curve(22.0, 12.5, 19.0, 16.0, 12.0, 21.0),
    Close,
])];

const COPYRIGHT: &[GlyphPart] = &[
    GlyphPart::Circle {
        cx: 12.0,
        cy: 12.0,
        r: 10.0,
    },
    GlyphPart::Arc {
        cx: 12.0,
        cy: 12.0,
        r: 4.0,
        from: 45.0,
        to: 315.0,
    },
];

impl Icon {
    pub fn glyph(self) -> &'static [GlyphPart] {
        match self {
            Self::UserCheck => USER_CHECK,
            Self::Shield => SHIELD,
            Self::FileText => FILE_TEXT,
            Self::AlertTriangle => ALERT_TRIANGLE,
            Self::Briefcase => BRIEFCASE,
            Self::CarFront => CAR_FRONT,
            Self::Heart => HEART,
            Self::Copyright => COPYRIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GlyphOp::{Close, Curve, Line, Move};
    use super::*;
    use strum::IntoEnumIterator;

    fn points(part: &GlyphPart) -> Vec<(f64, f64)> {
        match *part {
            GlyphPart::Path(ops) => ops
                .iter()
                .flat_map(|op| match *op {
                    Move(x, y) | Line(x, y) => vec![(x, y)],
                    Curve(x1, y1, x2, y2, x, y) => vec![(x1, y1), (x2, y2), (x, y)],
                    Close => vec![],
                })
                .collect(),
            GlyphPart::Circle { cx, cy, r } | GlyphPart::Arc { cx, cy, r, .. } => {
                vec![(cx - r, cy - r), (cx + r, cy + r)]
            }
        }
    }

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in Icon::iter() {
            assert!(!icon.glyph().is_empty(), "{icon} has no glyph");
        }
    }

    #[test]
    fn test_glyphs_fit_their_box() {
        for icon in Icon::iter() {
            for part in icon.glyph() {
                for (x, y) in points(part) {
                    assert!(
                        (0.0..=GLYPH_BOX).contains(&x) && (0.0..=GLYPH_BOX).contains(&y),
                        "{icon} leaves the box at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_paths_start_with_move() {
        for icon in Icon::iter() {
            for part in icon.glyph() {
                if let GlyphPart::Path(ops) = part {
                    assert!(matches!(ops.first(), Some(Move(..))), "{icon}");
                }
            }
        }
    }
}
