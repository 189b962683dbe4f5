use crate::gui::scene::Scene;
use crate::gui::theme::ThemeColors;
use cairo::{Context, LinearGradient};
use hexring::background::{BackgroundShape, ShapeKind, ShapeOutline, Viewport};
use hexring::carousel::{Frame, TileFrame};
use hexring::device::{DeviceClass, RingLayout};
use hexring::glyph::{GLYPH_BOX, GLYPH_STROKE, GlyphOp, GlyphPart};
use hexring::geometry::{HexagonPath, PathSegment, Point};
use palette::{Srgb, Srgba};
use std::f64::consts::PI;

const TILE_STROKE_WIDTH: f64 = 2.5;
/// Blur is approximated by painting this many offset copies.
const BLUR_SAMPLES: usize = 4;
const LINE_SPACING: f64 = 1.1;
/// Space between the glyph and the title.
const ICON_GAP: f64 = 4.0;

/// Where the ring centre sits relative to the middle of the window.
fn ring_offset(device: DeviceClass) -> (f64, f64) {
    match device {
        DeviceClass::Compact => (0.0, -55.0),
        DeviceClass::Full => (40.0, -5.0),
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn to_unit(color: Srgb<u8>) -> (f64, f64, f64) {
    let c: Srgb<f64> = color.into_format();
    (c.red, c.green, c.blue)
}

/// Appends a path to the context. Quadratic corners become cubics since
/// cairo has no quadratic primitive.
fn trace_path(cr: &Context, path: &HexagonPath) -> Result<(), cairo::Error> {
    cr.new_path();
    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(p) => cr.move_to(p.x, p.y),
            PathSegment::LineTo(p) => cr.line_to(p.x, p.y),
            PathSegment::QuadTo { control, to } => {
                let (x0, y0) = cr.current_point()?;
                let c1 = Point::new(
                    x0 + 2.0 / 3.0 * (control.x - x0),
                    y0 + 2.0 / 3.0 * (control.y - y0),
                );
                let c2 = Point::new(
                    to.x + 2.0 / 3.0 * (control.x - to.x),
                    to.y + 2.0 / 3.0 * (control.y - to.y),
                );
                cr.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
            }
            PathSegment::Close => cr.close_path(),
        }
    }
    Ok(())
}

fn trace_glyph(cr: &Context, parts: &[GlyphPart]) {
    cr.new_path();
    for part in parts {
        match *part {
            GlyphPart::Path(ops) => {
                for op in ops {
                    match *op {
                        GlyphOp::Move(x, y) => cr.move_to(x, y),
                        GlyphOp::Line(x, y) => cr.line_to(x, y),
                        GlyphOp::Curve(x1, y1, x2, y2, x, y) => cr.curve_to(x1, y1, x2, y2, x, y),
                        GlyphOp::Close => cr.close_path(),
                    }
                }
            }
            GlyphPart::Circle { cx, cy, r } => {
                cr.new_sub_path();
                cr.arc(cx, cy, r, 0.0, 2.0 * PI);
                cr.close_path();
            }
            GlyphPart::Arc { cx, cy, r, from, to } => {
                cr.new_sub_path();
                cr.arc(cx, cy, r, from.to_radians(), to.to_radians());
            }
        }
    }
}

/// Height of a shape's box; its width is always `size`.
fn shape_height(outline: &ShapeOutline) -> f64 {
    match outline {
        ShapeOutline::Ellipse { height, .. } => *height,
        ShapeOutline::Polygon(points) => points.iter().map(|p| p.1).fold(0.0, f64::max),
    }
}

/// Top-left corner of a shape's box in window pixels. The box turns about
/// its own centre.
fn shape_origin(shape: &BackgroundShape, viewport: Viewport) -> Point {
    Point::new(
        shape.x / 100.0 * viewport.width,
        shape.y / 100.0 * viewport.height,
    )
}

fn shape_color(kind: ShapeKind, colors: &ThemeColors) -> Srgba<f64> {
    match kind {
        ShapeKind::Circle | ShapeKind::Triangle => colors.shape_dark,
        ShapeKind::Square | ShapeKind::Hexagon => colors.shape_light,
    }
}

struct ShapeRenderer<'a> {
    shape: &'a BackgroundShape,
    viewport: Viewport,
}

impl ShapeRenderer<'_> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let size = self.shape.size;
        let outline = self.shape.kind.outline(size);
        let height = shape_height(&outline);
        let origin = shape_origin(self.shape, self.viewport);

        cr.save()?;
        cr.translate(origin.x + size / 2.0, origin.y + height / 2.0);
        cr.rotate(self.shape.rotation.to_radians());
        cr.translate(-size / 2.0, -height / 2.0);

        match outline {
            ShapeOutline::Ellipse { width, height } => {
                cr.save()?;
                cr.translate(width / 2.0, height / 2.0);
                cr.scale(width / 2.0, height / 2.0);
                cr.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
                cr.restore()?;
            }
            ShapeOutline::Polygon(points) => {
                for (i, (x, y)) in points.into_iter().enumerate() {
                    if i == 0 {
                        cr.move_to(x, y);
                    } else {
                        cr.line_to(x, y);
                    }
                }
                cr.close_path();
            }
        }

        let mut fill = shape_color(self.shape.kind, colors);
        fill.alpha *= self.shape.opacity;
        set_source(cr, fill);
        cr.fill()?;
        cr.restore()
    }
}

struct TileRenderer<'a> {
    tile: &'a TileFrame,
    outline: &'a HexagonPath,
    layout: &'a RingLayout,
}

impl TileRenderer<'_> {
    fn draw(&self, cr: &Context, center: Point, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let shown = self.tile.shown;
        if shown.opacity <= 0.0 {
            return Ok(());
        }

        if shown.blur <= 0.0 {
            return self.draw_layer(cr, center, colors, shown.opacity);
        }

        // each copy carries enough alpha that the stack totals the opacity
        let per_copy = 1.0 - (1.0 - shown.opacity).powf(1.0 / BLUR_SAMPLES as f64);
        for i in 0..BLUR_SAMPLES {
            let angle = i as f64 / BLUR_SAMPLES as f64 * 2.0 * PI;
            let shifted = Point::new(
                center.x + angle.cos() * shown.blur / 2.0,
                center.y + angle.sin() * shown.blur / 2.0,
            );
            self.draw_layer(cr, shifted, colors, per_copy)?;
        }
        Ok(())
    }

    fn draw_layer(
        &self,
        cr: &Context,
        center: Point,
        colors: &ThemeColors,
        alpha: f64,
    ) -> Result<(), cairo::Error> {
        let shown = self.tile.shown;
        let size = self.outline.size();

        cr.save()?;
        cr.translate(center.x + shown.x, center.y + shown.y);
        cr.scale(shown.scale, shown.scale);
        cr.translate(-size, -size);

        cr.push_group();
        self.draw_hexagon(cr, colors)?;
        self.draw_content(cr, colors)?;
        cr.pop_group_to_source()?;
        cr.paint_with_alpha(alpha)?;
        cr.restore()
    }

    fn draw_hexagon(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let size = self.outline.size();
        let gradient_colors = self.tile.feature.colors();
        let gradient = LinearGradient::new(0.0, 0.0, 2.0 * size, 2.0 * size);
        let (r, g, b) = to_unit(gradient_colors.from_color);
        gradient.add_color_stop_rgb(0.0, r, g, b);
        let (r, g, b) = to_unit(gradient_colors.to_color);
        gradient.add_color_stop_rgb(1.0, r, g, b);

        trace_path(cr, self.outline)?;
        cr.set_source(&gradient)?;
        cr.fill_preserve()?;
        set_source(cr, colors.tile_stroke);
        cr.set_line_width(TILE_STROKE_WIDTH);
        cr.stroke()
    }

    /// Glyph above the wrapped title, the pair centred on the hexagon.
    fn draw_content(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let size = self.outline.size();
        let font_size = self.layout.font_size;
        let icon_size = self.layout.icon_size;

        set_source(cr, colors.tile_text);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(font_size);
        let lines = wrap_title(cr, self.tile.feature.title, self.layout.title_width);
        let line_height = font_size * LINE_SPACING;

        let block = icon_size + ICON_GAP + line_height * lines.len() as f64;
        let top = size - block / 2.0;

        cr.save()?;
        cr.translate(size - icon_size / 2.0, top);
        cr.scale(icon_size / GLYPH_BOX, icon_size / GLYPH_BOX);
        trace_glyph(cr, self.tile.feature.icon.glyph());
        cr.set_line_width(GLYPH_STROKE);
        cr.set_line_cap(cairo::LineCap::Round);
        cr.set_line_join(cairo::LineJoin::Round);
        cr.stroke()?;
        cr.restore()?;

        let first_baseline = top + icon_size + ICON_GAP + font_size;
        for (i, line) in lines.iter().enumerate() {
            if let Ok(ext) = cr.text_extents(line) {
                cr.move_to(
                    size - ext.width() / 2.0,
                    first_baseline + i as f64 * line_height,
                );
                cr.show_text(line)?;
            }
        }
        Ok(())
    }
}

/// Greedy word wrap against the current font.
fn wrap_title(cr: &Context, title: &str, max_width: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in title.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let fits = cr
            .text_extents(&candidate)
            .map(|ext| ext.width() <= max_width)
            .unwrap_or(true);
        if fits || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Paints the stage, the background shapes and `frame`, whose tiles carry
/// their eased appearance.
pub fn draw(
    cr: &Context,
    scene: &Scene,
    frame: &Frame,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    set_source(cr, colors.stage);
    cr.paint()?;

    let viewport = scene.viewport.unwrap_or(Viewport::new(width, height));
    for shape in scene.shapes.iter() {
        ShapeRenderer { shape, viewport }.draw(cr, colors)?;
    }

    let device = scene.carousel.device();
    let (dx, dy) = ring_offset(device);
    let center = Point::new(width / 2.0 + dx, height / 2.0 + dy);

    for tile in frame.paint_order() {
        TileRenderer {
            tile,
            outline: &frame.outline,
            layout: device.layout(),
        }
        .draw(cr, center, colors)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> ThemeColors {
        ThemeColors {
            stage: Srgba::new(1.0, 1.0, 1.0, 1.0),
            shape_dark: Srgba::new(0.42, 0.447, 0.502, 1.0),
            shape_light: Srgba::new(0.612, 0.639, 0.686, 1.0),
            tile_stroke: Srgba::new(1.0, 1.0, 1.0, 0.9),
            tile_text: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    #[test]
    fn test_shape_box_anchored_at_top_left() {
        let shape = BackgroundShape {
            id: 0,
            kind: ShapeKind::Square,
            size: 40.0,
            x: 25.0,
            y: 50.0,
            rotation: 30.0,
            opacity: 0.1,
        };
        let origin = shape_origin(&shape, Viewport::new(800.0, 600.0));
        assert_eq!(origin, Point::new(200.0, 300.0));
    }

    #[test]
    fn test_shape_fills_alternate_by_kind() {
        let colors = colors();
        assert_eq!(shape_color(ShapeKind::Circle, &colors), colors.shape_dark);
        assert_eq!(shape_color(ShapeKind::Triangle, &colors), colors.shape_dark);
        assert_eq!(shape_color(ShapeKind::Square, &colors), colors.shape_light);
        assert_eq!(shape_color(ShapeKind::Hexagon, &colors), colors.shape_light);
    }

    #[test]
    fn test_shape_heights() {
        assert_eq!(shape_height(&ShapeKind::Circle.outline(30.0)), 30.0);
        assert_eq!(shape_height(&ShapeKind::Triangle.outline(30.0)), 30.0);
        assert!((shape_height(&ShapeKind::Hexagon.outline(30.0)) - 25.98).abs() < 1e-9);
    }
}
