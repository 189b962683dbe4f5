use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub stage: Srgba<f64>,
    /// Circles and triangles.
    pub shape_dark: Srgba<f64>,
    /// Squares and hexagons.
    pub shape_light: Srgba<f64>,
    pub tile_stroke: Srgba<f64>,
    pub tile_text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            stage: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.976, 0.98, 0.984, 1.0),
                Some(1.0),
            ),
            shape_dark: Self::lookup_color(
                context,
                "hexreel_shape_dark",
                Srgba::new(0.42, 0.447, 0.502, 1.0),
                None,
            ),
            shape_light: Self::lookup_color(
                context,
                "hexreel_shape_light",
                Srgba::new(0.612, 0.639, 0.686, 1.0),
                None,
            ),
            tile_stroke: Srgba::new(1.0, 1.0, 1.0, 0.9),
            tile_text: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color hexreel_shape_dark #6B7280;
@define-color hexreel_shape_light #9CA3AF;

.hexreel-stage {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
