use crate::config::{Config, Overrides};
use hexring::background::{BackgroundShape, ShapeCache, Viewport};
use hexring::carousel::{Carousel, Easing, Frame};
use hexring::device::DeviceClass;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Everything drawn in the window: the ring and the shapes behind it.
pub struct Scene {
    pub carousel: Carousel,
    pub shapes: Arc<[BackgroundShape]>,
    pub viewport: Option<Viewport>,
    config: Config,
    overrides: Overrides,
    cache: ShapeCache,
    easing: Easing,
}

impl Scene {
    pub fn new(config: Config, overrides: Overrides) -> Self {
        let config = config.with_overrides(&overrides);
        let device = config.device.unwrap_or_default();
        let carousel = match config.seed {
            Some(seed) => Carousel::with_rng(device, &mut StdRng::seed_from_u64(seed)),
            None => Carousel::with_rng(device, &mut rand::rng()),
        };

        Self {
            carousel,
            shapes: Arc::from([]),
            viewport: None,
            cache: ShapeCache::new(config.seed),
            easing: Easing::new(),
            config,
            overrides,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn device(&self) -> DeviceClass {
        self.carousel.device()
    }

    /// Follows a window size change. Returns whether a redraw is needed.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let viewport = Viewport::new(width, height);
        let changed = self.viewport != Some(viewport);
        self.viewport = Some(viewport);
        self.refresh_layout(viewport) || changed
    }

    pub fn reload(&mut self, config: Config) {
        let config = config.with_overrides(&self.overrides);
        if config.seed != self.cache.seed() {
            self.cache = ShapeCache::new(config.seed);
        }
        self.config = config;
        if let Some(viewport) = self.viewport {
            self.refresh_layout(viewport);
        } else if let Some(device) = self.config.device {
            self.carousel.set_device_class(device);
        }
    }

    /// The ring as painted at `now_ms`, eased from the previous call, and
    /// whether every tile has caught up with the rotation.
    pub fn frame(&mut self, now_ms: f64) -> (Frame, bool) {
        let mut frame = self.carousel.frame();
        let settled = self.easing.apply(&mut frame, now_ms);
        (frame, settled)
    }

    fn refresh_layout(&mut self, viewport: Viewport) -> bool {
        let device = self.config.device_for_width(viewport.width);
        let changed = self.carousel.set_device_class(device);

        let count = self.config.shapes.for_device(device);
        let shapes = self.cache.get_or_generate(count, device, viewport);
        let replaced = !Arc::ptr_eq(&shapes, &self.shapes);
        self.shapes = shapes;
        changed || replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapeCounts;
    use hexring::carousel::PointerSample;

    fn seeded() -> Config {
        Config {
            seed: Some(42),
            ..Config::default()
        }
    }

    #[test]
    fn test_resize_picks_device_and_shapes() {
        let mut scene = Scene::new(seeded(), Overrides::default());
        assert!(scene.shapes.is_empty());

        assert!(scene.resize(1400.0, 900.0));
        assert_eq!(scene.device(), DeviceClass::Full);
        assert_eq!(scene.shapes.len(), 24);

        assert!(scene.resize(500.0, 900.0));
        assert_eq!(scene.device(), DeviceClass::Compact);
        assert_eq!(scene.shapes.len(), 12);
    }

    #[test]
    fn test_resize_within_class_keeps_shapes() {
        let mut scene = Scene::new(seeded(), Overrides::default());
        scene.resize(1400.0, 900.0);
        let before = scene.shapes.clone();
        scene.resize(1600.0, 1000.0);
        assert!(Arc::ptr_eq(&before, &scene.shapes));

        // back to a class seen before reuses its memoized set
        scene.resize(500.0, 900.0);
        scene.resize(1400.0, 900.0);
        assert!(Arc::ptr_eq(&before, &scene.shapes));
    }

    #[test]
    fn test_cli_override_survives_reload() {
        let overrides = Overrides {
            device: Some(DeviceClass::Compact),
            seed: None,
        };
        let mut scene = Scene::new(seeded(), overrides);
        scene.resize(1400.0, 900.0);
        assert_eq!(scene.device(), DeviceClass::Compact);

        scene.reload(Config {
            device: Some(DeviceClass::Full),
            ..Config::default()
        });
        assert_eq!(scene.device(), DeviceClass::Compact);
        assert_eq!(scene.config().seed, None);
    }

    #[test]
    fn test_reload_changes_shape_count() {
        let mut scene = Scene::new(seeded(), Overrides::default());
        scene.resize(1400.0, 900.0);
        scene.reload(Config {
            shapes: ShapeCounts {
                compact: 4,
                full: 6,
            },
            ..seeded()
        });
        assert_eq!(scene.shapes.len(), 6);
    }

    #[test]
    fn test_reload_keeps_shapes_unless_seed_changes() {
        let mut scene = Scene::new(seeded(), Overrides::default());
        scene.resize(1400.0, 900.0);
        let before = scene.shapes.clone();

        scene.reload(seeded());
        assert!(Arc::ptr_eq(&before, &scene.shapes));

        scene.reload(Config {
            seed: Some(43),
            ..Config::default()
        });
        assert!(!Arc::ptr_eq(&before, &scene.shapes));
        assert_ne!(before, scene.shapes);
    }

    #[test]
    fn test_frames_ease_after_drag() {
        let mut scene = Scene::new(seeded(), Overrides::default());
        scene.resize(1400.0, 900.0);
        let (_, settled) = scene.frame(0.0);
        assert!(settled);

        scene.carousel.press(PointerSample::new(0.0, 1, 0));
        scene.carousel.motion(PointerSample::new(300.0, 1, 20));
        let (frame, settled) = scene.frame(16.0);
        assert!(!settled);
        assert!(frame.tiles.iter().any(|t| t.shown != t.target()));

        let (frame, settled) = scene.frame(5_000.0);
        assert!(settled);
        assert!(frame.tiles.iter().all(|t| t.shown == t.target()));
    }

    #[test]
    fn test_seed_makes_scenes_identical() {
        let mut a = Scene::new(seeded(), Overrides::default());
        let mut b = Scene::new(seeded(), Overrides::default());
        a.resize(1000.0, 800.0);
        b.resize(1000.0, 800.0);
        assert_eq!(a.shapes, b.shapes);
        assert_eq!(a.carousel.rotation(), b.carousel.rotation());
    }
}
