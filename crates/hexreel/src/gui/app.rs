use crate::config;
use crate::events::AppEvent;
use crate::gui::scene::Scene;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::view;
use gtk::prelude::*;
use gtk4 as gtk;
use hexring::carousel::{PointerId, PointerSample};
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub scene: Rc<RefCell<Scene>>,
    pub drawing_area: gtk::DrawingArea,
    ticker: Option<gtk::TickCallbackId>,
}

#[derive(Debug)]
pub enum AppMsg {
    Tick,
    Press(PointerSample),
    Motion(PointerSample),
    Release(PointerId),
    Resize(f64, f64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// Reduces the gesture's current event to a carousel sample. Touch points
/// report button 0, mouse drags their button number.
fn sample(gesture: &gtk::GestureDrag, x: f64) -> PointerSample {
    PointerSample::new(
        x,
        gesture.current_button() as u64,
        gesture.current_event_time() as u64,
    )
}

fn absolute_x(gesture: &gtk::GestureDrag, offset_x: f64) -> f64 {
    gesture.start_point().map(|(x, _)| x).unwrap_or_default() + offset_x
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Scene, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Hexreel"),
            set_default_width: 1280,
            set_default_height: 800,
            add_css_class: "hexreel-window",

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "hexreel-stage",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width as f64, height as f64));
                },

                add_controller = gtk::GestureDrag {
                    set_button: 0, // mouse buttons and touch alike
                    connect_drag_begin[sender] => move |gesture, x, _| {
                        sender.input(AppMsg::Press(sample(gesture, x)));
                    },
                    connect_drag_update[sender] => move |gesture, offset_x, _| {
                        let x = absolute_x(gesture, offset_x);
                        sender.input(AppMsg::Motion(sample(gesture, x)));
                    },
                    connect_drag_end[sender] => move |gesture, _, _| {
                        let id = PointerId::new(gesture.current_button() as u64);
                        sender.input(AppMsg::Release(id));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (scene, rx) = init;

        theme::load_css();

        let model = AppModel {
            scene: Rc::new(RefCell::new(scene)),
            drawing_area: gtk::DrawingArea::default(),
            ticker: None,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let scene_draw = model.scene.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let now_us = drawing_area
                    .frame_clock()
                    .map(|clock| clock.frame_time())
                    .unwrap_or_else(glib::monotonic_time);

                let (frame, settled) = scene_draw.borrow_mut().frame(now_us as f64 / 1000.0);
                if let Err(e) = view::draw(
                    cr,
                    &scene_draw.borrow(),
                    &frame,
                    &colors,
                    width as f64,
                    height as f64,
                ) {
                    log::error!("Drawing error: {}", e);
                }

                // keep easing after the ring itself has stopped moving
                if !settled {
                    let area = drawing_area.clone();
                    glib::idle_add_local_once(move || area.queue_draw());
                }
            });

        model.start_ticker(&sender);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tick => {
                if self.scene.borrow_mut().carousel.tick() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Press(sample) => {
                if self.scene.borrow_mut().carousel.press(sample) {
                    self.stop_ticker();
                }
            }
            AppMsg::Motion(sample) => {
                if self.scene.borrow_mut().carousel.motion(sample) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Release(id) => {
                if self.scene.borrow_mut().carousel.release(id) {
                    self.drawing_area.queue_draw();
                    self.start_ticker(&sender);
                }
            }
            AppMsg::Resize(width, height) => {
                if self.scene.borrow_mut().resize(width, height) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.scene.borrow_mut().reload(new_config);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    /// Drives the continuous rotation from the frame clock.
    fn start_ticker(&mut self, sender: &ComponentSender<Self>) {
        if self.ticker.is_some() {
            return;
        }
        let sender = sender.clone();
        let id = self.drawing_area.add_tick_callback(move |_, _| {
            sender.input(AppMsg::Tick);
            glib::ControlFlow::Continue
        });
        self.ticker = Some(id);
    }

    fn stop_ticker(&mut self) {
        if let Some(id) = self.ticker.take() {
            id.remove();
        }
    }
}
