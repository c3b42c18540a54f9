//! Application loop wiring the canvas, tools, and color wheel together.
//!
//! Replaces a host engine's per-frame callback with an explicit tick:
//! pointer events are queued by the host, drained once per tick, the
//! continuous tool is applied, and the canvas is flushed to the display
//! backend at most once. All collaborators are handed in at construction;
//! nothing is discovered at runtime.

use std::collections::VecDeque;

use log::{debug, info};

use crate::config::Config;
use crate::draw::{Color, PixelCanvas};
use crate::input::{PointerEvent, StrokeController, Tool};
use crate::picker::ColorWheel;

/// Host-provided display surface.
///
/// The application uploads the full pixel buffer whenever it changed
/// during a tick; how the host turns that into texels on screen is its
/// business.
pub trait DisplayBackend {
    /// Receives the full row-major pixel buffer after a dirty tick.
    fn upload_pixels(&mut self, width: u32, height: u32, pixels: &[Color]);
}

/// The paint application: canvas, stroke controller, color wheel, and the
/// pointer event queue, driven by [`PaintApp::tick`].
pub struct PaintApp {
    canvas: PixelCanvas,
    controller: StrokeController,
    wheel: ColorWheel,
    events: VecDeque<PointerEvent>,
    backend: Box<dyn DisplayBackend>,
}

impl PaintApp {
    /// Builds the application from validated configuration.
    ///
    /// The canvas starts fully transparent and is flushed to the backend on
    /// the first tick so the host shows the blank surface immediately.
    pub fn new(config: &Config, backend: Box<dyn DisplayBackend>) -> Self {
        let mut canvas = PixelCanvas::new(config.canvas.width, config.canvas.height);
        canvas.mark_dirty();

        let controller = StrokeController::new(
            config.tools.min_size,
            config.tools.max_size,
            config.tools.default_size,
        );

        let wheel = ColorWheel::new(
            config.picker.hue_wheel_size,
            config.picker.sv_rect_size,
            config.picker.selector_size,
        );

        info!(
            "Canvas initialized: {}x{} pixels",
            config.canvas.width, config.canvas.height
        );

        Self {
            canvas,
            controller,
            wheel,
            events: VecDeque::new(),
            backend,
        }
    }

    /// Queues a pointer event for the next tick.
    pub fn push_event(&mut self, event: PointerEvent) {
        self.events.push_back(event);
    }

    /// Runs one logical frame.
    ///
    /// In order: drain queued pointer events into the stroke controller
    /// (click-only tools fire here), apply the continuous tool for this
    /// tick, propagate a pending color-pick result into the wheel, then
    /// flush the canvas to the backend if anything changed.
    pub fn tick(&mut self) {
        while let Some(event) = self.events.pop_front() {
            match event {
                PointerEvent::Press { pos, over_canvas } => {
                    let color = self.wheel.selected_color();
                    self.controller
                        .on_pointer_press(pos, over_canvas, &mut self.canvas, color);
                }
                PointerEvent::Motion { pos } => self.controller.on_pointer_motion(pos),
                PointerEvent::Release => self.controller.on_pointer_release(),
            }
        }

        let color = self.wheel.selected_color();
        self.controller.tick(&mut self.canvas, color);

        if let Some(picked) = self.controller.take_picked_color() {
            debug!(
                "Color picked: h={:.3} s={:.3} v={:.3} a={:.3}",
                picked.hsv.h, picked.hsv.s, picked.hsv.v, picked.alpha
            );
            self.wheel.apply_picked(picked.hsv);
        }

        if self.canvas.consume_dirty() {
            self.backend
                .upload_pixels(self.canvas.width(), self.canvas.height(), self.canvas.pixels());
        }
    }

    /// Selects the active tool (button binding).
    ///
    /// An in-progress drag is not reset; see
    /// [`StrokeController::select_tool`].
    pub fn select_tool(&mut self, tool: Tool) {
        self.controller.select_tool(tool);
    }

    /// Sets the brush size from a normalized [0, 1] slider value.
    pub fn set_tool_size(&mut self, normalized: f64) {
        self.controller.set_tool_size(normalized);
    }

    /// Clears the canvas to transparent (button binding).
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// The canvas, for inspection.
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// The stroke controller, for inspection.
    pub fn controller(&self) -> &StrokeController {
        &self.controller
    }

    /// The color wheel, for host picker-widget interaction.
    pub fn wheel_mut(&mut self) -> &mut ColorWheel {
        &mut self.wheel
    }

    /// The color wheel, for inspection.
    pub fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::TRANSPARENT;
    use crate::util::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Backend that counts uploads for flush-protocol assertions.
    struct CountingBackend {
        uploads: Rc<RefCell<usize>>,
    }

    impl DisplayBackend for CountingBackend {
        fn upload_pixels(&mut self, _width: u32, _height: u32, _pixels: &[Color]) {
            *self.uploads.borrow_mut() += 1;
        }
    }

    fn app() -> (PaintApp, Rc<RefCell<usize>>) {
        let uploads = Rc::new(RefCell::new(0));
        let backend = CountingBackend {
            uploads: Rc::clone(&uploads),
        };
        let mut config = Config::default();
        config.canvas.width = 16;
        config.canvas.height = 16;
        (PaintApp::new(&config, Box::new(backend)), uploads)
    }

    #[test]
    fn first_tick_flushes_the_blank_canvas_once() {
        let (mut app, uploads) = app();
        app.tick();
        assert_eq!(*uploads.borrow(), 1);

        // Nothing changed: no further uploads.
        app.tick();
        app.tick();
        assert_eq!(*uploads.borrow(), 1);
    }

    #[test]
    fn drag_paints_and_flushes_once_per_dirty_tick() {
        let (mut app, uploads) = app();
        app.tick();

        app.push_event(PointerEvent::Press {
            pos: Vec2::new(3.0, 3.0),
            over_canvas: true,
        });
        app.tick();
        assert_eq!(*uploads.borrow(), 2);
        assert_ne!(app.canvas().get(3, 3), TRANSPARENT);

        app.push_event(PointerEvent::Motion {
            pos: Vec2::new(10.0, 3.0),
        });
        app.tick();
        assert_eq!(*uploads.borrow(), 3);
        assert_ne!(app.canvas().get(10, 3), TRANSPARENT);

        // A release in the same tick as a motion wins: the drag ends
        // before the continuous tool runs, with no forced final stamp.
        app.push_event(PointerEvent::Motion {
            pos: Vec2::new(3.0, 10.0),
        });
        app.push_event(PointerEvent::Release);
        app.tick();
        assert_eq!(*uploads.borrow(), 3);
        assert_eq!(app.canvas().get(3, 10), TRANSPARENT);
    }

    #[test]
    fn events_over_ui_overlays_do_nothing() {
        let (mut app, uploads) = app();
        app.tick();

        app.push_event(PointerEvent::Press {
            pos: Vec2::new(3.0, 3.0),
            over_canvas: false,
        });
        app.tick();
        assert_eq!(*uploads.borrow(), 1);
        assert!(!app.controller().is_dragging());
    }

    #[test]
    fn picked_color_feeds_back_into_the_wheel() {
        let (mut app, _uploads) = app();
        app.tick();

        // Paint with a saturated wheel selection, then pick it back after
        // moving the selection away.
        app.wheel_mut().on_sv_press(Vec2::new(32.0, 32.0)); // s = 1, v = 1
        let painted = app.wheel().selected_color();
        app.push_event(PointerEvent::Press {
            pos: Vec2::new(5.0, 5.0),
            over_canvas: true,
        });
        app.push_event(PointerEvent::Release);
        app.tick();

        app.wheel_mut().on_sv_press(Vec2::new(-32.0, 32.0)); // back to white
        assert_ne!(app.wheel().selected_color(), painted);

        app.select_tool(Tool::ColorPicker);
        app.push_event(PointerEvent::Press {
            pos: Vec2::new(5.0, 5.0),
            over_canvas: true,
        });
        app.tick();

        assert!(app.wheel().selected_color().approx_eq(painted));
    }

    #[test]
    fn clear_resets_every_pixel_and_flushes() {
        let (mut app, uploads) = app();
        app.tick();

        app.push_event(PointerEvent::Press {
            pos: Vec2::new(8.0, 8.0),
            over_canvas: true,
        });
        app.push_event(PointerEvent::Release);
        app.tick();

        app.clear();
        app.tick();
        assert_eq!(*uploads.borrow(), 3);
        assert!(app.canvas().pixels().iter().all(|&p| p == TRANSPARENT));
    }

    #[test]
    fn bucket_fill_applies_on_press_within_the_same_tick() {
        let (mut app, _uploads) = app();
        app.tick();

        app.wheel_mut().on_sv_press(Vec2::new(32.0, -32.0)); // s = 1, v = 0: black
        let fill_color = app.wheel().selected_color();

        app.select_tool(Tool::Bucket);
        app.push_event(PointerEvent::Press {
            pos: Vec2::new(0.0, 0.0),
            over_canvas: true,
        });
        app.tick();

        assert!(app.canvas().pixels().iter().all(|&p| p == fill_color));
    }
}
