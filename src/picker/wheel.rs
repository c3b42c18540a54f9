//! Color wheel: the hue and SV widgets wired together.

use log::debug;

use crate::draw::{Color, Hsv};
use crate::picker::hue::HueWheel;
use crate::picker::sv::SvRect;
use crate::util::Vec2;

/// Aggregate color picker combining a [`HueWheel`] and an [`SvRect`].
///
/// The wheel owns the wiring the two widgets need: a hue selected on the
/// ring is pushed into the SV rect, and a picked color restored from the
/// canvas updates both. The combined HSV triple resolves to the "currently
/// selected color" the canvas tools consume.
///
/// Widgets are handed in explicitly at construction; there is no runtime
/// discovery of siblings.
#[derive(Debug)]
pub struct ColorWheel {
    hue_wheel: HueWheel,
    sv_rect: SvRect,
}

impl ColorWheel {
    /// Builds the wheel from configured widget sizes.
    pub fn new(hue_wheel_size: f64, sv_rect_size: f64, selector_size: f64) -> Self {
        Self {
            hue_wheel: HueWheel::new(hue_wheel_size, selector_size),
            sv_rect: SvRect::new(sv_rect_size),
        }
    }

    /// The color the canvas tools should paint with right now.
    pub fn selected_color(&self) -> Color {
        Hsv::new(
            self.hue_wheel.hue(),
            self.sv_rect.saturation(),
            self.sv_rect.value(),
        )
        .to_rgb(1.0)
    }

    /// Applies a color-pick result to both widgets.
    pub fn apply_picked(&mut self, hsv: Hsv) {
        debug!(
            "Applying picked color: h={:.3} s={:.3} v={:.3}",
            hsv.h, hsv.s, hsv.v
        );
        self.hue_wheel.set_hue(hsv.h);
        self.sv_rect.set_hue(hsv.h);
        self.sv_rect.set_saturation(hsv.s);
        self.sv_rect.set_value(hsv.v);
    }

    /// Forwards a press on the hue widget, syncing the SV rect's hue when
    /// the selection changed.
    pub fn on_hue_press(&mut self, local: Vec2) {
        self.hue_wheel.on_pointer_press(local);
        self.sv_rect.set_hue(self.hue_wheel.hue());
    }

    /// Forwards pointer motion on the hue widget.
    pub fn on_hue_motion(&mut self, local: Vec2) {
        self.hue_wheel.on_pointer_motion(local);
        self.sv_rect.set_hue(self.hue_wheel.hue());
    }

    /// Forwards a pointer release on the hue widget.
    pub fn on_hue_release(&mut self) {
        self.hue_wheel.on_pointer_release();
    }

    /// Forwards a press on the SV widget.
    pub fn on_sv_press(&mut self, local: Vec2) {
        self.sv_rect.on_pointer_press(local);
    }

    /// Forwards pointer motion on the SV widget.
    pub fn on_sv_motion(&mut self, local: Vec2) {
        self.sv_rect.on_pointer_motion(local);
    }

    /// The hue widget, for display state.
    pub fn hue_wheel(&self) -> &HueWheel {
        &self.hue_wheel
    }

    /// The SV widget, for display state.
    pub fn sv_rect(&self) -> &SvRect {
        &self.sv_rect
    }
}
