//! Saturation/value rectangle widget.

use log::debug;

use crate::draw::color::{BLACK, Color, WHITE};
use crate::util::{Vec2, inverse_lerp, lerp};

/// Square saturation/value picker.
///
/// Positions are local to the widget center, in pixels. Saturation maps
/// left-to-right and value bottom-to-top across the square. Unlike the hue
/// wheel there is no "outside": every press and drag updates the selection,
/// with out-of-region positions clamped to the nearest edge.
///
/// The widget does not own the hue; it is told the current hue so hosts can
/// render the gradient and so a restored pick stays consistent.
#[derive(Debug)]
pub struct SvRect {
    /// Side length of the square region in pixels.
    size: f64,
    /// Hue supplied externally (hue wheel or a restored pick).
    hue: f64,
    /// Current saturation in [0, 1].
    saturation: f64,
    /// Current value in [0, 1].
    value: f64,
    /// Selector marker position, local to the widget center.
    selector_pos: Vec2,
}

impl SvRect {
    /// Creates a picker of the given pixel size with s = 0, v = 1 selected
    /// (selector at the top-left corner).
    pub fn new(size: f64) -> Self {
        let mut rect = Self {
            size,
            hue: 0.0,
            saturation: 0.0,
            value: 1.0,
            selector_pos: Vec2::default(),
        };
        rect.selector_pos = rect.sv_to_position(rect.saturation, rect.value);
        rect
    }

    /// Current saturation in [0, 1].
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Current value in [0, 1].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The externally supplied hue.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Selector marker position, local to the widget center, for display.
    pub fn selector_position(&self) -> Vec2 {
        self.selector_pos
    }

    /// Maps a local position to (saturation, value), clamped into [0, 1].
    pub fn position_to_sv(&self, local: Vec2) -> (f64, f64) {
        let half = self.size * 0.5;
        let s = inverse_lerp(-half, half, local.x);
        let v = inverse_lerp(-half, half, local.y);
        (s, v)
    }

    /// Maps (saturation, value) to the selector's local position.
    ///
    /// Inverse of [`Self::position_to_sv`] for in-range inputs.
    pub fn sv_to_position(&self, s: f64, v: f64) -> Vec2 {
        let half = self.size * 0.5;
        Vec2::new(lerp(-half, half, s), lerp(-half, half, v))
    }

    /// Handles a pointer press: always selects, clamped into the square.
    pub fn on_pointer_press(&mut self, local: Vec2) {
        self.select_position(local);
    }

    /// Handles pointer motion: same ungated behavior as a press.
    pub fn on_pointer_motion(&mut self, local: Vec2) {
        self.select_position(local);
    }

    /// Records a new hue from the hue wheel or a restored pick.
    pub fn set_hue(&mut self, hue: f64) {
        self.hue = hue;
    }

    /// Programmatically sets saturation, updating the selector position.
    pub fn set_saturation(&mut self, saturation: f64) {
        self.saturation = saturation;
        self.selector_pos = self.sv_to_position(self.saturation, self.value);
    }

    /// Programmatically sets value, updating the selector position.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.selector_pos = self.sv_to_position(self.saturation, self.value);
    }

    /// Marker color keeping the selector visible against the gradient:
    /// white over saturated or dark regions, black over the pale corner.
    pub fn selector_contrast_color(&self) -> Color {
        if self.saturation > 0.5 || self.value < 0.5 {
            WHITE
        } else {
            BLACK
        }
    }

    fn select_position(&mut self, local: Vec2) {
        let (s, v) = self.position_to_sv(local);
        self.saturation = s;
        self.value = v;
        let half = self.size * 0.5;
        self.selector_pos = Vec2::new(local.x.clamp(-half, half), local.y.clamp(-half, half));
        debug!("SV selected: s={s:.3} v={v:.3}");
    }
}
