//! Hue wheel widget: maps pointer positions on an annulus to a hue.

use log::debug;

use crate::util::{Vec2, inverse_lerp, lerp};

/// Inner edge of the selectable ring, as a fraction of the widget size.
pub const INNER_RADIUS_FRACTION: f64 = 0.38;

/// Outer edge of the selectable ring, as a fraction of the widget size.
pub const OUTER_RADIUS_FRACTION: f64 = 0.5;

/// Angular hue picker occupying a circular ring inside a square region.
///
/// Positions are local to the widget center, in pixels. Hue is a [0, 1]
/// full-circle fraction increasing counter-clockwise from the rightmost
/// point of the ring. A selection drag only begins on a press inside the
/// ring; presses (and the drags they would start) outside it never select.
#[derive(Debug)]
pub struct HueWheel {
    /// Side length of the square bounding region in pixels.
    size: f64,
    /// Diameter of the selector marker in pixels.
    selector_size: f64,
    /// Current hue in [0, 1].
    hue: f64,
    /// Whether a selection drag started inside the ring.
    dragging: bool,
    /// Selector marker position, local to the widget center.
    selector_pos: Vec2,
}

impl HueWheel {
    /// Creates a wheel of the given pixel size with hue 0 selected
    /// (selector at the rightmost point of the ring).
    pub fn new(size: f64, selector_size: f64) -> Self {
        let mut wheel = Self {
            size,
            selector_size,
            hue: 0.0,
            dragging: false,
            selector_pos: Vec2::default(),
        };
        wheel.set_hue(0.0);
        wheel
    }

    /// Current hue in [0, 1].
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Selector marker position, local to the widget center, for display.
    pub fn selector_position(&self) -> Vec2 {
        self.selector_pos
    }

    /// True while a selection drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Maps a local position to a hue.
    ///
    /// The angle convention (atan2 of y against negated x, inverse-lerped
    /// from pi to -pi) maps atan2's output range bijectively onto [0, 1],
    /// with hue increasing counter-clockwise from the rightmost point.
    pub fn position_to_hue(&self, local: Vec2) -> f64 {
        let angle = local.y.atan2(-local.x);
        inverse_lerp(std::f64::consts::PI, -std::f64::consts::PI, angle)
    }

    /// Maps a hue to the unit direction of its position on the ring.
    ///
    /// Inverse of [`Self::position_to_hue`] on the unit circle.
    pub fn hue_to_position(&self, hue: f64) -> Vec2 {
        let angle = lerp(std::f64::consts::PI, -std::f64::consts::PI, hue);
        Vec2::new(-angle.cos(), angle.sin())
    }

    /// True when the local position lies on the selectable ring.
    ///
    /// Distance test between the inner and outer radius; the painted ring
    /// texture is a rendering concern and plays no part here.
    pub fn is_inside_ring(&self, local: Vec2) -> bool {
        let distance = local.length();
        distance >= self.size * INNER_RADIUS_FRACTION
            && distance <= self.size * OUTER_RADIUS_FRACTION
    }

    /// Handles a pointer press at a widget-local position.
    ///
    /// A press outside the ring is ignored and does not start a drag.
    pub fn on_pointer_press(&mut self, local: Vec2) {
        if !self.is_inside_ring(local) {
            return;
        }
        self.select_position(local);
        self.dragging = true;
    }

    /// Handles pointer motion; selects only while a valid drag is active.
    pub fn on_pointer_motion(&mut self, local: Vec2) {
        if !self.dragging {
            return;
        }
        self.select_position(local);
    }

    /// Ends the selection drag.
    pub fn on_pointer_release(&mut self) {
        self.dragging = false;
    }

    /// Programmatically sets the hue, e.g. from a color-pick result.
    ///
    /// Updates the selector display position consistently with
    /// [`Self::hue_to_position`].
    pub fn set_hue(&mut self, hue: f64) {
        self.hue = hue;
        self.selector_pos = self.hue_to_position(hue) * self.selector_distance();
        debug!("Hue set to {:.3}", self.hue);
    }

    fn select_position(&mut self, local: Vec2) {
        self.hue = self.position_to_hue(local);
        self.selector_pos = local.normalized() * self.selector_distance();
    }

    /// Radial distance of the selector marker from the widget center.
    fn selector_distance(&self) -> f64 {
        (self.size - self.selector_size) * 0.5
    }
}
