//! Generic pointer event types for host-agnostic input delivery.

use crate::util::Vec2;

/// A pointer event as delivered by the host.
///
/// Positions are already projected into canvas pixel coordinates by the
/// host (screen-to-surface projection is outside this crate). A press also
/// carries whether the pointer was over the canvas's interactive region;
/// presses that started over UI overlays are ignored by the stroke
/// controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Press {
        /// Pointer position in canvas pixel coordinates (may be fractional).
        pos: Vec2,
        /// Whether the press happened over the canvas region, pre-resolved
        /// by the host's hit testing.
        over_canvas: bool,
    },
    /// Pointer moved while the session is active (pressed or not).
    Motion {
        /// Pointer position in canvas pixel coordinates.
        pos: Vec2,
    },
    /// Primary button released.
    Release,
}
