//! HSV color picker widgets.
//!
//! Two coordinate-transform widgets supply the selected color the canvas
//! tools consume:
//! - [`HueWheel`]: annular hue picker (angle to hue and back)
//! - [`SvRect`]: square saturation/value picker (position to s/v and back)
//! - [`ColorWheel`]: the two wired together, resolving the selected color

pub mod hue;
pub mod sv;
pub mod wheel;

// Re-export commonly used types at module level
pub use hue::HueWheel;
pub use sv::SvRect;
pub use wheel::ColorWheel;
