//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Canvas dimensions.
///
/// The canvas is allocated once at startup with these dimensions and keeps
/// them for the whole session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (must be at least 1)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (must be at least 1)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Brush tool size range.
///
/// The size slider's normalized [0, 1] value is linearly interpolated
/// between `min_size` and `max_size` to produce the brush radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Smallest brush radius in pixels (must be positive and <= max_size)
    #[serde(default = "default_min_size")]
    pub min_size: f64,

    /// Largest brush radius in pixels
    #[serde(default = "default_max_size")]
    pub max_size: f64,

    /// Normalized slider value applied at startup (valid range: 0.0 - 1.0)
    #[serde(default = "default_tool_size")]
    pub default_size: f64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            max_size: default_max_size(),
            default_size: default_tool_size(),
        }
    }
}

/// Color picker widget sizes.
///
/// Purely geometric: these feed the position-to-color coordinate
/// transforms, not any rendering resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Side length of the hue wheel's square bounding region in pixels
    #[serde(default = "default_hue_wheel_size")]
    pub hue_wheel_size: f64,

    /// Side length of the saturation/value rectangle in pixels
    #[serde(default = "default_sv_rect_size")]
    pub sv_rect_size: f64,

    /// Diameter of the selector markers in pixels
    #[serde(default = "default_selector_size")]
    pub selector_size: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            hue_wheel_size: default_hue_wheel_size(),
            sv_rect_size: default_sv_rect_size(),
            selector_size: default_selector_size(),
        }
    }
}

fn default_canvas_width() -> u32 {
    256
}

fn default_canvas_height() -> u32 {
    256
}

fn default_min_size() -> f64 {
    1.0
}

fn default_max_size() -> f64 {
    25.0
}

fn default_tool_size() -> f64 {
    0.2
}

fn default_hue_wheel_size() -> f64 {
    512.0
}

fn default_sv_rect_size() -> f64 {
    64.0
}

fn default_selector_size() -> f64 {
    16.0
}
