//! Input handling and the stroke state machine.
//!
//! This module translates host pointer events into canvas mutations. It
//! maintains the active tool, the brush size, and the drag state machine
//! that turns sparse pointer samples into gap-free strokes.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{PickedColor, StrokeController};
pub use tool::Tool;
