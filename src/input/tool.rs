//! Paint tool selection.

use crate::draw::BrushShape;

/// Paint tool selection.
///
/// The active tool determines what a pointer press or drag does to the
/// canvas. Brush tools are continuous (re-applied every tick while
/// dragging); the color picker and bucket are click-only (applied exactly
/// once per press).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Round brush painting the selected color (default)
    CirclePen,
    /// Round brush erasing to transparent
    CircleEraser,
    /// Square brush painting the selected color
    SquarePen,
    /// Square brush erasing to transparent
    SquareEraser,
    /// Reads the clicked pixel back into the color wheel
    ColorPicker,
    /// Flood-fills the clicked region with the selected color
    Bucket,
}

impl Tool {
    /// True for tools applied once per press rather than per tick.
    pub fn is_click_only(self) -> bool {
        matches!(self, Tool::ColorPicker | Tool::Bucket)
    }

    /// The stamp shape for brush tools, `None` for click-only tools.
    pub fn brush_shape(self) -> Option<BrushShape> {
        match self {
            Tool::CirclePen | Tool::CircleEraser => Some(BrushShape::Circle),
            Tool::SquarePen | Tool::SquareEraser => Some(BrushShape::Square),
            Tool::ColorPicker | Tool::Bucket => None,
        }
    }

    /// True for the brushes that stamp transparency instead of paint.
    pub fn is_eraser(self) -> bool {
        matches!(self, Tool::CircleEraser | Tool::SquareEraser)
    }
}
