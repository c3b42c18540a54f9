//! Pointer state machine and stroke interpolation.

use log::debug;

use crate::draw::{Color, Hsv, PixelCanvas, TRANSPARENT, flood_fill, stamp};
use crate::input::tool::Tool;
use crate::util::{Vec2, inverse_lerp, lerp};

/// A color-pick result waiting to be applied to the color wheel.
///
/// Produced when the color picker tool reads a pixel; the application loop
/// retrieves it once per tick and pushes it into the hue/SV widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedColor {
    /// Hue, saturation, value of the picked pixel.
    pub hsv: Hsv,
    /// Alpha of the picked pixel (forwarded to listeners, not used by the
    /// wheel itself).
    pub alpha: f64,
}

/// Turns discrete pointer samples into dense tool applications.
///
/// Owns the active tool, the tool size, and the pointer-drag state machine.
/// Click-only tools (color picker, bucket) run exactly once on press;
/// continuous tools (the four brushes) are re-applied every tick while the
/// pointer is held, at positions interpolated between the previous and
/// current sample so fast motion leaves no gaps.
#[derive(Debug)]
pub struct StrokeController {
    /// Currently selected tool.
    tool: Tool,
    /// Smallest brush radius in pixels (slider at 0).
    min_size: f64,
    /// Largest brush radius in pixels (slider at 1).
    max_size: f64,
    /// Default normalized slider value applied at startup.
    default_size: f64,
    /// Current brush radius in pixels.
    tool_size: f64,
    /// Whether a continuous-tool drag is in progress.
    dragging: bool,
    /// Whether the primary button is currently held.
    pressed: bool,
    /// Interpolation anchor: the previous tick's pointer position.
    anchor: Vec2,
    /// Latest pointer position.
    pointer: Vec2,
    /// Color-pick result awaiting retrieval.
    pending_pick: Option<PickedColor>,
}

impl StrokeController {
    /// Creates a controller with the configured size range applied at its
    /// default slider value and the circle pen selected.
    ///
    /// Sizes are already validated by configuration
    /// (0 < min_size <= max_size, default in [0, 1]).
    pub fn new(min_size: f64, max_size: f64, default_size: f64) -> Self {
        let mut controller = Self {
            tool: Tool::CirclePen,
            min_size,
            max_size,
            default_size,
            tool_size: min_size,
            dragging: false,
            pressed: false,
            anchor: Vec2::default(),
            pointer: Vec2::default(),
            pending_pick: None,
        };
        controller.set_tool_size_to_default();
        controller
    }

    /// The currently selected tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects a tool.
    ///
    /// Deliberately does not reset an in-progress drag: switching mid-drag
    /// means subsequent ticks stamp with the new tool from the old anchor.
    pub fn select_tool(&mut self, tool: Tool) {
        debug!("Tool selected: {tool:?}");
        self.tool = tool;
    }

    /// Sets the brush radius from a normalized [0, 1] slider value,
    /// linearly interpolated between the configured min and max radius.
    pub fn set_tool_size(&mut self, normalized: f64) {
        self.tool_size = lerp(self.min_size, self.max_size, normalized.clamp(0.0, 1.0));
        debug!("Tool size set to {:.2}px", self.tool_size);
    }

    /// Applies the configured default slider value.
    pub fn set_tool_size_to_default(&mut self) {
        self.set_tool_size(self.default_size);
    }

    /// The configured default normalized slider value.
    pub fn default_tool_size(&self) -> f64 {
        self.default_size
    }

    /// Current brush radius in pixels.
    pub fn tool_size(&self) -> f64 {
        self.tool_size
    }

    /// True while a continuous-tool drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handles a pointer press.
    ///
    /// Presses outside the canvas region are ignored entirely. For
    /// click-only tools the tool runs here, once, at the floored press
    /// position; a press whose floored position falls outside the buffer is
    /// dropped. For continuous tools this records the interpolation anchor
    /// and enters the dragging state; stamping happens in [`Self::tick`].
    pub fn on_pointer_press(
        &mut self,
        pos: Vec2,
        over_canvas: bool,
        canvas: &mut PixelCanvas,
        selected_color: Color,
    ) {
        if !over_canvas {
            return;
        }

        if self.tool.is_click_only() {
            let (x, y) = pos.floor();
            if !canvas.in_bounds(x, y) {
                debug!("Click-only tool at ({x}, {y}) is off-canvas; ignored");
                return;
            }
            let (x, y) = (x as u32, y as u32);
            match self.tool {
                Tool::ColorPicker => {
                    let picked = canvas.get(x, y);
                    self.pending_pick = Some(PickedColor {
                        hsv: picked.to_hsv(),
                        alpha: picked.a,
                    });
                }
                Tool::Bucket => flood_fill(canvas, (x, y), selected_color),
                _ => unreachable!("brush tools are not click-only"),
            }
            return;
        }

        self.dragging = true;
        self.pressed = true;
        self.anchor = pos;
        self.pointer = pos;
    }

    /// Records the latest pointer position.
    pub fn on_pointer_motion(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Ends the drag. No final stamp beyond what the last tick applied.
    pub fn on_pointer_release(&mut self) {
        self.dragging = false;
        self.pressed = false;
    }

    /// Applies the continuous tool for this tick.
    ///
    /// While dragging with the pointer held, stamps at positions linearly
    /// interpolated between the anchor and the current pointer position,
    /// stepping by the brush radius so the stroke is sampled at least once
    /// per radius of travel. A zero-length delta still stamps once. The
    /// current position becomes the anchor for the next tick.
    pub fn tick(&mut self, canvas: &mut PixelCanvas, selected_color: Color) {
        if self.tool.is_click_only() || !self.dragging || !self.pressed {
            return;
        }
        let Some(shape) = self.tool.brush_shape() else {
            return;
        };

        let color = if self.tool.is_eraser() {
            TRANSPARENT
        } else {
            selected_color
        };

        let distance = (self.pointer - self.anchor).length();
        debug_assert!(self.tool_size > 0.0, "tool size must stay positive");

        let mut travelled = 0.0;
        while travelled <= distance {
            let t = inverse_lerp(0.0, distance, travelled);
            let position = self.pointer.lerp(self.anchor, t);
            stamp(canvas, shape, position.floor(), self.tool_size, color);
            travelled += self.tool_size;
        }

        self.anchor = self.pointer;
    }

    /// Takes the pending color-pick result, if any.
    pub fn take_picked_color(&mut self) -> Option<PickedColor> {
        self.pending_pick.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    fn controller() -> StrokeController {
        StrokeController::new(1.0, 25.0, 0.2)
    }

    #[test]
    fn default_size_lerps_between_min_and_max() {
        let ctl = controller();
        assert!((ctl.tool_size() - 5.8).abs() < 1e-9);

        let mut ctl = controller();
        ctl.set_tool_size(0.0);
        assert_eq!(ctl.tool_size(), 1.0);
        ctl.set_tool_size(1.0);
        assert_eq!(ctl.tool_size(), 25.0);
        ctl.set_tool_size(2.0); // out of range clamps
        assert_eq!(ctl.tool_size(), 25.0);
    }

    #[test]
    fn press_outside_canvas_region_is_ignored() {
        let mut canvas = PixelCanvas::new(8, 8);
        let mut ctl = controller();
        ctl.on_pointer_press(Vec2::new(4.0, 4.0), false, &mut canvas, RED);
        assert!(!ctl.is_dragging());

        ctl.tick(&mut canvas, RED);
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn press_and_tick_stamp_at_the_press_position() {
        let mut canvas = PixelCanvas::new(8, 8);
        let mut ctl = StrokeController::new(1.0, 1.0, 0.0);
        ctl.on_pointer_press(Vec2::new(4.2, 4.7), true, &mut canvas, RED);
        ctl.tick(&mut canvas, RED);
        assert_eq!(canvas.get(4, 4), RED);
    }

    #[test]
    fn fast_drag_leaves_no_gaps_along_the_segment() {
        let mut canvas = PixelCanvas::new(32, 8);
        let mut ctl = StrokeController::new(1.5, 1.5, 0.0);
        ctl.on_pointer_press(Vec2::new(1.0, 4.0), true, &mut canvas, RED);
        ctl.tick(&mut canvas, RED);

        // One tick covering a long horizontal drag in a single jump.
        ctl.on_pointer_motion(Vec2::new(30.0, 4.0));
        ctl.tick(&mut canvas, RED);

        // Every pixel along the segment is within one radius of a stamp.
        for x in 1..=30u32 {
            assert_ne!(canvas.get(x, 4), crate::draw::TRANSPARENT, "gap at x={x}");
        }
    }

    #[test]
    fn release_stops_stamping() {
        let mut canvas = PixelCanvas::new(16, 16);
        let mut ctl = StrokeController::new(1.0, 1.0, 0.0);
        ctl.on_pointer_press(Vec2::new(2.0, 2.0), true, &mut canvas, RED);
        ctl.tick(&mut canvas, RED);
        ctl.on_pointer_release();

        canvas.consume_dirty();
        ctl.on_pointer_motion(Vec2::new(10.0, 10.0));
        ctl.tick(&mut canvas, RED);
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn eraser_stamps_transparent_regardless_of_selected_color() {
        let mut canvas = PixelCanvas::new(8, 8);
        let mut ctl = StrokeController::new(2.0, 2.0, 0.0);
        ctl.on_pointer_press(Vec2::new(4.0, 4.0), true, &mut canvas, RED);
        ctl.tick(&mut canvas, RED);
        ctl.on_pointer_release();

        ctl.select_tool(Tool::CircleEraser);
        ctl.on_pointer_press(Vec2::new(4.0, 4.0), true, &mut canvas, RED);
        ctl.tick(&mut canvas, RED);
        assert_eq!(canvas.get(4, 4), crate::draw::TRANSPARENT);
    }

    #[test]
    fn bucket_fills_once_on_press() {
        let mut canvas = PixelCanvas::new(4, 4);
        let mut ctl = controller();
        ctl.select_tool(Tool::Bucket);
        ctl.on_pointer_press(Vec2::new(0.0, 0.0), true, &mut canvas, BLUE);
        assert!(canvas.pixels().iter().all(|&p| p == BLUE));

        // No drag state: motion plus tick applies nothing further.
        assert!(!ctl.is_dragging());
        canvas.consume_dirty();
        ctl.on_pointer_motion(Vec2::new(2.0, 2.0));
        ctl.tick(&mut canvas, RED);
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn color_picker_hands_off_the_picked_pixel() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set(2, 1, BLUE);

        let mut ctl = controller();
        ctl.select_tool(Tool::ColorPicker);
        ctl.on_pointer_press(Vec2::new(2.4, 1.9), true, &mut canvas, RED);

        let picked = ctl.take_picked_color().expect("pick pending");
        assert_eq!(picked.hsv, BLUE.to_hsv());
        assert_eq!(picked.alpha, 1.0);
        assert!(ctl.take_picked_color().is_none(), "pick is consumed once");
    }

    #[test]
    fn offcanvas_click_only_press_is_dropped() {
        let mut canvas = PixelCanvas::new(4, 4);
        let mut ctl = controller();
        ctl.select_tool(Tool::Bucket);
        ctl.on_pointer_press(Vec2::new(-1.0, 2.0), true, &mut canvas, BLUE);
        ctl.on_pointer_press(Vec2::new(2.0, 7.5), true, &mut canvas, BLUE);
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn switching_tools_mid_drag_keeps_the_drag() {
        let mut canvas = PixelCanvas::new(16, 16);
        let mut ctl = StrokeController::new(1.0, 1.0, 0.0);
        ctl.on_pointer_press(Vec2::new(2.0, 2.0), true, &mut canvas, RED);
        ctl.tick(&mut canvas, RED);

        ctl.select_tool(Tool::SquarePen);
        assert!(ctl.is_dragging());
        ctl.on_pointer_motion(Vec2::new(10.0, 2.0));
        ctl.tick(&mut canvas, RED);
        assert_eq!(canvas.get(10, 2), RED);
    }
}
