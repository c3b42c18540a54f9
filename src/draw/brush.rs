//! Circle and square brush stamp rasterization.
//!
//! One routine covers all four brush tools: the shape picks the coverage
//! test and the target color distinguishes pens (selected color) from
//! erasers (transparent). The stamp clips to canvas bounds; centers may be
//! anywhere, including off-canvas, because drags routinely leave the
//! surface.

use super::canvas::PixelCanvas;
use super::color::Color;

/// Coverage shape of a brush stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushShape {
    /// Pixels within `radius` of the center (squared-distance test).
    Circle,
    /// Every pixel of the axis-aligned bounding box.
    Square,
}

/// Stamps the brush once at `center` with the given radius and color.
///
/// The affected region is the bounding box
/// `[center - ceil(r), center + ceil(r)]` clipped to the canvas; the circle
/// shape additionally requires the integer squared distance to the center
/// to be at most r². Marks the canvas dirty when at least one pixel of the
/// box was in bounds. A fully clipped stamp is a no-op, not an error.
pub fn stamp(
    canvas: &mut PixelCanvas,
    shape: BrushShape,
    center: (i64, i64),
    radius: f64,
    color: Color,
) {
    let (cx, cy) = center;
    let reach = radius.ceil() as i64;

    let left = cx.saturating_sub(reach).max(0);
    let right = (cx + reach + 1).min(canvas.width() as i64);
    let bottom = cy.saturating_sub(reach).max(0);
    let top = (cy + reach + 1).min(canvas.height() as i64);

    if left >= right || bottom >= top {
        return;
    }

    let radius_sq = radius * radius;

    for x in left..right {
        for y in bottom..top {
            if shape == BrushShape::Circle {
                let dx = (cx - x) as f64;
                let dy = (cy - y) as f64;
                if dx * dx + dy * dy > radius_sq {
                    continue;
                }
            }
            canvas.set(x as u32, y as u32, color);
        }
    }

    canvas.mark_dirty();
}
