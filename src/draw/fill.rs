//! Flood-fill bucket tool.
//!
//! Selects the 4-connected region of pixels tolerance-equal to the seed's
//! color, then rewrites the whole region in one batch. Traversal never
//! mutates the canvas: the equality test always compares against the
//! original target color, not a partially filled buffer.

use std::collections::HashSet;

use super::canvas::PixelCanvas;
use super::color::Color;

/// Fills the connected region around `seed` with `replacement`.
///
/// The seed must be in bounds; the stroke controller validates clicks
/// before invoking the bucket. Uses an explicit stack rather than
/// recursion, so a region covering the whole canvas stays within constant
/// call depth. Neighbors are visited right, left, up, down, each
/// bounds-checked independently.
///
/// Filling a region with its own color is a valid no-op-shaped call: the
/// traversal still runs and rewrites the same colors.
pub fn flood_fill(canvas: &mut PixelCanvas, seed: (u32, u32), replacement: Color) {
    let width = canvas.width() as i64;
    let height = canvas.height() as i64;
    let target = canvas.get(seed.0, seed.1);

    let mut selected: HashSet<usize> = HashSet::new();
    let mut stack: Vec<(i64, i64)> = vec![(seed.0 as i64, seed.1 as i64)];

    while let Some((x, y)) = stack.pop() {
        let index = canvas.index(x as u32, y as u32);

        if selected.contains(&index) {
            continue;
        }

        if !canvas.get_index(index).approx_eq(target) {
            continue;
        }

        selected.insert(index);

        if x + 1 < width {
            stack.push((x + 1, y));
        }
        if x > 0 {
            stack.push((x - 1, y));
        }
        if y + 1 < height {
            stack.push((x, y + 1));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
    }

    for &index in &selected {
        canvas.set_index(index, replacement);
    }

    canvas.mark_dirty();
}
