//! 4-connected flood fill over a pixel buffer.

use crate::types::Rgb565;

use super::PixelBuffer;

/// Flood-fill the 4-connected region containing the seed cell.
///
/// Returns true when any cell changed. Filling a region with its own
/// colour (or seeding outside the buffer) is a no-op.
///
/// Traversal is an explicit-stack DFS with a visited bitmap; neighbours
/// are pushed unconditionally and bounds/visited/colour checks happen on
/// pop. Worst case visits every cell once: O(width * height).
pub fn flood_fill(buffer: &mut PixelBuffer, x: u32, y: u32, replacement: Rgb565) -> bool {
    let target = match buffer.get(x, y) {
        Ok(colour) => colour,
        Err(_) => return false,
    };
    if target == replacement {
        return false;
    }

    let (w, h) = (buffer.width() as i64, buffer.height() as i64);
    let mut visited = vec![false; (w * h) as usize];
    let mut stack = vec![(x as i64, y as i64)];
    let mut changed = false;

    while let Some((cx, cy)) = stack.pop() {
        if cx < 0 || cx >= w || cy < 0 || cy >= h {
            continue;
        }
        let index = (cy * w + cx) as usize;
        if visited[index] || buffer.pixels()[index] != target {
            continue;
        }

        visited[index] = true;
        buffer.pixels_mut()[index] = replacement;
        changed = true;

        stack.push((cx + 1, cy));
        stack.push((cx - 1, cy));
        stack.push((cx, cy + 1));
        stack.push((cx, cy - 1));
    }

    changed
}
