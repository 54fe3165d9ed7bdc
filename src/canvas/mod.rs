//! The editable canvas: pixel storage and region fill.

mod buffer;
mod fill;

pub use buffer::{PixelBuffer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use fill::flood_fill;
