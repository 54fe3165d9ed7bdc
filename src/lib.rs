//! pxed - Pixel-art canvas editing and history engine
//!
//! The in-memory core of a sprite editor: a packed-colour pixel buffer
//! edited through pencil/fill/pipette tools, a bounded undo history, a
//! bidirectional hex-text surface, and PNG import/export. A UI shell owns
//! rendering and input mapping and drives the engine through
//! [`EditingSession`].

pub mod canvas;
pub mod error;
pub mod history;
pub mod io;
pub mod session;
pub mod text;
pub mod types;

pub use canvas::{flood_fill, PixelBuffer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use error::{PxedError, Result};
pub use history::{HistoryStack, Snapshot, HISTORY_SIZE};
pub use session::{EditingSession, Tool};
pub use text::{from_text, to_text};
pub use types::{Palette, Rgb565};
