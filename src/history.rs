//! Bounded, de-duplicated snapshot history for undo/redo.

use log::debug;

use crate::canvas::PixelBuffer;
use crate::types::Rgb565;

/// Number of snapshots retained before the oldest is evicted.
pub const HISTORY_SIZE: usize = 50;

/// An immutable full copy of the canvas at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
}

impl Snapshot {
    fn capture(buffer: &PixelBuffer) -> Self {
        Self {
            pixels: buffer.to_flat(),
            width: buffer.width(),
            height: buffer.height(),
        }
    }

    /// The captured pixel data, row-major.
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// Width of the captured canvas.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the captured canvas.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// A linear undo list over full-buffer snapshots.
///
/// Entries after the current index are the redo branch; a genuinely new
/// snapshot discards them. The list is capped at [`HISTORY_SIZE`] by
/// evicting the oldest entry.
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
    index: Option<usize>,
}

impl HistoryStack {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the buffer as a new entry.
    ///
    /// De-duplicated: when the entry at the current index is
    /// pixel-identical (same data and dimensions), nothing is recorded,
    /// so hover and other no-op events never pile up entries.
    pub fn record(&mut self, buffer: &PixelBuffer) {
        let snapshot = Snapshot::capture(buffer);

        if let Some(i) = self.index {
            if self.entries.get(i).is_some_and(|current| *current == snapshot) {
                return;
            }
            // A new edit after undo prunes the redo branch.
            self.entries.truncate(i + 1);
        }

        self.entries.push(snapshot);
        if self.entries.len() > HISTORY_SIZE {
            self.entries.remove(0);
            debug!("history at capacity, evicted oldest snapshot");
        }
        self.index = Some(self.entries.len() - 1);
    }

    /// Step back one entry, returning the snapshot to apply.
    ///
    /// None when there is no earlier state. Applying the snapshot must
    /// not itself be recorded; the caller suppresses its change
    /// notification during the restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let i = self.index?;
        if i == 0 {
            return None;
        }
        self.index = Some(i - 1);
        self.entries.get(i - 1)
    }

    /// Step forward one entry, returning the snapshot to apply.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let i = self.index?;
        if i + 1 >= self.entries.len() {
            return None;
        }
        self.index = Some(i + 1);
        self.entries.get(i + 1)
    }

    /// Whether an earlier state exists.
    pub fn can_undo(&self) -> bool {
        self.index.is_some_and(|i| i > 0)
    }

    /// Whether a later state exists.
    pub fn can_redo(&self) -> bool {
        self.index.is_some_and(|i| i + 1 < self.entries.len())
    }

    /// Get the number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no snapshot has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
