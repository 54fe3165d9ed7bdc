//! The editing session: tool dispatch, pointer events, and undo wiring.
//!
//! A UI shell owns rendering and input mapping; it forwards cell-level
//! pointer events, text commits, and button presses here. Every buffer
//! mutation funnels through one change notification that records history,
//! and restores run inside a suppression scope so they are never
//! re-recorded.

use std::path::Path;

use log::debug;

use crate::canvas::{flood_fill, PixelBuffer};
use crate::error::Result;
use crate::history::HistoryStack;
use crate::io::png;
use crate::text;
use crate::types::{Palette, Rgb565};

/// The active drawing tool. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pencil,
    Fill,
    Pipette,
}

/// Pointer-drag state, advanced by press/move/release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Drag {
    #[default]
    Idle,
    /// A pencil stroke in progress; `last` is the most recent painted cell.
    PencilStroke { last: (u32, u32) },
}

/// A single-owner editing session over one canvas.
///
/// Owns the pixel buffer, history, palette, and tool state. All
/// operations are synchronous and run on the caller's thread.
pub struct EditingSession {
    buffer: PixelBuffer,
    history: HistoryStack,
    palette: Palette,
    tool: Tool,
    colour: Rgb565,
    drag: Drag,
    suppress_depth: u32,
}

impl EditingSession {
    /// Start a session on the default 15x15 black canvas with an empty
    /// palette.
    pub fn new() -> Self {
        Self::with_palette(Palette::new())
    }

    /// Start a session with a pre-loaded palette.
    ///
    /// The first palette entry becomes the drawing colour, and the blank
    /// canvas is recorded so later edits can be undone back to it.
    pub fn with_palette(mut palette: Palette) -> Self {
        palette.select_first();
        let colour = palette.selected().unwrap_or(Rgb565::BLACK);

        let buffer = PixelBuffer::default();
        let mut history = HistoryStack::new();
        history.record(&buffer);

        Self {
            buffer,
            history,
            palette,
            tool: Tool::default(),
            colour,
            drag: Drag::Idle,
            suppress_depth: 0,
        }
    }

    // -- Pointer events --

    /// Dispatch a pointer press at a cell coordinate.
    ///
    /// Presses outside the canvas are ignored; coordinates are validated
    /// here so buffer access below never trips the bounds contract.
    pub fn pointer_pressed(&mut self, x: u32, y: u32) {
        if !self.buffer.contains(x, y) {
            return;
        }

        match self.tool {
            Tool::Pencil => {
                self.drag = Drag::PencilStroke { last: (x, y) };
                self.paint_cell(x, y);
            }
            Tool::Fill => {
                flood_fill(&mut self.buffer, x, y, self.colour);
                self.buffer_changed();
            }
            Tool::Pipette => {
                if let Ok(colour) = self.buffer.get(x, y) {
                    self.colour = colour;
                    self.palette.select(colour);
                }
            }
        }
    }

    /// Dispatch a pointer move at a cell coordinate.
    ///
    /// Only a pencil stroke reacts, painting each newly reported distinct
    /// in-bounds cell. Cells between two far-apart samples are not
    /// interpolated; a fast drag leaves gaps.
    pub fn pointer_moved(&mut self, x: u32, y: u32) {
        let Drag::PencilStroke { last } = self.drag else {
            return;
        };
        if !self.buffer.contains(x, y) || last == (x, y) {
            return;
        }

        self.drag = Drag::PencilStroke { last: (x, y) };
        self.paint_cell(x, y);
    }

    /// Dispatch a pointer release. Ends any drag regardless of tool.
    pub fn pointer_released(&mut self) {
        self.drag = Drag::Idle;
    }

    // -- History --

    /// Restore the previous state. Returns false when unavailable.
    pub fn undo(&mut self) -> bool {
        self.suppress_depth += 1;
        let restored = match self.history.undo() {
            Some(snapshot) => self
                .buffer
                .load_flat(snapshot.pixels(), snapshot.width(), snapshot.height())
                .is_ok(),
            None => false,
        };
        self.suppress_depth -= 1;

        if restored {
            debug!("undo applied, {} entries retained", self.history.len());
        }
        restored
    }

    /// Restore the next state. Returns false when unavailable.
    pub fn redo(&mut self) -> bool {
        self.suppress_depth += 1;
        let restored = match self.history.redo() {
            Some(snapshot) => self
                .buffer
                .load_flat(snapshot.pixels(), snapshot.width(), snapshot.height())
                .is_ok(),
            None => false,
        };
        self.suppress_depth -= 1;
        restored
    }

    /// Whether an earlier state exists.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a later state exists.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // -- Canvas operations --

    /// Reset every cell to black.
    pub fn clear(&mut self) {
        self.buffer.fill(Rgb565::BLACK);
        self.buffer_changed();
    }

    /// Resize the canvas, preserving the overlapping top-left rectangle.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.buffer.resize(width, height)?;
        self.buffer_changed();
        Ok(())
    }

    /// Rotate the canvas 90 degrees clockwise.
    pub fn rotate90(&mut self) {
        self.buffer.rotate90();
        self.buffer_changed();
    }

    /// Apply an edited hex-text surface to the canvas.
    ///
    /// Blank input is a no-op. The text is parsed in full before any
    /// mutation, so a malformed token leaves the canvas untouched.
    pub fn apply_text(&mut self, input: &str) -> Result<()> {
        if input.trim().is_empty() {
            return Ok(());
        }

        let (width, height) = (self.buffer.width(), self.buffer.height());
        let pixels = text::from_text(input, width, height)?;
        self.buffer.load_flat(&pixels, width, height)?;
        self.buffer_changed();
        Ok(())
    }

    /// The current canvas rendered as hex text for the text surface.
    pub fn hex_text(&self) -> String {
        text::to_text(&self.buffer)
    }

    /// Replace the canvas with a decoded PNG.
    ///
    /// On decode failure the existing canvas is untouched.
    pub fn import_png(&mut self, path: &Path) -> Result<()> {
        let imported = png::import(path)?;
        self.buffer = imported;
        self.buffer_changed();
        Ok(())
    }

    /// Export the canvas as an 8-bit RGB PNG.
    pub fn export_png(&self, path: &Path) -> Result<()> {
        png::export(&self.buffer, path)
    }

    // -- Tool and colour state --

    /// Select the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Get the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Set the drawing colour from a packed value.
    pub fn set_colour(&mut self, colour: Rgb565) {
        self.colour = colour;
    }

    /// Set the drawing colour from 8-bit channels (truncated to 5/6/5).
    pub fn set_colour_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.colour = Rgb565::from_rgb(r, g, b);
    }

    /// Get the current drawing colour.
    pub fn colour(&self) -> Rgb565 {
        self.colour
    }

    // -- Palette --

    /// Add the current drawing colour to the palette.
    ///
    /// After a successful add the first palette entry is re-selected and
    /// becomes the drawing colour, matching the editor's swatch-row
    /// rebuild.
    pub fn add_current_colour(&mut self) -> bool {
        if !self.palette.add(self.colour) {
            return false;
        }
        self.reselect_first();
        true
    }

    /// Remove the selected palette colour, re-selecting the first entry.
    pub fn remove_selected_colour(&mut self) -> Option<Rgb565> {
        let removed = self.palette.remove_selected();
        if removed.is_some() {
            self.reselect_first();
        }
        removed
    }

    /// Make a palette colour the current drawing colour.
    pub fn select_colour(&mut self, colour: Rgb565) -> bool {
        if self.palette.select(colour) {
            self.colour = colour;
            return true;
        }
        false
    }

    /// The session palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The canvas being edited.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The undo history.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    fn reselect_first(&mut self) {
        self.palette.select_first();
        if let Some(colour) = self.palette.selected() {
            self.colour = colour;
        }
    }

    fn paint_cell(&mut self, x: u32, y: u32) {
        if self.buffer.set(x, y, self.colour).is_ok() {
            self.buffer_changed();
        }
    }

    fn buffer_changed(&mut self) {
        if self.suppress_depth == 0 {
            self.history.record(&self.buffer);
        }
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new()
    }
}
