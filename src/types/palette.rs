//! User-managed colour palette with JSON persistence.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{PxedError, Result};

use super::Rgb565;

/// An ordered, duplicate-free collection of colours with at most one
/// selected entry.
///
/// Persistence is a flat JSON array of packed values; loading is
/// best-effort so a missing or corrupt palette file never blocks an
/// editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Rgb565>,
    selected: Option<usize>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a palette from a colour sequence, dropping duplicates.
    pub fn from_colours(colours: impl IntoIterator<Item = Rgb565>) -> Self {
        let mut palette = Self::new();
        for colour in colours {
            palette.add(colour);
        }
        palette
    }

    /// Add a colour. Returns false when it is already present.
    pub fn add(&mut self, colour: Rgb565) -> bool {
        if self.colours.contains(&colour) {
            return false;
        }
        self.colours.push(colour);
        true
    }

    /// Remove the selected colour and clear the selection.
    ///
    /// The last remaining entry is never removed, matching the editor's
    /// refusal to empty a populated swatch row.
    pub fn remove_selected(&mut self) -> Option<Rgb565> {
        let index = self.selected?;
        if self.colours.len() <= 1 {
            return None;
        }
        let removed = self.colours.remove(index);
        self.selected = None;
        Some(removed)
    }

    /// Select a colour by value; clears the selection when absent.
    pub fn select(&mut self, colour: Rgb565) -> bool {
        self.selected = self.colours.iter().position(|&c| c == colour);
        self.selected.is_some()
    }

    /// Select the first entry, if any.
    pub fn select_first(&mut self) {
        self.selected = if self.colours.is_empty() { None } else { Some(0) };
    }

    /// The currently selected colour.
    pub fn selected(&self) -> Option<Rgb565> {
        self.selected.and_then(|i| self.colours.get(i).copied())
    }

    /// All colours in insertion order.
    pub fn colours(&self) -> &[Rgb565] {
        &self.colours
    }

    /// Check whether a colour is present.
    pub fn contains(&self, colour: Rgb565) -> bool {
        self.colours.contains(&colour)
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Load a palette from a JSON colour list.
    ///
    /// Best-effort: a missing or malformed file yields an empty palette
    /// with nothing selected.
    pub fn load(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<Rgb565>>(&content) {
            Ok(colours) => Self::from_colours(colours),
            Err(e) => {
                debug!("ignoring malformed palette {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Write the colour list as a flat JSON array.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(&self.colours).map_err(|e| PxedError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to serialize palette: {}", e),
        })?;

        fs::write(path, json).map_err(|e| PxedError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write palette: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut palette = Palette::new();
        assert!(palette.add(Rgb565(0x001F)));
        assert!(palette.add(Rgb565(0xF800)));
        assert!(!palette.add(Rgb565(0x001F)));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_select_by_value() {
        let mut palette = Palette::from_colours([Rgb565(0x001F), Rgb565(0xF800)]);
        assert!(palette.select(Rgb565(0xF800)));
        assert_eq!(palette.selected(), Some(Rgb565(0xF800)));

        // Selecting an absent colour clears the selection.
        assert!(!palette.select(Rgb565(0x07E0)));
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn test_remove_selected() {
        let mut palette = Palette::from_colours([Rgb565(0x001F), Rgb565(0xF800)]);
        palette.select(Rgb565(0x001F));
        assert_eq!(palette.remove_selected(), Some(Rgb565(0x001F)));
        assert_eq!(palette.colours(), &[Rgb565(0xF800)]);
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn test_remove_keeps_last_entry() {
        let mut palette = Palette::from_colours([Rgb565(0x001F)]);
        palette.select(Rgb565(0x001F));
        assert_eq!(palette.remove_selected(), None);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_remove_without_selection() {
        let mut palette = Palette::from_colours([Rgb565(0x001F), Rgb565(0xF800)]);
        assert_eq!(palette.remove_selected(), None);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_select_first() {
        let mut palette = Palette::new();
        palette.select_first();
        assert_eq!(palette.selected(), None);

        palette.add(Rgb565(0x07E0));
        palette.add(Rgb565(0x001F));
        palette.select_first();
        assert_eq!(palette.selected(), Some(Rgb565(0x07E0)));
    }

    #[test]
    fn test_save_load_round_trip() {
        let palette = Palette::from_colours([Rgb565(0x0000), Rgb565(0x001F), Rgb565(0xFFFF)]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.json");
        palette.save(&path).unwrap();

        let loaded = Palette::load(&path);
        assert_eq!(loaded.colours(), palette.colours());
        assert_eq!(loaded.selected(), None);
    }

    #[test]
    fn test_save_writes_flat_array() {
        let palette = Palette::from_colours([Rgb565(31), Rgb565(2016)]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.json");
        palette.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[31,2016]");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let palette = Palette::load(&dir.path().join("nope.json"));
        assert!(palette.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.json");
        fs::write(&path, "{not json").unwrap();
        assert!(Palette::load(&path).is_empty());
    }

    #[test]
    fn test_load_drops_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.json");
        fs::write(&path, "[31,31,2016]").unwrap();

        let palette = Palette::load(&path);
        assert_eq!(palette.colours(), &[Rgb565(31), Rgb565(2016)]);
    }
}
