//! File picker shown when the terminal front-end starts without a path.
//!
//! `scan` lists media files under a directory; `Picker` holds that list and
//! the cursor.

mod scan;

use std::path::{Path, PathBuf};

pub use scan::scan;

/// One selectable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    /// Path relative to the scanned directory.
    pub display: String,
}

pub struct Picker {
    pub dir: PathBuf,
    pub entries: Vec<Entry>,
    pub selected: usize,
}

impl Picker {
    pub fn new(dir: &Path, entries: Vec<Entry>) -> Self {
        Self {
            dir: dir.to_path_buf(),
            entries,
            selected: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move the cursor down, wrapping at the end.
    pub fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.entries.len();
    }

    /// Move the cursor up, wrapping at the top.
    pub fn prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.entries.len() - 1);
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.entries.get(self.selected).map(|e| e.path.as_path())
    }
}
