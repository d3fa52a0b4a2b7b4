//! Presentation adapters: where loaded metadata and surfaces end up.
//!
//! The player pushes into a `Presenter`; it never reads anything back.
//! `ConsolePresenter` prints plain lines, `ScreenPresenter` keeps a view model
//! the terminal UI draws from.

mod console;
mod screen;

use std::path::PathBuf;

use crate::media::MediaItem;
use crate::metadata::Metadata;

pub use console::ConsolePresenter;
pub use screen::{Screen, ScreenPresenter};

/// What the display layer should show for the loaded item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// Video output covering the whole viewport.
    Fullscreen,
    /// Cover art image shown next to the tag overlay.
    CoverArt { path: PathBuf, bytes: usize },
}

pub trait Presenter {
    fn show_metadata(&mut self, item: &MediaItem, metadata: &Metadata);
    fn show_surface(&mut self, item: &MediaItem, surface: &Surface);
    /// Drop everything shown for the previous item.
    fn clear(&mut self);
    fn notice(&mut self, message: &str);
}
