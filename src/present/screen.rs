use crate::media::{MediaItem, MediaKind};
use crate::metadata::Metadata;

use super::{Presenter, Surface};

/// Everything the terminal UI needs to draw the player screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Screen {
    /// File name of the loaded item.
    pub title: Option<String>,
    pub kind: Option<MediaKind>,
    /// Tag overlay lines (audio only).
    pub overlay: Vec<String>,
    pub surface: Option<Surface>,
    /// Last notice, shown in the status box until replaced.
    pub notice: Option<String>,
}

#[derive(Debug, Default)]
pub struct ScreenPresenter {
    screen: Screen,
}

impl ScreenPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Show a message from outside the player (e.g. a failed key action).
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.screen.notice = Some(message.into());
    }
}

impl Presenter for ScreenPresenter {
    fn show_metadata(&mut self, item: &MediaItem, metadata: &Metadata) {
        self.screen.title = Some(item.file_name());
        self.screen.kind = Some(item.kind);
        self.screen.overlay = metadata.lines().to_vec();
    }

    fn show_surface(&mut self, item: &MediaItem, surface: &Surface) {
        self.screen.title = Some(item.file_name());
        self.screen.kind = Some(item.kind);
        self.screen.surface = Some(surface.clone());
    }

    fn clear(&mut self) {
        let notice = self.screen.notice.take();
        self.screen = Screen {
            notice,
            ..Screen::default()
        };
    }

    fn notice(&mut self, message: &str) {
        self.set_notice(message);
    }
}
