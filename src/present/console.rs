use std::io::{self, Write};

use crate::media::MediaItem;
use crate::metadata::Metadata;

use super::{Presenter, Surface};

/// Prints metadata and notices as plain text lines.
pub struct ConsolePresenter<W: Write = io::Stdout> {
    out: W,
}

impl ConsolePresenter {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `prompt` without a line break.
    pub fn prompt(&mut self, prompt: &str) {
        if let Err(e) = write!(self.out, "{prompt}").and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "console write failed");
        }
    }

    fn line(&mut self, text: &str) {
        // A closed stdout is not worth failing playback over.
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "console write failed");
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_metadata(&mut self, _item: &MediaItem, metadata: &Metadata) {
        for line in metadata.lines() {
            self.line(&line);
        }
    }

    fn show_surface(&mut self, item: &MediaItem, surface: &Surface) {
        match surface {
            Surface::Fullscreen => self.line(&format!("Video surface ready: {}", item.file_name())),
            Surface::CoverArt { path, bytes } => {
                self.line(&format!("Cover art: {} ({} bytes)", path.display(), bytes))
            }
        }
    }

    fn clear(&mut self) {}

    fn notice(&mut self, message: &str) {
        self.line(message);
    }
}
