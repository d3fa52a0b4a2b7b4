use std::io;
use std::path::{Path, PathBuf};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Tag fields shown for an audio item.
#[derive(Debug)]
pub struct Metadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover_art: Option<CoverArt>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            artist: UNKNOWN_ARTIST.to_string(),
            album: UNKNOWN_ALBUM.to_string(),
            cover_art: None,
        }
    }
}

impl Metadata {
    /// `Title: ..`, `Artist: ..`, `Album: ..` lines, in display order.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Title: {}", self.title),
            format!("Artist: {}", self.artist),
            format!("Album: {}", self.album),
        ]
    }
}

/// Cover art written to disk for the current item.
///
/// The file is removed when the handle is dropped or discarded, so a handle
/// exists exactly as long as the file it wrote.
#[derive(Debug)]
pub struct CoverArt {
    path: PathBuf,
    len: usize,
    mime: Option<String>,
    removed: bool,
}

impl CoverArt {
    pub(super) fn new(path: PathBuf, len: usize, mime: Option<String>) -> Self {
        Self {
            path,
            len,
            mime,
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the image in bytes.
    pub fn byte_len(&self) -> usize {
        self.len
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// Remove the file now and report the outcome.
    pub fn discard(mut self) -> io::Result<()> {
        self.remove()
    }

    fn remove(&mut self) -> io::Result<()> {
        if self.removed {
            return Ok(());
        }
        self.removed = true;
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "removed cover art");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Drop for CoverArt {
    fn drop(&mut self) {
        if let Err(e) = self.remove() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove cover art");
        }
    }
}
