use std::borrow::Cow;
use std::path::{Path, PathBuf};

use lofty::picture::{Picture, PictureType};
use lofty::prelude::*;

use crate::config::MetadataSettings;

use super::model::{CoverArt, Metadata};

/// Reads title/artist/album and cover art from tagged files.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    cover_art_path: PathBuf,
    extract_cover_art: bool,
}

impl MetadataExtractor {
    pub fn new(settings: &MetadataSettings) -> Self {
        Self {
            cover_art_path: settings.cover_art_path.clone(),
            extract_cover_art: settings.extract_cover_art,
        }
    }

    /// The fixed file cover art is written to.
    #[cfg(test)]
    pub fn cover_art_path(&self) -> &Path {
        &self.cover_art_path
    }

    /// Extract metadata from `path`.
    ///
    /// Never fails: unreadable or untagged files produce the placeholder
    /// record, and the reason is logged.
    pub fn extract(&self, path: &Path) -> Metadata {
        let tagged = match lofty::read_from_path(path) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read tags");
                return Metadata::default();
            }
        };

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            tracing::info!(path = %path.display(), "file carries no tags");
            return Metadata::default();
        };

        let mut metadata = Metadata::default();
        if let Some(v) = non_blank(tag.title()) {
            metadata.title = v;
        }
        if let Some(v) = non_blank(tag.artist()) {
            metadata.artist = v;
        }
        if let Some(v) = non_blank(tag.album()) {
            metadata.album = v;
        }

        if self.extract_cover_art {
            metadata.cover_art = pick_cover(tag.pictures()).and_then(|pic| self.write_cover(pic));
        }

        metadata
    }

    fn write_cover(&self, picture: &Picture) -> Option<CoverArt> {
        let data = picture.data();
        if data.is_empty() {
            return None;
        }
        match std::fs::write(&self.cover_art_path, data) {
            Ok(()) => {
                tracing::debug!(
                    path = %self.cover_art_path.display(),
                    bytes = data.len(),
                    "wrote cover art"
                );
                Some(CoverArt::new(
                    self.cover_art_path.clone(),
                    data.len(),
                    picture.mime_type().map(|m| m.as_str().to_string()),
                ))
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.cover_art_path.display(),
                    error = %e,
                    "failed to write cover art"
                );
                None
            }
        }
    }
}

/// Front cover if the tag has one, otherwise the first picture.
fn pick_cover(pictures: &[Picture]) -> Option<&Picture> {
    pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
}

fn non_blank(v: Option<Cow<'_, str>>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty()).map(Cow::into_owned)
}
