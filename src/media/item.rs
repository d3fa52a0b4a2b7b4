use std::fmt;
use std::path::{Path, PathBuf};

/// What kind of output a loaded item drives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaKind {
    /// Sound only; tags are read and shown next to the timeline.
    Audio,
    /// Sound plus a fullscreen surface.
    Video,
}

impl MediaKind {
    /// Only `.mp3` (any case) is treated as audio. Everything else goes down the
    /// video path, including files without an extension.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("mp3") => Self::Audio,
            _ => Self::Video,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => f.write_str("audio"),
            Self::Video => f.write_str("video"),
        }
    }
}

/// The currently loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// The path as the user gave it; used for tag parsing and existence checks.
    pub native_path: PathBuf,
    /// Absolute form of `native_path`, handed to the engine.
    pub playback_path: PathBuf,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(native_path: impl Into<PathBuf>) -> Self {
        let native_path = native_path.into();
        let playback_path = playback_path_for(&native_path);
        let kind = MediaKind::detect(&native_path);
        Self {
            native_path,
            playback_path,
            kind,
        }
    }

    /// File name for titles and status lines.
    pub fn file_name(&self) -> String {
        self.native_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.native_path.display().to_string())
    }
}

/// Build the engine-facing path: absolute when it can be resolved. Only on
/// Windows are `\` separators rewritten to `/`; elsewhere a backslash is an
/// ordinary file name character.
pub fn playback_path_for(native: &Path) -> PathBuf {
    let absolute = std::path::absolute(native).unwrap_or_else(|_| native.to_path_buf());
    normalize_separators(absolute)
}

#[cfg(windows)]
fn normalize_separators(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(s.replace('\\', "/")),
        None => path,
    }
}

#[cfg(not(windows))]
fn normalize_separators(path: PathBuf) -> PathBuf {
    path
}
