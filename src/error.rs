//! Errors reported to the user by the player and its front-ends.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load media {}: {reason}", path.display())]
    DecodeFailure { path: PathBuf, reason: String },

    #[error("No media loaded. Use 'load <file_path>' to load a file.")]
    NoMedia,

    #[error("No media is currently playing.")]
    NotPlaying,

    #[error("Media is already playing.")]
    AlreadyPlaying,

    #[error("Unknown command: {0}")]
    InvalidCommand(String),
}

impl PlayerError {
    pub fn decode(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::DecodeFailure {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlayerError>;
