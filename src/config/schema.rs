use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/reel/config.toml` or `~/.config/reel/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `REEL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub metadata: MetadataSettings,
    pub console: ConsoleSettings,
    pub picker: PickerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Output volume applied to every sound (1.0 = unchanged).
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the key instructions are drawn on the player screen.
    pub show_instructions: bool,
    /// How long the event loop waits for a key before redrawing (milliseconds).
    pub poll_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ now showing ~ ".to_string(),
            show_instructions: true,
            poll_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetadataSettings {
    /// Where embedded cover art is written. Overwritten on every load and
    /// removed on quit.
    pub cover_art_path: PathBuf,
    /// Whether embedded pictures are extracted at all.
    pub extract_cover_art: bool,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            cover_art_path: std::env::temp_dir().join("reel_album_art_temp.jpg"),
            extract_cover_art: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Prompt printed before each command line.
    pub prompt: String,
    /// How often the console loop checks for end of playback (milliseconds).
    pub tick_ms: u64,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            prompt: "MediaPlayer> ".to_string(),
            tick_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerSettings {
    /// File extensions offered by the file picker (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "mp4".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: Some(4),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Log file for the terminal front-end. Console mode logs to stderr.
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "reel=warn".to_string(),
            file: std::env::temp_dir().join("reel.log"),
        }
    }
}
