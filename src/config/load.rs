use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers an optional config file under environment
/// variables (prefix `REEL__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and the resolved config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from environment and an explicit (optional) config file.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("REEL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.audio.volume) {
            return Err("audio.volume must be between 0.0 and 2.0".to_string());
        }
        if self.ui.poll_ms == 0 {
            return Err("ui.poll_ms must be >= 1".to_string());
        }
        if self.console.tick_ms == 0 {
            return Err("console.tick_ms must be >= 1".to_string());
        }
        if self.picker.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("picker.extensions must name at least one extension".to_string());
        }
        if self.metadata.cover_art_path.as_os_str().is_empty() {
            return Err("metadata.cover_art_path must not be empty".to_string());
        }
        Ok(())
    }

    /// Render the settings as TOML, in the same shape the loader accepts.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `REEL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("REEL_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/reel/config.toml`
/// or `~/.config/reel/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("reel").join("config.toml"))
}
