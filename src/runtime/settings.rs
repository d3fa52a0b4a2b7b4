use std::path::Path;

use crate::config::Settings;

/// Load settings from `explicit` (or the resolved default path), falling back
/// to defaults when the file is unreadable or invalid.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let loaded = match explicit {
        Some(path) => Settings::load_from(Some(path)),
        None => Settings::load(),
    };

    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("reel: invalid config, using defaults: {msg}");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            eprintln!("reel: failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}
