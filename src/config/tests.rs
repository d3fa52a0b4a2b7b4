use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

// Tests that touch the process environment take this lock first.
static ENV: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets (`Some`) or unsets (`None`) a variable until dropped.
struct ScopedVar {
    key: &'static str,
    saved: Option<OsString>,
}

impl ScopedVar {
    fn new(key: &'static str, value: Option<&str>) -> Self {
        let saved = std::env::var_os(key);
        apply(key, value.map(OsString::from));
        Self { key, saved }
    }
}

impl Drop for ScopedVar {
    fn drop(&mut self) {
        apply(self.key, self.saved.take());
    }
}

fn apply(key: &str, value: Option<OsString>) {
    // SAFETY: every test that mutates the environment holds `env_lock`.
    unsafe {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
}

#[test]
fn explicit_env_path_wins_over_xdg() {
    let _lock = env_lock();
    let _path = ScopedVar::new("REEL_CONFIG_PATH", Some("/tmp/reel-test-config.toml"));
    let _xdg = ScopedVar::new("XDG_CONFIG_HOME", Some("/tmp/xdg"));
    assert_eq!(
        resolve_config_path(),
        Some(PathBuf::from("/tmp/reel-test-config.toml"))
    );
}

#[test]
fn default_path_uses_xdg_then_home() {
    let _lock = env_lock();
    let _home = ScopedVar::new("HOME", Some("/tmp/home-dir"));
    {
        let _xdg = ScopedVar::new("XDG_CONFIG_HOME", Some("/tmp/xdg"));
        assert_eq!(
            default_config_path(),
            Some(PathBuf::from("/tmp/xdg/reel/config.toml"))
        );
    }
    let _no_xdg = ScopedVar::new("XDG_CONFIG_HOME", None);
    assert_eq!(
        default_config_path(),
        Some(PathBuf::from("/tmp/home-dir/.config/reel/config.toml"))
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
volume = 0.5
quit_fade_out_ms = 0

[ui]
header_text = "hello"
show_instructions = false
poll_ms = 20

[metadata]
cover_art_path = "/tmp/cover-from-config.jpg"
extract_cover_art = false

[console]
prompt = "> "

[picker]
extensions = ["mp3"]
recursive = false
include_hidden = true
follow_links = false
max_depth = 2

[log]
filter = "reel=debug"
"#,
    )
    .unwrap();

    let _volume = ScopedVar::new("REEL__AUDIO__VOLUME", None);

    let s = Settings::load_from(Some(&cfg_path)).unwrap();
    assert_eq!(s.audio.volume, 0.5);
    assert_eq!(s.audio.quit_fade_out_ms, 0);
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.show_instructions);
    assert_eq!(s.ui.poll_ms, 20);
    assert_eq!(
        s.metadata.cover_art_path,
        PathBuf::from("/tmp/cover-from-config.jpg")
    );
    assert!(!s.metadata.extract_cover_art);
    assert_eq!(s.console.prompt, "> ");
    assert_eq!(s.console.tick_ms, ConsoleSettings::default().tick_ms);
    assert_eq!(s.picker.extensions, vec!["mp3".to_string()]);
    assert!(!s.picker.recursive);
    assert!(s.picker.include_hidden);
    assert!(!s.picker.follow_links);
    assert_eq!(s.picker.max_depth, Some(2));
    assert_eq!(s.log.filter, "reel=debug");
}

#[test]
fn settings_missing_file_falls_back_to_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();

    let s = Settings::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(s.console.prompt, "MediaPlayer> ");
    assert_eq!(s.picker.extensions, vec!["mp3".to_string(), "mp4".to_string()]);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
quit_fade_out_ms = 250
"#,
    )
    .unwrap();

    let _fade = ScopedVar::new("REEL__AUDIO__QUIT_FADE_OUT_MS", Some("0"));

    let s = Settings::load_from(Some(&cfg_path)).unwrap();
    assert_eq!(s.audio.quit_fade_out_ms, 0);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.volume = 3.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.picker.extensions = vec!["  ".to_string()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.poll_ms = 0;
    assert!(s.validate().is_err());
}

#[test]
fn dumped_settings_load_back() {
    let _lock = env_lock();
    let mut s = Settings::default();
    s.console.prompt = "dump> ".to_string();
    s.picker.max_depth = Some(7);

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, s.to_toml().unwrap()).unwrap();

    let back = Settings::load_from(Some(&cfg_path)).unwrap();
    assert_eq!(back.console.prompt, "dump> ");
    assert_eq!(back.picker.max_depth, Some(7));
}
