use super::*;
use std::path::Path;

#[test]
fn detect_treats_only_mp3_as_audio() {
    assert_eq!(MediaKind::detect(Path::new("song.mp3")), MediaKind::Audio);
    assert_eq!(MediaKind::detect(Path::new("/x/SONG.MP3")), MediaKind::Audio);
    assert_eq!(MediaKind::detect(Path::new("clip.mp4")), MediaKind::Video);
    assert_eq!(MediaKind::detect(Path::new("track.flac")), MediaKind::Video);
    assert_eq!(MediaKind::detect(Path::new("noext")), MediaKind::Video);
    assert_eq!(MediaKind::detect(Path::new("mp3")), MediaKind::Video);
}

#[test]
fn playback_path_is_absolute_and_names_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let native = dir.path().join("clip.mp4");
    std::fs::write(&native, b"clip").unwrap();

    let p = playback_path_for(&native);
    assert!(p.is_absolute());
    assert!(p.ends_with("clip.mp4"));
    assert_eq!(std::fs::read(&p).unwrap(), b"clip");
}

#[cfg(unix)]
#[test]
fn relative_path_resolves_against_current_dir() {
    let p = playback_path_for(Path::new("media/clip.mp4"));
    assert!(p.is_absolute());
    assert_eq!(p, std::env::current_dir().unwrap().join("media/clip.mp4"));
}

#[cfg(unix)]
#[test]
fn backslash_in_file_name_is_kept_on_unix() {
    let dir = tempfile::tempdir().unwrap();
    let native = dir.path().join("AC\\DC - song.mp3");
    std::fs::write(&native, b"x").unwrap();

    let item = MediaItem::new(&native);
    assert_eq!(item.playback_path, native);
    assert!(item.playback_path.exists());
    assert_eq!(item.file_name(), "AC\\DC - song.mp3");
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_file_name_survives() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let native = dir.path().join(OsStr::from_bytes(b"caf\xe9.mp3"));
    std::fs::write(&native, b"x").unwrap();

    let item = MediaItem::new(&native);
    assert_eq!(item.kind, MediaKind::Audio);
    assert!(item.playback_path.exists());
}

#[test]
fn media_item_keeps_native_path_as_given() {
    let item = MediaItem::new("song.mp3");
    assert_eq!(item.native_path, Path::new("song.mp3"));
    assert_eq!(item.kind, MediaKind::Audio);
    assert_eq!(item.file_name(), "song.mp3");
    assert!(item.playback_path.ends_with("song.mp3"));
    assert!(item.playback_path.is_absolute());
}
