use std::path::Path;
use std::time::Duration;

use rodio::mixer;
use tempfile::tempdir;

use super::sink::{create_sink_at, fade_step, open_decoder};
use crate::error::PlayerError;
use crate::test_support::{Tags, write_mp3, write_untagged_mp3};

fn assert_decode_failure(result: Result<impl Sized, PlayerError>, expected: &Path) {
    match result {
        Err(PlayerError::DecodeFailure { path, reason }) => {
            assert_eq!(path, expected);
            assert!(!reason.trim().is_empty());
        }
        Err(other) => panic!("expected DecodeFailure, got {other:?}"),
        Ok(_) => panic!("{} decoded", expected.display()),
    }
}

#[test]
fn generated_mp3_fixtures_decode() {
    let dir = tempdir().unwrap();
    let tagged = write_mp3(
        dir.path(),
        "tagged.mp3",
        &Tags {
            title: Some("Ode"),
            ..Tags::default()
        },
    );
    let bare = write_untagged_mp3(dir.path(), "bare.mp3");

    assert!(open_decoder(&tagged).is_ok());
    assert!(open_decoder(&bare).is_ok());
}

#[test]
fn garbage_and_empty_files_are_decode_failures() {
    let dir = tempdir().unwrap();
    let garbage = dir.path().join("clip.mp4");
    std::fs::write(&garbage, b"this is not a movie at all").unwrap();
    let empty = dir.path().join("empty.mp3");
    std::fs::write(&empty, b"").unwrap();

    assert_decode_failure(open_decoder(&garbage), &garbage);
    assert_decode_failure(open_decoder(&empty), &empty);
}

#[test]
fn missing_file_is_a_decode_failure_with_reason() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.mp3");
    assert_decode_failure(open_decoder(&missing), &missing);
}

#[test]
fn sink_is_built_paused_without_an_output_device() {
    let dir = tempdir().unwrap();
    let song = write_untagged_mp3(dir.path(), "song.mp3");
    let garbage = dir.path().join("clip.mp4");
    std::fs::write(&garbage, b"nope").unwrap();
    let (mixer, _source) = mixer::mixer(2, 44_100);

    let sink = create_sink_at(&mixer, &song, Duration::from_millis(100)).unwrap();
    assert!(sink.is_paused());
    assert_eq!(sink.len(), 1);

    assert_decode_failure(create_sink_at(&mixer, &garbage, Duration::ZERO), &garbage);
}

#[test]
fn fade_step_splits_the_fade_without_overflow() {
    assert_eq!(fade_step(Duration::ZERO), None);
    assert_eq!(fade_step(Duration::from_micros(900)), None);
    assert_eq!(fade_step(Duration::from_millis(5)), Some(Duration::from_millis(1)));
    assert_eq!(fade_step(Duration::from_millis(300)), Some(Duration::from_millis(15)));
    assert_eq!(fade_step(Duration::MAX), Some(Duration::MAX / 20));
}
