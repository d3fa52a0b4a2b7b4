//! Utilities for creating `rodio` sinks from media paths.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

use crate::error::{PlayerError, Result};

/// Open and decode `path`. Errors carry the decoder's reason.
pub(super) fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path).map_err(|e| PlayerError::decode(path, e))?;
    Decoder::try_from(file).map_err(|e| PlayerError::decode(path, e))
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(mixer: &Mixer, path: &Path, start_at: Duration) -> Result<Sink> {
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = open_decoder(path)?.skip_duration(start_at);

    let sink = Sink::connect_new(mixer);
    sink.append(source);
    sink.pause();
    Ok(sink)
}

const FADE_STEPS: u32 = 20;

/// Sleep between volume steps, or `None` when the fade is shorter than 1ms.
pub(super) fn fade_step(fade_out: Duration) -> Option<Duration> {
    if fade_out < Duration::from_millis(1) {
        return None;
    }
    Some((fade_out / FADE_STEPS).max(Duration::from_millis(1)))
}

/// Fade `sink` from `from` to silence over `fade_out`, blocking the caller.
pub(super) fn fade_out_sink(sink: &Sink, from: f32, fade_out: Duration) {
    let Some(step) = fade_step(fade_out) else {
        sink.set_volume(0.0);
        return;
    };
    for i in 1..=FADE_STEPS {
        let t = i as f32 / FADE_STEPS as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(step);
    }
    sink.set_volume(0.0);
}
