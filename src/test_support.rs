//! Fixtures shared by unit tests: tiny MP3 files with hand-written ID3v2.3
//! tags, and an in-memory media engine whose clock the test drives.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::engine::{MediaEngine, MediaSound};
use crate::error::{PlayerError, Result};
use crate::media::MediaItem;

pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];

#[derive(Default)]
pub struct Tags<'a> {
    pub title: Option<&'a str>,
    pub artist: Option<&'a str>,
    pub album: Option<&'a str>,
    pub cover: Option<&'a [u8]>,
}

fn syncsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7f) as u8,
        ((n >> 14) & 0x7f) as u8,
        ((n >> 7) & 0x7f) as u8,
        (n & 0x7f) as u8,
    ]
}

fn frame(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(10 + body.len());
    out.extend_from_slice(id);
    out.extend_from_slice(&(body.len() as u32).to_be_bytes());
    out.extend_from_slice(&[0, 0]);
    out.extend_from_slice(body);
    out
}

fn text_frame(id: &[u8; 4], text: &str) -> Vec<u8> {
    let mut body = vec![0x00];
    body.extend_from_slice(text.as_bytes());
    frame(id, &body)
}

fn apic_frame(data: &[u8]) -> Vec<u8> {
    let mut body = vec![0x00];
    body.extend_from_slice(b"image/jpeg\0");
    body.push(0x03);
    body.push(0x00);
    body.extend_from_slice(data);
    frame(b"APIC", &body)
}

fn id3v23(tags: &Tags<'_>) -> Vec<u8> {
    let mut frames = Vec::new();
    if let Some(t) = tags.title {
        frames.extend(text_frame(b"TIT2", t));
    }
    if let Some(a) = tags.artist {
        frames.extend(text_frame(b"TPE1", a));
    }
    if let Some(a) = tags.album {
        frames.extend(text_frame(b"TALB", a));
    }
    if let Some(c) = tags.cover {
        frames.extend(apic_frame(c));
    }

    let mut out = b"ID3".to_vec();
    out.extend_from_slice(&[3, 0, 0]);
    out.extend_from_slice(&syncsafe(frames.len() as u32));
    out.extend(frames);
    out
}

/// Silent MPEG-1 Layer III frames (128 kbit/s, 44.1 kHz, 417 bytes each).
fn mpeg_frames(count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(count * 417);
    for _ in 0..count {
        out.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        out.extend(std::iter::repeat_n(0u8, 413));
    }
    out
}

/// Write `<dir>/<name>` as an MP3 carrying `tags`.
pub fn write_mp3(dir: &Path, name: &str, tags: &Tags<'_>) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = id3v23(tags);
    bytes.extend(mpeg_frames(24));
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Write an MP3 with no tag block at all.
pub fn write_untagged_mp3(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, mpeg_frames(24)).unwrap();
    path
}

/// Shared knobs and observations for the fake engine.
#[derive(Default, Clone)]
pub struct Probe {
    /// Time elapsed since the last `play_from`, as the test wants it to be.
    pub elapsed: Rc<Cell<Duration>>,
    pub finished: Rc<Cell<bool>>,
    pub fail_open: Rc<Cell<bool>>,
    pub starts: Rc<RefCell<Vec<Duration>>>,
    pub opened: Rc<RefCell<Vec<PathBuf>>>,
    pub live_sounds: Rc<Cell<usize>>,
    pub running: Rc<Cell<bool>>,
    pub fades: Rc<Cell<usize>>,
}

pub struct FakeEngine {
    probe: Probe,
}

impl FakeEngine {
    pub fn new(probe: &Probe) -> Self {
        Self {
            probe: probe.clone(),
        }
    }
}

pub struct FakeSound {
    probe: Probe,
    offset: Duration,
    running: bool,
}

impl MediaEngine for FakeEngine {
    type Sound = FakeSound;

    fn open(&mut self, item: &MediaItem) -> Result<FakeSound> {
        if self.probe.fail_open.get() {
            return Err(PlayerError::decode(&item.native_path, "unsupported codec"));
        }
        self.probe.opened.borrow_mut().push(item.playback_path.clone());
        self.probe.live_sounds.set(self.probe.live_sounds.get() + 1);
        Ok(FakeSound {
            probe: self.probe.clone(),
            offset: Duration::ZERO,
            running: false,
        })
    }
}

impl MediaSound for FakeSound {
    fn play_from(&mut self, position: Duration) -> Result<()> {
        self.offset = position;
        self.running = true;
        self.probe.running.set(true);
        self.probe.elapsed.set(Duration::ZERO);
        self.probe.starts.borrow_mut().push(position);
        Ok(())
    }

    fn halt(&mut self) {
        self.running = false;
        self.probe.running.set(false);
    }

    fn position(&self) -> Duration {
        if self.running {
            self.offset + self.probe.elapsed.get()
        } else {
            self.offset
        }
    }

    fn is_finished(&self) -> bool {
        self.running && self.probe.finished.get()
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(180))
    }

    fn fade_out(&mut self, _over: Duration) {
        self.probe.fades.set(self.probe.fades.get() + 1);
    }
}

impl Drop for FakeSound {
    fn drop(&mut self) {
        self.probe.live_sounds.set(self.probe.live_sounds.get() - 1);
    }
}
