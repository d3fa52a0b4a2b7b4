use std::path::PathBuf;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};

use crate::config::AudioSettings;
use crate::error::Result;
use crate::media::MediaItem;

use super::sink::{create_sink_at, fade_out_sink, open_decoder};
use super::types::{MediaEngine, MediaSound};

/// Plays media through the default output device.
pub struct RodioEngine {
    stream: OutputStream,
    volume: f32,
}

impl RodioEngine {
    pub fn open_default(settings: &AudioSettings) -> anyhow::Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a terminal app.
        stream.log_on_drop(false);
        Ok(Self {
            stream,
            volume: settings.volume,
        })
    }
}

impl MediaEngine for RodioEngine {
    type Sound = RodioSound;

    fn open(&mut self, item: &MediaItem) -> Result<RodioSound> {
        let path = item.playback_path.clone();
        // Decode once up front so a broken file is reported at load time.
        let duration = open_decoder(&path)?.total_duration();
        tracing::debug!(path = %path.display(), ?duration, kind = %item.kind, "opened media");

        Ok(RodioSound {
            mixer: self.stream.mixer().clone(),
            path,
            volume: self.volume,
            duration,
            sink: None,
            offset: Duration::ZERO,
        })
    }
}

/// A loaded file. A fresh sink is built on every start; halting drops it.
pub struct RodioSound {
    mixer: Mixer,
    path: PathBuf,
    volume: f32,
    duration: Option<Duration>,
    sink: Option<Sink>,
    offset: Duration,
}

impl MediaSound for RodioSound {
    fn play_from(&mut self, position: Duration) -> Result<()> {
        self.halt();
        let sink = create_sink_at(&self.mixer, &self.path, position)?;
        sink.set_volume(self.volume);
        sink.play();
        self.sink = Some(sink);
        self.offset = position;
        Ok(())
    }

    fn halt(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn position(&self) -> Duration {
        match &self.sink {
            // Sink positions count from where the skipped source started.
            Some(sink) => self.offset + sink.get_pos(),
            None => self.offset,
        }
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| s.empty())
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn fade_out(&mut self, over: Duration) {
        if let Some(sink) = &self.sink {
            fade_out_sink(sink, self.volume, over);
        }
    }
}

impl Drop for RodioSound {
    fn drop(&mut self) {
        self.halt();
    }
}
