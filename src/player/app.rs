use std::path::Path;
use std::time::Duration;

use crate::engine::{MediaEngine, MediaSound};
use crate::error::{PlayerError, Result};
use crate::media::{MediaItem, MediaKind};
use crate::metadata::{Metadata, MetadataExtractor};
use crate::present::{Presenter, Surface};

use super::model::PlaybackState;

struct Loaded<S> {
    item: MediaItem,
    sound: S,
    /// Only audio items carry metadata. Dropping it removes the cover art file.
    metadata: Option<Metadata>,
}

/// The player context: engine, presenter and the currently loaded item.
pub struct PlayerApp<E: MediaEngine, P: Presenter> {
    engine: E,
    presenter: P,
    extractor: MetadataExtractor,
    loaded: Option<Loaded<E::Sound>>,
    state: PlaybackState,
    /// Where the next `play` starts from.
    resume_at: Duration,
    quit_fade_out: Duration,
}

impl<E: MediaEngine, P: Presenter> PlayerApp<E, P> {
    pub fn new(engine: E, presenter: P, extractor: MetadataExtractor) -> Self {
        Self {
            engine,
            presenter,
            extractor,
            loaded: None,
            state: PlaybackState::Idle,
            resume_at: Duration::ZERO,
            quit_fade_out: Duration::ZERO,
        }
    }

    /// Fade output out over `fade` when quitting while playing.
    pub fn with_quit_fade_out(mut self, fade: Duration) -> Self {
        self.quit_fade_out = fade;
        self
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn item(&self) -> Option<&MediaItem> {
        self.loaded.as_ref().map(|l| &l.item)
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.loaded.as_ref().and_then(|l| l.metadata.as_ref())
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Elapsed position: live while playing, the resume point otherwise.
    pub fn position(&self) -> Duration {
        match (&self.loaded, self.state) {
            (Some(l), PlaybackState::Playing) => l.sound.position(),
            _ => self.resume_at,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.loaded.as_ref().and_then(|l| l.sound.duration())
    }

    /// Load `path`, replacing whatever was loaded before.
    ///
    /// The previous item survives a failed load untouched. On success it is
    /// released before the new item's metadata is extracted, so at most one
    /// cover art file exists at a time.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&MediaItem> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PlayerError::NotFound(path.to_path_buf()));
        }

        let item = MediaItem::new(path);
        let sound = self.engine.open(&item)?;

        self.release();

        let metadata = match item.kind {
            MediaKind::Audio => {
                let metadata = self.extractor.extract(&item.native_path);
                self.presenter.show_metadata(&item, &metadata);
                if let Some(cover) = &metadata.cover_art {
                    tracing::debug!(mime = cover.mime().unwrap_or("unknown"), "cover art ready");
                    let surface = Surface::CoverArt {
                        path: cover.path().to_path_buf(),
                        bytes: cover.byte_len(),
                    };
                    self.presenter.show_surface(&item, &surface);
                }
                Some(metadata)
            }
            MediaKind::Video => {
                self.presenter.show_surface(&item, &Surface::Fullscreen);
                None
            }
        };

        tracing::info!(path = %item.native_path.display(), kind = %item.kind, "loaded media");

        self.state = PlaybackState::Stopped;
        self.resume_at = Duration::ZERO;
        let loaded = self.loaded.insert(Loaded {
            item,
            sound,
            metadata,
        });
        Ok(&loaded.item)
    }

    /// Start or resume output at the recorded position.
    pub fn play(&mut self) -> Result<()> {
        let Some(loaded) = self.loaded.as_mut() else {
            return Err(PlayerError::NoMedia);
        };
        if self.state == PlaybackState::Playing {
            return Err(PlayerError::AlreadyPlaying);
        }

        loaded.sound.play_from(self.resume_at)?;
        tracing::debug!(from = ?self.resume_at, "playing");
        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Halt output and remember where it stopped.
    pub fn pause(&mut self) -> Result<()> {
        let Some(loaded) = self.loaded.as_mut() else {
            return Err(PlayerError::NoMedia);
        };
        if self.state != PlaybackState::Playing {
            return Err(PlayerError::NotPlaying);
        }

        self.resume_at = loaded.sound.position();
        loaded.sound.halt();
        tracing::debug!(at = ?self.resume_at, "paused");
        self.state = PlaybackState::Paused;
        Ok(())
    }

    /// Halt output and rewind to the start.
    pub fn stop(&mut self) -> Result<()> {
        let Some(loaded) = self.loaded.as_mut() else {
            return Err(PlayerError::NoMedia);
        };

        loaded.sound.halt();
        self.resume_at = Duration::ZERO;
        self.state = PlaybackState::Stopped;
        tracing::debug!("stopped");
        Ok(())
    }

    /// Pause when playing, play otherwise.
    pub fn toggle(&mut self) -> Result<PlaybackState> {
        if self.state == PlaybackState::Playing {
            self.pause()?;
        } else {
            self.play()?;
        }
        Ok(self.state)
    }

    /// Notice output that ran to the end. Returns whether the state changed.
    pub fn tick(&mut self) -> bool {
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        if self.state != PlaybackState::Playing || !loaded.sound.is_finished() {
            return false;
        }

        loaded.sound.halt();
        self.resume_at = Duration::ZERO;
        self.state = PlaybackState::Stopped;
        tracing::info!(path = %loaded.item.native_path.display(), "playback finished");
        self.presenter.notice("Playback finished.");
        true
    }

    /// Halt output and release every resource, including the cover art file.
    pub fn quit(mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            if self.state == PlaybackState::Playing && !self.quit_fade_out.is_zero() {
                loaded.sound.fade_out(self.quit_fade_out);
            }
        }
        self.release();
        tracing::info!("player shut down");
    }

    fn release(&mut self) {
        if let Some(mut loaded) = self.loaded.take() {
            loaded.sound.halt();
            if let Some(cover) = loaded.metadata.take().and_then(|m| m.cover_art) {
                if let Err(e) = cover.discard() {
                    tracing::warn!(error = %e, "failed to remove cover art");
                }
            }
            self.presenter.clear();
        }
        self.state = PlaybackState::Idle;
        self.resume_at = Duration::ZERO;
    }
}
