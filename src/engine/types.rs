use std::time::Duration;

use crate::error::Result;
use crate::media::MediaItem;

/// Opens media for playback.
pub trait MediaEngine {
    type Sound: MediaSound;

    /// Open `item` without starting output. Fails with `DecodeFailure` when the
    /// file cannot be decoded; nothing already playing is affected.
    fn open(&mut self, item: &MediaItem) -> Result<Self::Sound>;
}

/// One opened item. Output is either running or halted.
pub trait MediaSound {
    /// Start output at `position` from the beginning of the item.
    fn play_from(&mut self, position: Duration) -> Result<()>;

    /// Halt output. Safe to call when already halted.
    fn halt(&mut self);

    /// Current position while running; the last start position otherwise.
    fn position(&self) -> Duration;

    /// Whether running output has reached the end of the item.
    fn is_finished(&self) -> bool;

    fn duration(&self) -> Option<Duration>;

    /// Lower the volume to silence over `over` before a halt.
    fn fade_out(&mut self, over: Duration) {
        let _ = over;
    }
}
