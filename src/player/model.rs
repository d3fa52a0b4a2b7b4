use std::fmt;

/// The playback state of the loaded item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing loaded.
    #[default]
    Idle,
    /// Loaded, output halted, position at zero.
    Stopped,
    Playing,
    /// Output halted; the next play resumes at the recorded position.
    Paused,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
