//! Playback controller: the one loaded item and its play/pause/stop state.
//!
//! `PlayerApp` is constructed explicitly by a front-end and owned by the
//! thread that drives it. Every mutation goes through its methods.

mod app;
mod model;

pub use app::PlayerApp;
pub use model::PlaybackState;
