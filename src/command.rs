//! Console commands: parsing of one input line into a `Command`.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PlayerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `load <path>`; the path is everything after the first whitespace run.
    Load(PathBuf),
    Play,
    Pause,
    Stop,
    Exit,
    Help,
}

pub const INSTRUCTIONS: [&str; 7] = [
    "Commands:",
    "  load <file_path>: Load a media file (mp3 or mp4)",
    "  play: Play the loaded media",
    "  pause: Pause the media playback",
    "  stop: Stop the media playback",
    "  help: Show this list again",
    "  exit: Quit the media player",
];

impl FromStr for Command {
    type Err = PlayerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let cmd = match (word, rest.is_empty()) {
            ("load", false) => Command::Load(PathBuf::from(rest)),
            ("play", true) => Command::Play,
            ("pause", true) => Command::Pause,
            ("stop", true) => Command::Stop,
            ("exit", true) => Command::Exit,
            ("help", true) => Command::Help,
            _ => return Err(PlayerError::InvalidCommand(line.to_string())),
        };
        Ok(cmd)
    }
}
