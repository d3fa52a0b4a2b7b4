use std::path::PathBuf;

use clap::Parser;

/// Play one audio (mp3) or video (mp4) file in the terminal.
#[derive(Debug, Parser)]
#[command(name = "reel", version, about)]
pub struct Cli {
    /// Media file to open. Without it the terminal UI shows a file picker.
    pub path: Option<PathBuf>,

    /// Use the line-oriented command console instead of the terminal UI.
    #[arg(long)]
    pub console: bool,

    /// Directory the file picker lists (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,
}
