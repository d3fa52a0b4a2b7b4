use std::env;
use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::cli::Cli;
use crate::config::Settings;
use crate::engine::RodioEngine;
use crate::logging;
use crate::metadata::MetadataExtractor;
use crate::picker::{self, Picker};
use crate::player::PlayerApp;
use crate::present::ScreenPresenter;

mod console;
mod event_loop;
mod select;
mod settings;


pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = settings::load_settings(cli.config.as_deref());

    if cli.dump_config {
        print!("{}", settings.to_toml().context("failed to render settings")?);
        return Ok(());
    }

    if cli.console {
        logging::init_stderr(&settings.log);
        return console::run(&settings, cli.path);
    }

    if let Err(e) = logging::init_file(&settings.log) {
        eprintln!("reel: logging disabled: {e:#}");
    }
    run_terminal(&settings, cli.path, cli.dir)
}

fn run_terminal(settings: &Settings, path: Option<PathBuf>, dir: Option<PathBuf>) -> anyhow::Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = session(&mut terminal, settings, path, dir);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Ok(false) = run_result {
        println!("No file selected. Exiting...");
    }
    run_result.map(|_| ())
}

/// Pick (if needed), load and play one file. Returns `false` when the picker
/// was dismissed without a choice.
fn session(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &Settings,
    path: Option<PathBuf>,
    dir: Option<PathBuf>,
) -> anyhow::Result<bool> {
    let path = match path {
        Some(p) => p,
        None => {
            let dir = match dir {
                Some(d) => d,
                None => env::current_dir().context("failed to read current directory")?,
            };
            let entries = picker::scan(&dir, &settings.picker);
            let mut picker = Picker::new(&dir, entries);
            match select::choose_file(terminal, &settings.ui, &mut picker)? {
                Some(p) => p,
                None => return Ok(false),
            }
        }
    };

    let engine = RodioEngine::open_default(&settings.audio).context("no audio output device")?;
    let mut player = PlayerApp::new(
        engine,
        ScreenPresenter::new(),
        MetadataExtractor::new(&settings.metadata),
    )
    .with_quit_fade_out(Duration::from_millis(settings.audio.quit_fade_out_ms));

    if let Err(e) = player.load(&path) {
        tracing::warn!(path = %path.display(), error = %e, "initial load failed");
        player.presenter_mut().set_notice(e.to_string());
    }

    let result = event_loop::run(terminal, &settings.ui, &mut player);
    if let Some(item) = player.item() {
        let title = player.metadata().map(|m| m.title.as_str());
        tracing::info!(path = %item.native_path.display(), ?title, state = %player.state(), "closing");
    }
    player.quit();
    result.map(|()| true)
}
