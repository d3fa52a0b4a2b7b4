use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Context;

use crate::command::{Command, INSTRUCTIONS};
use crate::config::{ConsoleSettings, Settings};
use crate::engine::{MediaEngine, RodioEngine};
use crate::error::PlayerError;
use crate::media::MediaKind;
use crate::metadata::MetadataExtractor;
use crate::player::PlayerApp;
use crate::present::{ConsolePresenter, Presenter};

/// One line read by the input thread.
#[derive(Debug)]
pub(crate) enum Input {
    Command(Command),
    Invalid(PlayerError),
    Blank,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

type ConsolePlayer<E, W> = PlayerApp<E, ConsolePresenter<W>>;

/// Run the console front-end until `exit` or end of input.
pub fn run(settings: &Settings, initial: Option<PathBuf>) -> anyhow::Result<()> {
    let engine = RodioEngine::open_default(&settings.audio).context("no audio output device")?;
    let mut player = PlayerApp::new(
        engine,
        ConsolePresenter::stdout(),
        MetadataExtractor::new(&settings.metadata),
    )
    .with_quit_fade_out(Duration::from_millis(settings.audio.quit_fade_out_ms));

    print_instructions(player.presenter_mut());
    if let Some(path) = initial {
        dispatch(&mut player, Command::Load(path));
    }

    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel::<Input>();
    // Not joined: it may sit in a read that only returns on the next line.
    let _input = spawn_input_thread(BufReader::new(io::stdin()), tx, running.clone())
        .context("failed to start console input thread")?;

    drive(&mut player, &rx, &settings.console);

    running.store(false, Ordering::Release);
    player.quit();
    Ok(())
}

/// Read lines from `input` and post them to the owning loop.
///
/// The thread ends after forwarding `exit`, at end of input (which is
/// forwarded as `exit`), on a read error, once `running` is cleared, or when
/// the owning loop has hung up.
pub(crate) fn spawn_input_thread<R>(
    mut input: R,
    tx: Sender<Input>,
    running: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            let mut line = String::new();
            while running.load(Ordering::Acquire) {
                line.clear();
                match input.read_line(&mut line) {
                    Ok(0) => {
                        tracing::debug!("console input closed");
                        let _ = tx.send(Input::Command(Command::Exit));
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read console input");
                        let _ = tx.send(Input::Command(Command::Exit));
                        break;
                    }
                }

                let msg = if line.trim().is_empty() {
                    Input::Blank
                } else {
                    match line.parse::<Command>() {
                        Ok(cmd) => Input::Command(cmd),
                        Err(e) => Input::Invalid(e),
                    }
                };
                let exit = matches!(msg, Input::Command(Command::Exit));
                if tx.send(msg).is_err() || exit {
                    break;
                }
            }
        })
}

/// Drain `rx` on the calling thread, which owns `player`. Between inputs the
/// player is ticked so the end of playback is noticed.
pub(crate) fn drive<E: MediaEngine, W: Write>(
    player: &mut ConsolePlayer<E, W>,
    rx: &Receiver<Input>,
    settings: &ConsoleSettings,
) {
    let tick = Duration::from_millis(settings.tick_ms);
    player.presenter_mut().prompt(&settings.prompt);

    loop {
        match rx.recv_timeout(tick) {
            Ok(Input::Command(cmd)) => {
                if dispatch(player, cmd) == Flow::Exit {
                    break;
                }
            }
            Ok(Input::Invalid(e)) => {
                player.presenter_mut().notice(&e.to_string());
                print_instructions(player.presenter_mut());
            }
            Ok(Input::Blank) => {}
            Err(RecvTimeoutError::Timeout) => {
                if !player.tick() {
                    continue;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
        player.presenter_mut().prompt(&settings.prompt);
    }
}

/// Apply one command and report the outcome on the console.
pub(crate) fn dispatch<E: MediaEngine, W: Write>(
    player: &mut ConsolePlayer<E, W>,
    cmd: Command,
) -> Flow {
    let outcome = match cmd {
        Command::Load(path) => player.load(&path).map(|item| item.kind).map(|kind| {
            let loaded = match kind {
                MediaKind::Audio => "Audio loaded successfully.",
                MediaKind::Video => "Video loaded successfully.",
            };
            format!("{loaded}\nLoaded: {}", path.display())
        }),
        Command::Play => player.play().map(|()| "Playing media...".to_string()),
        Command::Pause => player.pause().map(|()| "Media paused.".to_string()),
        Command::Stop => player.stop().map(|()| "Media stopped.".to_string()),
        Command::Help => {
            print_instructions(player.presenter_mut());
            return Flow::Continue;
        }
        Command::Exit => {
            player.presenter_mut().notice("Exiting media player...");
            return Flow::Exit;
        }
    };

    let presenter = player.presenter_mut();
    match outcome {
        Ok(msg) => presenter.notice(&msg),
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            presenter.notice(&e.to_string());
        }
    }
    Flow::Continue
}

fn print_instructions<W: Write>(presenter: &mut ConsolePresenter<W>) {
    presenter.notice("\n--- Media Player Console ---");
    for line in INSTRUCTIONS {
        presenter.notice(line);
    }
    presenter.notice("-----------------------------\n");
}
