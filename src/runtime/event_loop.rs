use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::UiSettings;
use crate::engine::MediaEngine;
use crate::player::PlayerApp;
use crate::present::ScreenPresenter;
use crate::ui::{self, PlayerView};

pub type ScreenPlayer<E> = PlayerApp<E, ScreenPresenter>;

/// Terminal player loop: notices end of playback, redraws and handles keys.
/// Returns once `Esc` is pressed.
pub fn run<E: MediaEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &UiSettings,
    player: &mut ScreenPlayer<E>,
) -> anyhow::Result<()> {
    let poll = Duration::from_millis(settings.poll_ms);
    loop {
        player.tick();

        let view = PlayerView::of(player);
        terminal.draw(|f| ui::draw_player(f, &view, settings))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, player) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Apply one key press. Returns `true` when the player should quit.
pub(crate) fn handle_key_event<E: MediaEngine>(key: KeyEvent, player: &mut ScreenPlayer<E>) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('k') | KeyCode::Char('K') => match player.toggle() {
            Ok(state) => player.presenter_mut().set_notice(state.label()),
            Err(e) => player.presenter_mut().set_notice(e.to_string()),
        },
        KeyCode::Char('s') | KeyCode::Char('S') => match player.stop() {
            Ok(()) => player.presenter_mut().set_notice("Media stopped."),
            Err(e) => player.presenter_mut().set_notice(e.to_string()),
        },
        _ => {}
    }
    false
}
