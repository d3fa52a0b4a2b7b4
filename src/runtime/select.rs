use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::UiSettings;
use crate::picker::Picker;
use crate::ui;

/// Outcome of one key press in the picker.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Pick {
    Pending,
    Chosen(PathBuf),
    Cancelled,
}

/// Show the picker until a file is chosen (`Some`) or the user backs out.
pub fn choose_file(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &UiSettings,
    picker: &mut Picker,
) -> anyhow::Result<Option<PathBuf>> {
    let poll = Duration::from_millis(settings.poll_ms);
    loop {
        terminal.draw(|f| ui::draw_picker(f, picker, settings))?;

        if !event::poll(poll)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match handle_picker_key(key, picker) {
            Pick::Pending => {}
            Pick::Chosen(path) => return Ok(Some(path)),
            Pick::Cancelled => return Ok(None),
        }
    }
}

pub(crate) fn handle_picker_key(key: KeyEvent, picker: &mut Picker) -> Pick {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Pick::Cancelled,
        KeyCode::Char('j') | KeyCode::Down => picker.next(),
        KeyCode::Char('k') | KeyCode::Up => picker.prev(),
        KeyCode::Char('g') | KeyCode::Home => picker.first(),
        KeyCode::Char('G') | KeyCode::End => picker.last(),
        KeyCode::Enter => {
            if let Some(path) = picker.selected_path() {
                return Pick::Chosen(path.to_path_buf());
            }
        }
        _ => {}
    }
    Pick::Pending
}
