//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`: the file
//! picker and the player screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use crate::config::UiSettings;
use crate::engine::MediaEngine;
use crate::media::MediaKind;
use crate::picker::Picker;
use crate::player::{PlaybackState, PlayerApp};
use crate::present::{Screen, ScreenPresenter, Surface};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("k/K", "play/pause");
    map.insert("s/S", "stop");
    map.insert("esc", "quit");
    map.insert("j/k", "up/down");
    map.insert("g/G", "top/bottom");
    map.insert("enter", "open");
    map.insert("q", "cancel");
    map
});

const PLAYER_KEYS: [&str; 3] = ["k/K", "s/S", "esc"];
const PICKER_KEYS: [&str; 5] = ["j/k", "g/G", "enter", "esc", "q"];

/// Render the help text for `keys`, in the given order.
fn controls_text(keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / total` label and gauge ratio for the timeline.
fn timeline(position: Duration, duration: Option<Duration>) -> (String, f64) {
    match duration {
        Some(total) if !total.is_zero() => {
            let ratio = (position.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0);
            (
                format!("{} / {}", format_mmss(position), format_mmss(total)),
                ratio,
            )
        }
        _ => (format!("{} / --:--", format_mmss(position)), 0.0),
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Snapshot of the player taken once per frame.
pub struct PlayerView<'a> {
    pub state: PlaybackState,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub screen: &'a Screen,
}

impl<'a> PlayerView<'a> {
    pub fn of<E: MediaEngine>(player: &'a PlayerApp<E, ScreenPresenter>) -> Self {
        Self {
            state: player.state(),
            position: player.position(),
            duration: player.duration(),
            screen: player.presenter().screen(),
        }
    }

    fn status_text(&self) -> String {
        let mut parts: Vec<String> = vec![format!(" STATE: {}", self.state)];
        if let Some(title) = &self.screen.title {
            parts.push(format!("File: {}", title));
        }
        if let Some(kind) = self.screen.kind {
            parts.push(format!("Kind: {}", kind));
        }
        if let Some(notice) = &self.screen.notice {
            parts.push(notice.clone());
        }
        parts.join(" • ")
    }
}

/// Render the file picker.
pub fn draw_picker(frame: &mut Frame, picker: &Picker, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(format!("Dir: {}", picker.dir.display()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" reel: open a file ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    if picker.is_empty() {
        let empty = Paragraph::new("No mp3 or mp4 files found.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" files "));
        frame.render_widget(empty, chunks[1]);
    } else {
        // Only build ListItems for the visible window, keeping the selection centered.
        let total = picker.entries.len();
        let list_height = chunks[1].height.saturating_sub(2) as usize;
        let sel = picker.selected;
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let mut start = sel.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height)
        };

        let items: Vec<ListItem> = picker.entries[start..end]
            .iter()
            .map(|e| ListItem::new(e.display.as_str()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" files "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(sel - start));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    if ui_settings.show_instructions {
        let footer = Paragraph::new(controls_text(&PICKER_KEYS))
            .block(Block::default().borders(Borders::ALL).title(" controls ").padding(left_pad()));
        frame.render_widget(footer, chunks[2]);
    }
}

/// Render the player screen for the loaded item.
pub fn draw_player(frame: &mut Frame, view: &PlayerView<'_>, ui_settings: &UiSettings) {
    match view.screen.kind {
        Some(MediaKind::Video) => draw_video(frame, view, ui_settings),
        _ => draw_audio(frame, view, ui_settings),
    }
}

/// Video takes the whole viewport; timeline and instructions overlay it.
fn draw_video(frame: &mut Frame, view: &PlayerView<'_>, ui_settings: &UiSettings) {
    let area = frame.area();
    let title = view.screen.title.as_deref().unwrap_or("video");
    let surface = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center);
    let inner = surface.inner(area);
    frame.render_widget(surface, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(view.status_text()).wrap(Wrap { trim: true }),
        rows[0],
    );

    let (label, ratio) = timeline(view.position, view.duration);
    frame.render_widget(Gauge::default().ratio(ratio).label(label), rows[2]);

    if ui_settings.show_instructions {
        frame.render_widget(
            Paragraph::new(controls_text(&PLAYER_KEYS))
                .alignment(Alignment::Center)
                .dim(),
            rows[3],
        );
    }
}

fn draw_audio(frame: &mut Frame, view: &PlayerView<'_>, ui_settings: &UiSettings) {
    let footer_height = if ui_settings.show_instructions { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" reel ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(view.status_text())
        .block(Block::bordered().padding(left_pad()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    let overlay = if view.screen.overlay.is_empty() {
        "No media loaded.".to_string()
    } else {
        view.screen.overlay.join("\n")
    };
    let meta = Paragraph::new(overlay)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(left_pad())
                .title(" metadata "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(meta, body[0]);

    let art = Block::default().borders(Borders::ALL).title(" cover art ");
    let art_inner = art.inner(body[1]);
    frame.render_widget(art, body[1]);
    let art_text = match &view.screen.surface {
        Some(Surface::CoverArt { path, bytes }) => {
            format!("{}\n{} bytes", path.display(), bytes)
        }
        _ => "none".to_string(),
    };
    let card = centered_rect_sized(art_inner.width, 4, art_inner);
    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(art_text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        card,
    );

    let (label, ratio) = timeline(view.position, view.duration);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" timeline "))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[3]);

    if ui_settings.show_instructions {
        let footer = Paragraph::new(controls_text(&PLAYER_KEYS))
            .block(Block::default().borders(Borders::ALL).title(" controls ").padding(left_pad()))
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[4]);
    }
}
