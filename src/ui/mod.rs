pub mod cards;
pub mod config_modal;
pub mod effects;
pub mod popup;

use crate::app_state::AppState;
use crate::session::format_mmss;
use crate::tracker::GoalKind;
use config_modal::ConfigScreen;
use effects::ParticleSystem;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Draws the whole screen: header, the two cards, footer, particles, popup,
/// and the config overlay when open.
pub fn draw_ui(
    frame: &mut Frame,
    state: &AppState,
    particles: &ParticleSystem,
    config: Option<&ConfigScreen>,
    muted: bool,
    now: Instant,
) {
    let size = frame.size();
    let area = shaken_area(size, state, now);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Cards
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], state);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for (kind, card_area) in GoalKind::all().into_iter().zip(card_areas.iter()) {
        cards::draw_card(frame, *card_area, state, kind);
    }

    draw_footer(frame, chunks[2], muted);

    // Particles overlay everything except the modal
    frame.render_widget(effects::ParticleOverlay(particles), size);

    if let Some(active) = &state.popup {
        popup::draw_popup(frame, size, active);
    }
    if let Some(screen) = config {
        screen.draw(frame, size);
    }
}

/// Jitters the frame one cell sideways while the shake window is active.
fn shaken_area(size: Rect, state: &AppState, now: Instant) -> Rect {
    if size.width < 2 || !state.is_shaking(now) {
        return size;
    }
    let Some(until) = state.shake_until else {
        return size;
    };
    // Alternate the offset every 50ms for a rattle rather than a shift
    let remaining = until.saturating_duration_since(now);
    let phase = (remaining.subsec_millis() / 50) % 2;
    Rect {
        x: size.x + phase as u16,
        width: size.width - 1,
        ..size
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(
            "DOPAMINE ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "ENGINE",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    // Timer chip appears only once a session has started
    if state.session.is_active() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("⏱ {}", format_mmss(state.session.elapsed())),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(
            "SYSTEM STATUS: HIGH PERFORMANCE / GOAL ORIENTED",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, muted: bool) {
    let mut spans = vec![Span::styled(
        "[p/d] log  [P/D] undo  [s] targets  [q] quit",
        Style::default().fg(Color::DarkGray),
    )];
    // Tell the user when no audio device was found
    if muted {
        spans.push(Span::styled(
            "  ♪ muted",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ));
    }
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
