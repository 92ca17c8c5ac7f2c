//! Counter cards for the two categories.

use crate::app_state::AppState;
use crate::tracker::GoalKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws one category card: icon and title, current/target readout, a log
/// prompt, and the progress bar along the bottom.
pub fn draw_card(frame: &mut Frame, area: Rect, state: &AppState, kind: GoalKind) {
    let goal = state.goal(kind);
    let accent = kind.accent();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if goal.is_complete() {
            accent
        } else {
            Color::DarkGray
        }))
        .title(format!(" {} {} ", kind.icon(), kind.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Count readout
            Constraint::Min(1),    // Prompt / status
            Constraint::Length(1), // Undo hint
            Constraint::Length(1), // Progress bar
        ])
        .split(inner);

    draw_count(frame, chunks[0], state, kind);
    draw_prompt(frame, chunks[1], state, kind);
    draw_undo_hint(frame, chunks[2], state, kind);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(Color::Black))
        .ratio(goal.progress_percent() / 100.0)
        .label(format!("{:.0}%", goal.progress_percent()));
    frame.render_widget(gauge, chunks[3]);
}

fn draw_count(frame: &mut Frame, area: Rect, state: &AppState, kind: GoalKind) {
    let goal = state.goal(kind);
    let count_style = if goal.is_complete() {
        Style::default()
            .fg(kind.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled("PROGRESS  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}", goal.current), count_style),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}", goal.target), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        area,
    );
}

fn draw_prompt(frame: &mut Frame, area: Rect, state: &AppState, kind: GoalKind) {
    let goal = state.goal(kind);
    let key = match kind {
        GoalKind::Posts => "p",
        GoalKind::Dms => "d",
    };

    let line = if goal.is_complete() {
        Line::from(Span::styled(
            "🏆 GOAL REACHED!",
            Style::default()
                .fg(kind.accent())
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!("[{}]", key),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" log action"),
        ])
    };
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        area,
    );
}

fn draw_undo_hint(frame: &mut Frame, area: Rect, state: &AppState, kind: GoalKind) {
    // Undo is visible only once something can be undone
    if state.goal(kind).current == 0 {
        return;
    }
    let key = match kind {
        GoalKind::Posts => "P",
        GoalKind::Dms => "D",
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        format!("[{}] undo", key),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}
