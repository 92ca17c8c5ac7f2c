//! The motivational popup shown after each log.

use crate::app_state::Popup;
use crate::session::format_mmss;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

/// Draws the popup centered near the bottom of the frame. Completion popups
/// show the time-to-goal; plain logs show the motivational line.
pub fn draw_popup(frame: &mut Frame, area: Rect, popup: &Popup) {
    let lines: Vec<Line> = match popup.completed_in {
        Some(elapsed) => vec![
            Line::from("GOAL REACHED!"),
            Line::from(format!("in {}", format_mmss(elapsed))),
        ],
        None => vec![Line::from(popup.message)],
    };

    let width = lines
        .iter()
        .map(|l| l.width() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(6)
        .min(area.width);
    let height = lines.len() as u16 + 2;
    if area.height < height + 2 {
        return;
    }

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height - height - 2,
        width,
        height,
    };

    let widget = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(widget, popup_area);
}
