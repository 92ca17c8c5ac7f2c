//! Target-editing overlay.

use crate::app_state::AppState;
use crate::reward_logic::set_target;
use crate::tracker::GoalKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// State of the "Set Your Targets" overlay. Input is raw text; coercion to a
/// positive integer happens in the tracker when the edit is applied.
pub struct ConfigScreen {
    pub posts_input: String,
    pub dms_input: String,
    pub selected: GoalKind,
}

impl ConfigScreen {
    /// Opens the overlay pre-filled with the current targets.
    pub fn open(state: &AppState) -> Self {
        Self {
            posts_input: state.posts.target.to_string(),
            dms_input: state.dms.target.to_string(),
            selected: GoalKind::Posts,
        }
    }

    fn input_mut(&mut self) -> &mut String {
        match self.selected {
            GoalKind::Posts => &mut self.posts_input,
            GoalKind::Dms => &mut self.dms_input,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        // Only digits and a leading minus make it into the field; the
        // coercion rule handles whatever nonsense remains
        if c.is_ascii_digit() || (c == '-' && self.input_mut().is_empty()) {
            self.input_mut().push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.input_mut().pop();
    }

    pub fn toggle_field(&mut self) {
        self.selected = match self.selected {
            GoalKind::Posts => GoalKind::Dms,
            GoalKind::Dms => GoalKind::Posts,
        };
    }

    /// Applies both edits with the coercion rule and consumes the overlay.
    pub fn apply(self, state: &mut AppState) {
        set_target(state, GoalKind::Posts, &self.posts_input);
        set_target(state, GoalKind::Dms, &self.dms_input);
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let width = 44.min(area.width);
        let height = 12.min(area.height);
        let modal = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, modal);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Set Your Targets ");
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Posts field
                Constraint::Length(2), // DMs field
                Constraint::Min(0),    // Filler
                Constraint::Length(2), // Controls
            ])
            .split(inner);

        self.draw_field(frame, chunks[0], GoalKind::Posts, "Daily Posts Goal");
        self.draw_field(frame, chunks[1], GoalKind::Dms, "Daily DMs Goal");

        let controls = Paragraph::new(vec![
            Line::from(Span::styled(
                "[Tab] switch field  [Enter] save",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "[Esc] cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(controls, chunks[3]);
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, kind: GoalKind, label: &str) {
        let (value, active) = match kind {
            GoalKind::Posts => (&self.posts_input, self.selected == GoalKind::Posts),
            GoalKind::Dms => (&self.dms_input, self.selected == GoalKind::Dms),
        };

        let marker = if active { "▸ " } else { "  " };
        let field_style = if active {
            Style::default()
                .fg(kind.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if active { "_" } else { "" };

        let lines = vec![
            Line::from(Span::styled(
                format!("{}{}", marker, label),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(format!("  {}{}", value, cursor), field_style)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
