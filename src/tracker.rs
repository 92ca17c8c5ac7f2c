//! Per-category goal counters and completion-edge detection.

use ratatui::style::Color;

/// The two tracked action categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalKind {
    Posts,
    Dms,
}

impl GoalKind {
    pub fn all() -> [GoalKind; 2] {
        [GoalKind::Posts, GoalKind::Dms]
    }

    pub fn title(&self) -> &'static str {
        match self {
            GoalKind::Posts => "LinkedIn Posts",
            GoalKind::Dms => "Direct Messages",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GoalKind::Posts => "▤",
            GoalKind::Dms => "➤",
        }
    }

    /// Accent color used for card borders and completed counts.
    pub fn accent(&self) -> Color {
        match self {
            GoalKind::Posts => Color::Green,
            GoalKind::Dms => Color::Rgb(242, 125, 38),
        }
    }

    /// Three-color particle palette fired on every log in this category.
    pub fn burst_colors(&self) -> [Color; 3] {
        match self {
            GoalKind::Posts => [Color::Green, Color::White, Color::LightGreen],
            GoalKind::Dms => [
                Color::Rgb(242, 125, 38),
                Color::White,
                Color::Rgb(255, 69, 0),
            ],
        }
    }
}

/// Result of logging one action against a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOutcome {
    pub previous: u32,
    pub current: u32,
    /// True iff this log was the one that reached the target. Edge triggered:
    /// logging past the target does not re-fire it.
    pub crossed_completion: bool,
}

/// One goal counter with its user-configured target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub current: u32,
    pub target: u32,
}

impl Goal {
    pub fn new(target: u32) -> Self {
        Self {
            current: 0,
            target: target.max(1),
        }
    }

    /// Completion is derived, never stored.
    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }

    /// Increments the counter and reports whether this crossing completed
    /// the goal.
    pub fn log(&mut self) -> LogOutcome {
        let previous = self.current;
        self.current += 1;
        LogOutcome {
            previous,
            current: self.current,
            crossed_completion: previous + 1 == self.target,
        }
    }

    /// Decrements the counter, floored at zero. A silent correction: callers
    /// must not run any completion or feedback logic off this path.
    pub fn undo(&mut self) -> u32 {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Applies presentation-supplied target input. Anything that does not
    /// parse as a positive integer is coerced to 1. Completion state is
    /// simply re-derived against the new target.
    pub fn set_target_raw(&mut self, raw: &str) {
        self.target = parse_target(raw);
    }

    /// Progress toward the target in [0, 100].
    pub fn progress_percent(&self) -> f64 {
        (self.current as f64 / self.target as f64 * 100.0).min(100.0)
    }
}

fn parse_target(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => value.min(u32::MAX as i64) as u32,
        _ => 1,
    }
}
