//! Session wall-clock tracking.
//!
//! The session starts lazily on the first logged action, not at launch, and
//! lives until the process exits. Elapsed time is refreshed on a one-second
//! tick for display; completion snapshots read it exactly at the edge.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct SessionTimer {
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    pub fn new() -> Self {
        Self {
            started_at: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts the session if no action has been logged yet. Returns true only
    /// on the call that actually started it.
    pub fn start_if_needed(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Recomputes the displayed elapsed value. Driven by the main loop's
    /// one-second tick.
    pub fn refresh(&mut self, now: Instant) {
        self.elapsed = self.elapsed_at(now);
    }

    /// Last refreshed elapsed value.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time at an exact instant, used to snapshot "time to goal" on
    /// a completion edge. Zero before the session starts.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started) => now.saturating_duration_since(started),
            None => Duration::ZERO,
        }
    }
}

/// Formats a duration as "M:SS", flooring to whole seconds.
pub fn format_mmss(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
