//! Central state for one page view.
//!
//! Everything here lives only for the process lifetime: goal counters, the
//! lazily started session timer, the shared sound-cycle cursor, and the
//! transient feedback state (popup, shake window, scheduled bursts).

use crate::burst::BurstConfig;
use crate::constants::{DEFAULT_DMS_TARGET, DEFAULT_POSTS_TARGET};
use crate::session::SessionTimer;
use crate::tracker::{Goal, GoalKind};
use std::time::{Duration, Instant};

/// Content of the motivational popup, replaced wholesale by each new log.
#[derive(Debug, Clone, Copy)]
pub struct Popup {
    pub kind: GoalKind,
    pub message: &'static str,
    /// Set when this popup announces a completion edge; shown as
    /// "GOAL REACHED! in M:SS" instead of the message.
    pub completed_in: Option<Duration>,
    pub expires_at: Instant,
}

/// A celebratory burst waiting for its fire deadline. Not cancellable.
#[derive(Debug, Clone)]
pub struct PendingBurst {
    pub config: BurstConfig,
    pub fire_at: Instant,
}

pub struct AppState {
    pub posts: Goal,
    pub dms: Goal,
    pub session: SessionTimer,
    /// Cycles the hit-sound palette. Shared across both categories and only
    /// advanced by non-completing logs.
    pub sound_cursor: u32,
    pub popup: Option<Popup>,
    pub shake_until: Option<Instant>,
    pub pending_bursts: Vec<PendingBurst>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            posts: Goal::new(DEFAULT_POSTS_TARGET),
            dms: Goal::new(DEFAULT_DMS_TARGET),
            session: SessionTimer::new(),
            sound_cursor: 0,
            popup: None,
            shake_until: None,
            pending_bursts: Vec::new(),
        }
    }

    pub fn goal(&self, kind: GoalKind) -> &Goal {
        match kind {
            GoalKind::Posts => &self.posts,
            GoalKind::Dms => &self.dms,
        }
    }

    pub fn goal_mut(&mut self, kind: GoalKind) -> &mut Goal {
        match kind {
            GoalKind::Posts => &mut self.posts,
            GoalKind::Dms => &mut self.dms,
        }
    }

    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_until.map_or(false, |until| now < until)
    }
}
