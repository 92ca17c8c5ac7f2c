//! The reward orchestrator.
//!
//! Turns one discrete user action into a coordinated round of feedback:
//! counter update, sound selection, particle bursts, popup, shake. State
//! mutation happens synchronously here; the returned events are the side
//! effects for the main loop to dispatch afterwards, so an observer reading
//! state right after a call always sees the post-increment values.

use crate::app_state::{AppState, PendingBurst, Popup};
use crate::burst::BurstConfig;
use crate::constants::*;
use crate::messages::motivational_message;
use crate::tracker::GoalKind;
use rand::Rng;
use std::time::{Duration, Instant};

/// Effects produced by one log action, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardEvent {
    /// First action of the view started the session clock.
    SessionStarted,
    /// Play the hit cue for this palette variant.
    PlayHit { variant: u32 },
    /// Play the completion fanfare.
    PlayVictory,
    /// Emit a particle burst now.
    Burst(BurstConfig),
    /// This log crossed the category's completion edge.
    GoalReached {
        kind: GoalKind,
        completed_in: Duration,
    },
}

/// Logs one action and returns the effects to dispatch.
pub fn log_action(
    state: &mut AppState,
    kind: GoalKind,
    now: Instant,
    rng: &mut impl Rng,
) -> Vec<RewardEvent> {
    let mut events = Vec::new();

    if state.session.start_if_needed(now) {
        events.push(RewardEvent::SessionStarted);
    }

    let outcome = state.goal_mut(kind).log();
    state.shake_until = Some(now + Duration::from_millis(SHAKE_DURATION_MS));

    let completed_in = if outcome.crossed_completion {
        let elapsed = state.session.elapsed_at(now);
        events.push(RewardEvent::PlayVictory);
        Some(elapsed)
    } else {
        // Cycle the shared palette cursor; completions never advance it
        let variant = state.sound_cursor % crate::sound::HIT_VARIANTS;
        state.sound_cursor = state.sound_cursor.wrapping_add(1);
        events.push(RewardEvent::PlayHit { variant });
        None
    };

    // A new popup replaces whatever is still showing and restarts the clock
    state.popup = Some(Popup {
        kind,
        message: motivational_message(rng),
        completed_in,
        expires_at: now + Duration::from_millis(POPUP_VISIBLE_MS),
    });

    events.push(RewardEvent::Burst(BurstConfig::for_log(kind)));

    if let Some(completed_in) = completed_in {
        state.pending_bursts.push(PendingBurst {
            config: BurstConfig::celebration(),
            fire_at: now + Duration::from_millis(CELEBRATION_DELAY_MS),
        });
        events.push(RewardEvent::GoalReached { kind, completed_in });
    }

    events
}

/// Silent correction: decrements the counter and nothing else. No sound, no
/// burst, no popup, no cursor movement.
pub fn undo_action(state: &mut AppState, kind: GoalKind) -> u32 {
    state.goal_mut(kind).undo()
}

/// Applies a presentation-supplied target edit with the coercion rule.
pub fn set_target(state: &mut AppState, kind: GoalKind, raw: &str) {
    state.goal_mut(kind).set_target_raw(raw);
}

/// Advances timed feedback: expires the popup and shake window, and drains
/// the celebration bursts whose deadlines passed. Superseded timers need no
/// explicit cancellation; the newest action simply owns the visible state.
pub fn tick(state: &mut AppState, now: Instant) -> Vec<BurstConfig> {
    if state.popup.map_or(false, |popup| now >= popup.expires_at) {
        state.popup = None;
    }
    if state.shake_until.map_or(false, |until| now >= until) {
        state.shake_until = None;
    }

    let mut due = Vec::new();
    state.pending_bursts.retain(|pending| {
        if now >= pending.fire_at {
            due.push(pending.config.clone());
            false
        } else {
            true
        }
    });
    due
}
