//! Integration test: the full reward flow
//!
//! Drives the orchestrator the way the main loop does: log/undo actions at
//! controlled instants, tick the timed feedback, and assert on the produced
//! effect sequences and state.

use momentum::constants::{CELEBRATION_DELAY_MS, POPUP_VISIBLE_MS};
use momentum::reward_logic::{log_action, set_target, tick, undo_action, RewardEvent};
use momentum::sound::HIT_VARIANTS;
use momentum::{AppState, GoalKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(1337)
}

/// Logs `count` actions in one category, collecting every emitted event.
fn log_many(
    state: &mut AppState,
    kind: GoalKind,
    count: u32,
    start: Instant,
    rng: &mut ChaCha8Rng,
) -> Vec<RewardEvent> {
    let mut events = Vec::new();
    for i in 0..count {
        let at = start + Duration::from_secs(i as u64);
        events.extend(log_action(state, kind, at, rng));
    }
    events
}

fn hit_variants(events: &[RewardEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            RewardEvent::PlayHit { variant } => Some(*variant),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Counter invariants
// =============================================================================

#[test]
fn test_current_equals_net_logs_minus_undos_floored() {
    let mut state = AppState::new();
    let now = Instant::now();
    let mut r = rng();

    log_many(&mut state, GoalKind::Dms, 3, now, &mut r);
    undo_action(&mut state, GoalKind::Dms);
    undo_action(&mut state, GoalKind::Dms);
    undo_action(&mut state, GoalKind::Dms);
    undo_action(&mut state, GoalKind::Dms);
    assert_eq!(state.dms.current, 0);

    log_many(&mut state, GoalKind::Dms, 2, now, &mut r);
    assert_eq!(state.dms.current, 2);
}

#[test]
fn test_categories_do_not_interfere() {
    let mut state = AppState::new();
    let now = Instant::now();
    let mut r = rng();
    set_target(&mut state, GoalKind::Dms, "20");

    // Complete posts (target 5) while dms stays untouched
    let events = log_many(&mut state, GoalKind::Posts, 5, now, &mut r);
    assert!(events.iter().any(|e| matches!(
        e,
        RewardEvent::GoalReached {
            kind: GoalKind::Posts,
            ..
        }
    )));
    assert!(state.posts.is_complete());
    assert_eq!(state.dms.current, 0);
    assert!(!state.dms.is_complete());
}

// =============================================================================
// The target=5 completion scenario
// =============================================================================

#[test]
fn test_fifth_log_completes_with_snapshot_and_celebration() {
    let mut state = AppState::new();
    let t0 = Instant::now();
    let mut r = rng();

    let warmup = log_many(&mut state, GoalKind::Posts, 4, t0, &mut r);
    assert_eq!(hit_variants(&warmup), vec![0, 1, 2, 3]);

    let edge = t0 + Duration::from_secs(150);
    let events = log_action(&mut state, GoalKind::Posts, edge, &mut r);

    assert_eq!(state.posts.current, 5);
    assert_eq!(state.posts.current, state.posts.target);
    assert!(events.iter().any(|e| matches!(e, RewardEvent::PlayVictory)));
    assert!(hit_variants(&events).is_empty());

    let snapshot = events
        .iter()
        .find_map(|e| match e {
            RewardEvent::GoalReached { completed_in, .. } => Some(*completed_in),
            _ => None,
        })
        .expect("completion snapshot");
    assert_eq!(snapshot.as_secs(), 150);

    // Immediate burst fired, celebration still pending
    let immediate: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, RewardEvent::Burst(_)))
        .collect();
    assert_eq!(immediate.len(), 1);
    assert_eq!(state.pending_bursts.len(), 1);

    // The celebration fires after its fixed delay, larger than the log burst
    let due = tick(
        &mut state,
        edge + Duration::from_millis(CELEBRATION_DELAY_MS),
    );
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].particle_count, 400);
}

// =============================================================================
// Sound cycle
// =============================================================================

#[test]
fn test_cursor_cycles_across_categories_and_skips_completions() {
    let mut state = AppState::new();
    let now = Instant::now();
    let mut r = rng();
    set_target(&mut state, GoalKind::Posts, "2");

    let mut events = Vec::new();
    events.extend(log_action(&mut state, GoalKind::Posts, now, &mut r)); // hit 0
    events.extend(log_action(&mut state, GoalKind::Dms, now, &mut r)); // hit 1
    events.extend(log_action(&mut state, GoalKind::Posts, now, &mut r)); // victory
    events.extend(log_action(&mut state, GoalKind::Dms, now, &mut r)); // hit 2

    assert_eq!(hit_variants(&events), vec![0, 1, 2]);
    assert_eq!(state.sound_cursor, 3);
}

#[test]
fn test_cursor_wraps_around_palette() {
    let mut state = AppState::new();
    let now = Instant::now();
    let mut r = rng();
    // Keep the target out of reach so every log is a plain hit
    set_target(&mut state, GoalKind::Dms, "1000");

    let events = log_many(&mut state, GoalKind::Dms, HIT_VARIANTS + 2, now, &mut r);
    let variants = hit_variants(&events);
    assert_eq!(variants.len() as u32, HIT_VARIANTS + 2);
    assert_eq!(variants[0], 0);
    assert_eq!(variants[HIT_VARIANTS as usize], 0);
    assert_eq!(variants[HIT_VARIANTS as usize + 1], 1);
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[test]
fn test_session_starts_on_first_log_only() {
    let mut state = AppState::new();
    let t0 = Instant::now();
    let mut r = rng();
    assert!(!state.session.is_active());

    let first = log_action(&mut state, GoalKind::Dms, t0, &mut r);
    assert_eq!(first[0], RewardEvent::SessionStarted);

    // First log in the other category must not reset the clock
    let second = log_action(&mut state, GoalKind::Posts, t0 + Duration::from_secs(40), &mut r);
    assert!(!second.contains(&RewardEvent::SessionStarted));
    assert_eq!(
        state.session.elapsed_at(t0 + Duration::from_secs(40)).as_secs(),
        40
    );
}

#[test]
fn test_elapsed_grows_monotonically_across_ticks() {
    let mut state = AppState::new();
    let t0 = Instant::now();
    log_action(&mut state, GoalKind::Posts, t0, &mut rng());

    let mut last = Duration::ZERO;
    for s in 1..=5u64 {
        state.session.refresh(t0 + Duration::from_secs(s));
        assert!(state.session.elapsed() >= last);
        last = state.session.elapsed();
    }
    assert_eq!(last.as_secs(), 5);
}

// =============================================================================
// Popup lifecycle
// =============================================================================

#[test]
fn test_popup_clears_after_settle_and_is_replaced_by_new_logs() {
    let mut state = AppState::new();
    let t0 = Instant::now();
    let mut r = rng();

    log_action(&mut state, GoalKind::Posts, t0, &mut r);
    assert!(state.popup.is_some());

    // A new log halfway through replaces the popup and restarts its clock
    let t1 = t0 + Duration::from_millis(POPUP_VISIBLE_MS / 2);
    log_action(&mut state, GoalKind::Dms, t1, &mut r);
    tick(&mut state, t0 + Duration::from_millis(POPUP_VISIBLE_MS));
    let popup = state.popup.expect("replacement popup still visible");
    assert_eq!(popup.kind, GoalKind::Dms);

    tick(&mut state, t1 + Duration::from_millis(POPUP_VISIBLE_MS));
    assert!(state.popup.is_none());
}

#[test]
fn test_completion_snapshot_dies_with_its_popup() {
    let mut state = AppState::new();
    let t0 = Instant::now();
    let mut r = rng();
    set_target(&mut state, GoalKind::Posts, "1");

    log_action(&mut state, GoalKind::Posts, t0, &mut r);
    assert!(state.popup.unwrap().completed_in.is_some());

    tick(&mut state, t0 + Duration::from_millis(POPUP_VISIBLE_MS));
    assert!(state.popup.is_none());

    // The next plain log shows a motivational popup, not a stale snapshot
    log_action(&mut state, GoalKind::Dms, t0 + Duration::from_secs(2), &mut r);
    assert!(state.popup.unwrap().completed_in.is_none());
}
