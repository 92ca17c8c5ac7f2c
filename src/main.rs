mod app_state;
mod audio;
mod build_info;
mod burst;
mod constants;
mod messages;
mod reward_logic;
mod session;
mod sound;
mod tracker;
mod ui;

use app_state::AppState;
use audio::AudioPlayer;
use constants::*;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use reward_logic::RewardEvent;
use sound::{hit_cue, victory_cue};
use std::io;
use std::time::{Duration, Instant};
use tracker::GoalKind;
use ui::config_modal::ConfigScreen;
use ui::effects::ParticleSystem;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "momentum {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Momentum - Terminal Habit Tracker\n");
                println!("Usage: momentum\n");
                println!("Keys:");
                println!("  p / d      log a post / a DM");
                println!("  P / D      undo the last post / DM");
                println!("  s          edit daily targets");
                println!("  q          quit");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'momentum --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Audio degrades to silence when no output device exists
    let audio = AudioPlayer::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &audio);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    audio: &AudioPlayer,
) -> io::Result<()> {
    let mut state = AppState::new();
    let mut particles = ParticleSystem::new();
    let mut config: Option<ConfigScreen> = None;
    let mut rng = rand::thread_rng();

    let mut last_frame = Instant::now();
    let mut last_session_tick = Instant::now();

    loop {
        let now = Instant::now();
        let frame_area = terminal.size()?;

        // Session clock refreshes on a one-second tick
        if last_session_tick.elapsed() >= Duration::from_millis(SESSION_TICK_MS) {
            state.session.refresh(now);
            last_session_tick = now;
        }

        // Expire timed feedback and fire any due celebration bursts
        for due in reward_logic::tick(&mut state, now) {
            particles.spawn(&due, frame_area, &mut rng);
        }

        // Advance particle physics
        let delta = now.saturating_duration_since(last_frame).as_secs_f32();
        last_frame = now;
        particles.update(delta);

        terminal.draw(|frame| {
            ui::draw_ui(
                frame,
                &state,
                &particles,
                config.as_ref(),
                !audio.is_available(),
                now,
            );
        })?;

        // Poll for input (50ms non-blocking)
        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        // The config overlay captures all input while open
        if let Some(mut screen) = config.take() {
            match key_event.code {
                // Enter applies both edits, Esc discards them
                KeyCode::Enter => screen.apply(&mut state),
                KeyCode::Esc => {}
                other => {
                    match other {
                        KeyCode::Char(c) => screen.handle_char(c),
                        KeyCode::Backspace => screen.handle_backspace(),
                        KeyCode::Tab => screen.toggle_field(),
                        _ => {}
                    }
                    config = Some(screen);
                }
            }
            continue;
        }

        match key_event.code {
            KeyCode::Char('p') => {
                dispatch(
                    reward_logic::log_action(&mut state, GoalKind::Posts, now, &mut rng),
                    audio,
                    &mut particles,
                    frame_area,
                    &mut rng,
                );
            }
            KeyCode::Char('d') => {
                dispatch(
                    reward_logic::log_action(&mut state, GoalKind::Dms, now, &mut rng),
                    audio,
                    &mut particles,
                    frame_area,
                    &mut rng,
                );
            }
            KeyCode::Char('P') => {
                reward_logic::undo_action(&mut state, GoalKind::Posts);
            }
            KeyCode::Char('D') => {
                reward_logic::undo_action(&mut state, GoalKind::Dms);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                config = Some(ConfigScreen::open(&state));
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => break,
            _ => {}
        }
    }

    Ok(())
}

/// Executes one log action's effect list. State is already updated; these
/// are the fire-and-forget collaborators.
fn dispatch(
    events: Vec<RewardEvent>,
    audio: &AudioPlayer,
    particles: &mut ParticleSystem,
    area: ratatui::layout::Rect,
    rng: &mut impl rand::Rng,
) {
    for event in events {
        match event {
            RewardEvent::PlayHit { variant } => audio.play(&hit_cue(variant)),
            RewardEvent::PlayVictory => audio.play(&victory_cue()),
            RewardEvent::Burst(config) => particles.spawn(&config, area, rng),
            // Session start and goal snapshots are already reflected in state
            RewardEvent::SessionStarted | RewardEvent::GoalReached { .. } => {}
        }
    }
}
