//! Particle burst parameters.
//!
//! The core only describes bursts; `ui::effects` owns the particles that
//! realize them. Bursts are fire-and-forget: nothing in the state machine
//! waits on one.

use crate::constants::*;
use crate::tracker::GoalKind;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct BurstConfig {
    pub particle_count: u16,
    pub spread_degrees: f32,
    /// Vertical origin as a fraction of the frame height, top = 0.0.
    pub origin_y: f32,
    pub colors: Vec<Color>,
    /// Size/energy multiplier applied to particle speed and lifetime.
    pub scalar: f32,
}

impl BurstConfig {
    /// The burst fired on every log, colored for the category.
    pub fn for_log(kind: GoalKind) -> Self {
        Self {
            particle_count: LOG_BURST_PARTICLES,
            spread_degrees: LOG_BURST_SPREAD_DEGREES,
            origin_y: 0.6,
            colors: kind.burst_colors().to_vec(),
            scalar: LOG_BURST_SCALAR,
        }
    }

    /// The larger gold burst fired shortly after a completion edge.
    pub fn celebration() -> Self {
        Self {
            particle_count: CELEBRATION_BURST_PARTICLES,
            spread_degrees: CELEBRATION_BURST_SPREAD_DEGREES,
            origin_y: 0.5,
            colors: vec![
                Color::Rgb(255, 215, 0),
                Color::Rgb(255, 165, 0),
                Color::Rgb(255, 69, 0),
            ],
            scalar: CELEBRATION_BURST_SCALAR,
        }
    }
}
