//! Confetti-style particle bursts rendered into the terminal buffer.
//!
//! Keeps a retained list of live particles, updated with a per-frame delta
//! and culled when their lifetime runs out. Rendering writes glyphs straight
//! into the frame buffer on top of whatever the cards drew.

use crate::burst::BurstConfig;
use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const GLYPHS: [char; 6] = ['•', '*', '✦', '·', '+', 'o'];
const GRAVITY_CELLS_PER_SEC2: f32 = 14.0;
// Hard cap so a burst storm cannot grow the list unbounded
const MAX_PARTICLES: usize = 4000;

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    age: f32,
    lifetime: f32,
    color: Color,
    glyph: char,
}

impl Particle {
    fn is_alive(&self) -> bool {
        self.age < self.lifetime
    }
}

#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawns one burst. The cone opens upward from the configured origin,
    /// with spread and energy taken from the config.
    pub fn spawn(&mut self, config: &BurstConfig, area: Rect, rng: &mut impl Rng) {
        if config.colors.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }
        let origin_x = area.x as f32 + area.width as f32 / 2.0;
        let origin_y = area.y as f32 + area.height as f32 * config.origin_y;
        let half_spread = config.spread_degrees.to_radians() / 2.0;

        for _ in 0..config.particle_count {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            // Straight up is -PI/2 in buffer coordinates
            let angle = -std::f32::consts::FRAC_PI_2 + rng.gen_range(-half_spread..=half_spread);
            let speed = rng.gen_range(6.0..18.0) * config.scalar;
            let color = config.colors[rng.gen_range(0..config.colors.len())];
            self.particles.push(Particle {
                x: origin_x,
                y: origin_y,
                // Terminal cells are roughly twice as tall as wide
                vx: angle.cos() * speed * 2.0,
                vy: angle.sin() * speed,
                age: 0.0,
                lifetime: rng.gen_range(0.5..1.1) * config.scalar,
                color,
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            });
        }
    }

    /// Advances physics and drops expired particles.
    pub fn update(&mut self, delta: f32) {
        for p in &mut self.particles {
            p.age += delta;
            p.x += p.vx * delta;
            p.vy += GRAVITY_CELLS_PER_SEC2 * delta;
            p.y += p.vy * delta;
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Draws live particles into the buffer, clipped to the area.
    pub fn draw(&self, buf: &mut Buffer, area: Rect) {
        for p in &self.particles {
            if p.x < area.x as f32 || p.y < area.y as f32 {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if x >= area.x + area.width || y >= area.y + area.height {
                continue;
            }
            buf.get_mut(x, y).set_char(p.glyph).set_fg(p.color);
        }
    }
}

/// Render adapter so the system can be drawn like any other widget.
pub struct ParticleOverlay<'a>(pub &'a ParticleSystem);

impl Widget for ParticleOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.0.draw(buf, area);
    }
}
