// Event loop timing constants
pub const POLL_INTERVAL_MS: u64 = 50;
pub const SESSION_TICK_MS: u64 = 1000;

// Default daily targets
pub const DEFAULT_POSTS_TARGET: u32 = 5;
pub const DEFAULT_DMS_TARGET: u32 = 20;

// Feedback timing constants
pub const SHAKE_DURATION_MS: u64 = 300;
pub const CELEBRATION_DELAY_MS: u64 = 200;
// Popup lifetime: exit animation plus a settle delay before it clears
pub const POPUP_VISIBLE_MS: u64 = 1300;

// Particle burst parameters
pub const LOG_BURST_PARTICLES: u16 = 150;
pub const LOG_BURST_SPREAD_DEGREES: f32 = 70.0;
pub const LOG_BURST_SCALAR: f32 = 1.2;
pub const CELEBRATION_BURST_PARTICLES: u16 = 400;
pub const CELEBRATION_BURST_SPREAD_DEGREES: f32 = 160.0;
pub const CELEBRATION_BURST_SCALAR: f32 = 2.0;

// Audio synthesis constants
pub const SAMPLE_RATE: u32 = 44_100;
