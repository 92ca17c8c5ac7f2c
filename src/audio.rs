//! Cue playback through rodio.
//!
//! Each play call renders the cue into a fresh mono sample buffer and hands
//! it to the output device, so calls are independent and can overlap freely.
//! When no output device exists (headless terminals, CI) the player degrades
//! to a silent no-op; playback never surfaces an error to the caller.

use crate::constants::SAMPLE_RATE;
use crate::sound::{Cue, Waveform};
use rand::Rng;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle};
use std::f32::consts::TAU;

// The envelope ramps each segment down to this gain, matching an
// exponential-decay release.
const ENVELOPE_FLOOR: f32 = 0.001;

pub struct AudioPlayer {
    // The stream must stay alive for the handle to produce sound
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer {
    /// Acquires the default output device, or a silent player if none exists.
    pub fn new() -> Self {
        Self {
            output: OutputStream::try_default().ok(),
        }
    }

    /// False when no output device could be acquired and cues are dropped.
    pub fn is_available(&self) -> bool {
        self.output.is_some()
    }

    /// Renders and plays a cue. Best effort: device errors are swallowed and
    /// never affect tracker state.
    pub fn play(&self, cue: &Cue) {
        let Some((_, handle)) = &self.output else {
            return;
        };
        let samples = render_cue(cue, &mut rand::thread_rng());
        if samples.is_empty() {
            return;
        }
        let source = SamplesBuffer::new(1, SAMPLE_RATE, samples);
        let _ = handle.play_raw(source);
    }
}

/// Renders a cue to mono f32 samples at `SAMPLE_RATE`. Pure apart from the
/// injected noise source, so tests can assert on the output buffer.
pub fn render_cue(cue: &Cue, rng: &mut impl Rng) -> Vec<f32> {
    let total = cue.total_duration();
    if total <= 0.0 {
        return Vec::new();
    }
    let len = (total * SAMPLE_RATE as f32).ceil() as usize;
    let mut samples = vec![0.0f32; len];

    for seg in &cue.tones {
        let offset = (seg.start * SAMPLE_RATE as f32) as usize;
        let count = (seg.duration * SAMPLE_RATE as f32) as usize;
        for i in 0..count {
            let Some(slot) = samples.get_mut(offset + i) else {
                break;
            };
            let t = i as f32 / SAMPLE_RATE as f32;
            let phase = (t * seg.freq).fract();
            let raw = match seg.wave {
                Waveform::Sine => (TAU * phase).sin(),
                Waveform::Square => {
                    if phase < 0.5 {
                        1.0
                    } else {
                        -1.0
                    }
                }
                Waveform::Triangle => 4.0 * (phase - (phase + 0.5).floor()).abs() - 1.0,
            };
            *slot += raw * decay_gain(seg.volume, t, seg.duration);
        }
    }

    for burst in &cue.noise {
        let offset = (burst.start * SAMPLE_RATE as f32) as usize;
        let count = (burst.duration * SAMPLE_RATE as f32) as usize;
        for i in 0..count {
            let Some(slot) = samples.get_mut(offset + i) else {
                break;
            };
            let t = i as f32 / SAMPLE_RATE as f32;
            let raw = rng.gen_range(-0.5..0.5f32);
            *slot += raw * decay_gain(burst.volume, t, burst.duration);
        }
    }

    for sample in &mut samples {
        *sample = sample.clamp(-1.0, 1.0);
    }
    samples
}

/// Exponential decay from `volume` to the envelope floor over `duration`.
fn decay_gain(volume: f32, t: f32, duration: f32) -> f32 {
    if duration <= 0.0 || volume <= ENVELOPE_FLOOR {
        return 0.0;
    }
    volume * (ENVELOPE_FLOOR / volume).powf(t / duration)
}
