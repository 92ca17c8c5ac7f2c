//! Declarative sound cues.
//!
//! A cue is an immutable description of a short synthesized sound: a list of
//! tone segments, optionally layered with a white-noise burst for impact
//! texture. Cues carry no audio resources, so tests can assert against the
//! description without a device; `audio` interprets them.

/// Oscillator shape for one tone segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// One pitched segment of a cue. Times are seconds relative to cue start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSegment {
    pub wave: Waveform,
    pub freq: f32,
    pub start: f32,
    pub duration: f32,
    pub volume: f32,
}

/// A short burst of white noise layered under the tones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseBurst {
    pub start: f32,
    pub duration: f32,
    pub volume: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cue {
    pub tones: Vec<ToneSegment>,
    pub noise: Vec<NoiseBurst>,
}

impl Cue {
    /// End time of the latest segment, in seconds.
    pub fn total_duration(&self) -> f32 {
        let tone_end = self
            .tones
            .iter()
            .map(|t| t.start + t.duration)
            .fold(0.0f32, f32::max);
        let noise_end = self
            .noise
            .iter()
            .map(|n| n.start + n.duration)
            .fold(0.0f32, f32::max);
        tone_end.max(noise_end)
    }
}

fn tone(wave: Waveform, freq: f32, start: f32, duration: f32, volume: f32) -> ToneSegment {
    ToneSegment {
        wave,
        freq,
        start,
        duration,
        volume,
    }
}

/// Number of distinct hit cues in the cycling palette.
pub const HIT_VARIANTS: u32 = 10;

/// Returns one of the fixed ordered palette of hit cues, selected by
/// `variant` modulo the palette size. Each is a sub-200ms arcade-style blip.
pub fn hit_cue(variant: u32) -> Cue {
    use Waveform::*;
    match variant % HIT_VARIANTS {
        // Bright ring chime, quick decay
        0 => Cue {
            tones: vec![
                tone(Sine, 1760.0, 0.0, 0.08, 0.3),
                tone(Sine, 1320.0, 0.02, 0.06, 0.2),
            ],
            noise: vec![],
        },
        // Punch and low thump
        1 => Cue {
            tones: vec![
                tone(Sine, 80.0, 0.0, 0.08, 0.35),
                tone(Square, 120.0, 0.02, 0.05, 0.15),
            ],
            noise: vec![NoiseBurst {
                start: 0.0,
                duration: 0.06,
                volume: 0.25,
            }],
        },
        // Cheerful two-tone pickup
        2 => Cue {
            tones: vec![
                tone(Triangle, 880.0, 0.0, 0.1, 0.25),
                tone(Triangle, 1318.5, 0.08, 0.12, 0.2),
            ],
            noise: vec![],
        },
        // Coin: two-note bleep
        3 => Cue {
            tones: vec![
                tone(Square, 1318.5, 0.0, 0.06, 0.25),
                tone(Square, 2093.0, 0.06, 0.1, 0.2),
            ],
            noise: vec![],
        },
        // Short waka wobble
        4 => Cue {
            tones: vec![
                tone(Square, 440.0, 0.0, 0.05, 0.2),
                tone(Square, 550.0, 0.04, 0.05, 0.15),
            ],
            noise: vec![],
        },
        // Impact punch with tone tail
        5 => Cue {
            tones: vec![
                tone(Square, 150.0, 0.0, 0.07, 0.25),
                tone(Sine, 200.0, 0.03, 0.04, 0.15),
            ],
            noise: vec![NoiseBurst {
                start: 0.0,
                duration: 0.05,
                volume: 0.2,
            }],
        },
        // High sparkle
        6 => Cue {
            tones: vec![
                tone(Sine, 2093.0, 0.0, 0.06, 0.22),
                tone(Sine, 2637.0, 0.04, 0.08, 0.18),
            ],
            noise: vec![],
        },
        // Eight-bit pickup blip
        7 => Cue {
            tones: vec![
                tone(Square, 987.77, 0.0, 0.04, 0.28),
                tone(Square, 1318.5, 0.04, 0.06, 0.2),
            ],
            noise: vec![],
        },
        // Barrel thud
        8 => Cue {
            tones: vec![
                tone(Square, 200.0, 0.0, 0.1, 0.25),
                tone(Sine, 100.0, 0.06, 0.08, 0.2),
            ],
            noise: vec![],
        },
        // Quick line-clear drop
        _ => Cue {
            tones: vec![
                tone(Square, 523.25, 0.0, 0.03, 0.2),
                tone(Square, 392.0, 0.03, 0.05, 0.25),
            ],
            noise: vec![],
        },
    }
}

/// Ascending four-note fanfare played on a completion edge. Always the same
/// motif regardless of category, and deliberately longer than any hit cue.
pub fn victory_cue() -> Cue {
    let notes = [523.25, 659.25, 783.99, 1046.5];
    Cue {
        tones: notes
            .iter()
            .enumerate()
            .map(|(i, &freq)| tone(Waveform::Square, freq, i as f32 * 0.12, 0.35, 0.2))
            .collect(),
        noise: vec![],
    }
}
