//! ADSR envelope generator.
//!
//! Renders a whole gain curve up front, spanning the full configured
//! duration. Unlike a conventional ADSR, `sustain` is a hold *time*: the
//! held level is always [`SUSTAIN_LEVEL`].

use crate::config::SynthesizerConfig;
use crate::request::EnvelopeSpec;

/// Level held during the sustain phase, for every envelope.
pub const SUSTAIN_LEVEL: f64 = 0.7;

/// Attack is never shorter than this (avoids a click at note start).
pub const MIN_ATTACK_SECONDS: f64 = 0.01;

/// Buffers shorter than this get a flat envelope at [`SUSTAIN_LEVEL`].
pub const SHORT_BUFFER_SAMPLES: usize = 100;

/// Length of each envelope phase, in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseLengths {
    pub attack: usize,
    pub decay: usize,
    pub sustain: usize,
    pub release: usize,
}

impl PhaseLengths {
    pub fn from_spec(config: &SynthesizerConfig, spec: &EnvelopeSpec) -> Self {
        PhaseLengths {
            attack: config.seconds_to_samples(spec.attack.max(MIN_ATTACK_SECONDS)),
            decay: config.seconds_to_samples(spec.decay),
            sustain: config.seconds_to_samples(spec.sustain),
            release: config.seconds_to_samples(spec.release),
        }
    }

    /// Sum of all phases, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.attack
            .saturating_add(self.decay)
            .saturating_add(self.sustain)
            .saturating_add(self.release)
    }

    /// Scale all phases down proportionally when they overrun `total_samples`.
    ///
    /// Each phase is floored independently to at least one sample, so the
    /// result may fall a few samples short of `total_samples` (or, when the
    /// one-sample minimum kicks in, slightly over). The shortfall is left
    /// as trailing silence.
    pub fn fit_within(self, total_samples: usize) -> Self {
        // Summed in f64: huge phase times saturate the usize counts.
        let sum = self.attack as f64 + self.decay as f64 + self.sustain as f64 + self.release as f64;
        if sum <= total_samples as f64 {
            return self;
        }
        let scale = total_samples as f64 / sum;
        let shrink = |n: usize| ((n as f64 * scale).floor() as usize).max(1);
        PhaseLengths {
            attack: shrink(self.attack),
            decay: shrink(self.decay),
            sustain: shrink(self.sustain),
            release: shrink(self.release),
        }
    }
}

/// Render the envelope for `spec` over `config.total_samples()` samples.
pub fn generate_envelope(config: &SynthesizerConfig, spec: &EnvelopeSpec) -> Vec<f64> {
    let total_samples = config.total_samples();
    if total_samples < SHORT_BUFFER_SAMPLES {
        return vec![SUSTAIN_LEVEL; total_samples];
    }

    let phases = PhaseLengths::from_spec(config, spec).fit_within(total_samples);
    render_phases(&phases, total_samples)
}

/// Write the four phases back to back into a zeroed buffer.
///
/// Every write is clamped to the buffer; phases that start past the end
/// are dropped and release is truncated to whatever room is left.
fn render_phases(phases: &PhaseLengths, total_samples: usize) -> Vec<f64> {
    let mut envelope = vec![0.0; total_samples];
    let len = envelope.len();
    let mut cursor = 0;

    // Attack: 0 → 1
    if phases.attack > 0 && cursor < len {
        let end = cursor.saturating_add(phases.attack).min(len);
        linear_ramp(&mut envelope[cursor..end], 0.0, 1.0);
        cursor = end;
    } else if cursor < len {
        envelope[cursor] = 1.0;
    }

    // Decay: 1 → sustain level
    if phases.decay > 0 && cursor < len {
        let end = cursor.saturating_add(phases.decay).min(len);
        linear_ramp(&mut envelope[cursor..end], 1.0, SUSTAIN_LEVEL);
        cursor = end;
    } else if cursor < len {
        envelope[cursor] = SUSTAIN_LEVEL;
    }

    // Sustain: hold
    if phases.sustain > 0 && cursor < len {
        let end = cursor.saturating_add(phases.sustain).min(len);
        envelope[cursor..end].fill(SUSTAIN_LEVEL);
        cursor = end;
    }

    // Release: sustain level → 0
    if phases.release > 0 && cursor < len {
        let n = phases.release.min(len - cursor);
        linear_ramp(&mut envelope[cursor..cursor + n], SUSTAIN_LEVEL, 0.0);
    }

    envelope
}

/// Fill `out` with evenly spaced values from `start` to `end` inclusive.
/// A single-sample ramp holds `start`.
fn linear_ramp(out: &mut [f64], start: f64, end: f64) {
    let n = out.len();
    match n {
        0 => {}
        1 => out[0] = start,
        _ => {
            let step = (end - start) / (n - 1) as f64;
            for (i, s) in out.iter_mut().enumerate() {
                *s = start + step * i as f64;
            }
            out[n - 1] = end;
        }
    }
}
