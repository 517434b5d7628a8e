//! Waveform generator — naive (non-bandlimited) periodic waveforms.
//!
//! Each waveform is evaluated directly from the time point, so a whole
//! buffer is rendered in one pass with no running phase.

use std::f64::consts::PI;

use crate::request::WaveShape;

/// Render `shape` at `frequency` Hz over `time_points`, scaled by `gain`.
///
/// `gain` is not clamped. [`WaveShape::Unknown`] renders silence.
pub fn generate_wave(time_points: &[f64], frequency: f64, shape: WaveShape, gain: f64) -> Vec<f64> {
    time_points
        .iter()
        .map(|&t| raw_sample(shape, frequency, t) * gain)
        .collect()
}

/// Unscaled sample of `shape` at time `t`.
fn raw_sample(shape: WaveShape, frequency: f64, t: f64) -> f64 {
    match shape {
        WaveShape::Sine => sine(frequency, t),
        WaveShape::Triangle => triangle(frequency, t),
        WaveShape::Sawtooth => sawtooth(frequency, t),
        WaveShape::Square => square(frequency, t),
        WaveShape::Unknown => 0.0,
    }
}

fn sine(frequency: f64, t: f64) -> f64 {
    (2.0 * PI * frequency * t).sin()
}

/// Triangle folded out of a sine through arcsine.
fn triangle(frequency: f64, t: f64) -> f64 {
    2.0 / PI * sine(frequency, t).asin()
}

/// Zero-centred ramp with period `1 / frequency`.
fn sawtooth(frequency: f64, t: f64) -> f64 {
    let x = frequency * t;
    2.0 * (x - (0.5 + x).floor())
}

/// Sign of the underlying sine. Exact zero crossings yield 0.
fn square(frequency: f64, t: f64) -> f64 {
    sign(sine(frequency, t))
}

/// Three-valued sign. Unlike `f64::signum`, zero maps to zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
