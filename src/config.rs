//! Synthesizer configuration — sample rate and fixed render length.
//!
//! Built once at startup and never mutated. Every buffer the DSP core
//! produces has exactly [`SynthesizerConfig::total_samples`] samples.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Deployed sample rate.
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44100;
/// Highest sample rate accepted.
pub const MAX_SAMPLE_RATE_HZ: u32 = 192_000;
/// Deployed render length (the maximum sound duration).
pub const DEFAULT_DURATION_SECONDS: f64 = 2.0;
/// Longest render length accepted. Bounds every buffer to
/// `sample_rate * MAX_DURATION_SECONDS` samples.
pub const MAX_DURATION_SECONDS: f64 = 2.0;

/// Process-wide synthesis parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesizerConfig {
    /// Samples per second.
    pub sample_rate_hz: u32,
    /// Length of every rendered buffer, in seconds.
    pub duration_seconds: f64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        SynthesizerConfig {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            duration_seconds: DEFAULT_DURATION_SECONDS,
        }
    }
}

impl SynthesizerConfig {
    pub fn new(sample_rate_hz: u32, duration_seconds: f64) -> Result<Self, ConfigError> {
        let config = SynthesizerConfig {
            sample_rate_hz,
            duration_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON, e.g. `{"sample_rate_hz": 48000, "duration_seconds": 1.5}`.
    /// Missing fields take the deployed defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        #[serde(default)]
        struct Partial {
            sample_rate_hz: u32,
            duration_seconds: f64,
        }

        impl Default for Partial {
            fn default() -> Self {
                Partial {
                    sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
                    duration_seconds: DEFAULT_DURATION_SECONDS,
                }
            }
        }

        let partial: Partial = serde_json::from_str(json).map_err(ConfigError::Malformed)?;
        Self::new(partial.sample_rate_hz, partial.duration_seconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.sample_rate_hz > MAX_SAMPLE_RATE_HZ {
            return Err(ConfigError::SampleRateTooHigh(self.sample_rate_hz));
        }
        if !self.duration_seconds.is_finite()
            || self.duration_seconds <= 0.0
            || self.duration_seconds > MAX_DURATION_SECONDS
        {
            return Err(ConfigError::InvalidDuration(self.duration_seconds));
        }
        Ok(())
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate_hz as f64
    }

    /// `round(sample_rate * duration)`.
    pub fn total_samples(&self) -> usize {
        (self.sample_rate() * self.duration_seconds).round() as usize
    }

    /// Convert a duration in seconds to a whole number of samples (rounded).
    pub fn seconds_to_samples(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate()).round().max(0.0) as usize
    }
}
