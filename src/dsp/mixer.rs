//! Mixer — sums oscillator buffers and applies a peak-triggered soft limiter.

/// Target peak after limiting, leaving 5% headroom below full scale.
pub const LIMITER_CEILING: f64 = 0.95;

/// A summing mixer that accumulates whole buffers, each starting at index 0.
#[derive(Debug, Clone, Default)]
pub struct Mixer {
    buffer: Vec<f64>,
    /// Number of sources mixed since the last `clear`. Diagnostic only.
    sources: usize,
}

/// What the limiter did to a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimiterReport {
    /// Absolute peak before limiting.
    pub peak: f64,
    /// Factor every sample was multiplied by (1.0 when untouched).
    pub gain: f64,
}

impl LimiterReport {
    pub fn engaged(&self) -> bool {
        self.gain != 1.0
    }
}

impl Mixer {
    pub fn new() -> Self {
        Mixer::default()
    }

    /// Prepare a buffer of `num_samples` filled with zeros.
    pub fn clear(&mut self, num_samples: usize) {
        self.buffer.clear();
        self.buffer.resize(num_samples, 0.0);
        self.sources = 0;
    }

    /// Add `source` into the mix from index 0. Samples beyond the mix length are dropped.
    pub fn add(&mut self, source: &[f64]) {
        for (acc, &s) in self.buffer.iter_mut().zip(source) {
            *acc += s;
        }
        self.sources += 1;
    }

    /// Number of sources added since the last `clear`.
    pub fn source_count(&self) -> usize {
        self.sources
    }

    /// Consume the accumulated mix, applying the limiter.
    pub fn finish(mut self) -> (Vec<f64>, LimiterReport) {
        let report = soft_limit(&mut self.buffer);
        (self.buffer, report)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Absolute peak of `samples` (0.0 for an empty slice).
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |m, &s| m.max(s.abs()))
}

/// Scale `samples` so the peak lands on [`LIMITER_CEILING`], but only when
/// the peak exceeds 1.0. Quieter mixes are left alone and never boosted.
pub fn soft_limit(samples: &mut [f64]) -> LimiterReport {
    let peak = peak(samples);
    if peak > 1.0 {
        let gain = LIMITER_CEILING / peak;
        for s in samples.iter_mut() {
            *s *= gain;
        }
        LimiterReport { peak, gain }
    } else {
        LimiterReport { peak, gain: 1.0 }
    }
}

/// Elementwise product over the shorter of the two buffers.
pub fn apply_gain_curve(wave: &[f64], curve: &[f64]) -> Vec<f64> {
    wave.iter().zip(curve).map(|(&w, &g)| w * g).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_buffer() {
        let mut m = Mixer::new();
        m.clear(128);
        let (out, report) = m.finish();
        assert_eq!(out.len(), 128);
        assert!(out.iter().all(|&s| s == 0.0));
        assert_eq!(report.peak, 0.0);
        assert!(!report.engaged());
    }

    #[test]
    fn accumulates_from_start() {
        let mut m = Mixer::new();
        m.clear(4);
        m.add(&[0.5, 0.25]);
        m.add(&[0.3, 0.0, 0.1]);
        assert_eq!(m.source_count(), 2);
        let (out, _) = m.finish();
        assert_relative_eq!(out[0], 0.8);
        assert_relative_eq!(out[1], 0.25);
        assert_relative_eq!(out[2], 0.1);
        assert_eq!(out[3], 0.0);
    }

    #[test]
    fn long_sources_are_truncated() {
        let mut m = Mixer::new();
        m.clear(2);
        m.add(&[0.1, 0.2, 0.9, 0.9]);
        let (out, _) = m.finish();
        assert_eq!(out, vec![0.1, 0.2]);
    }

    #[test]
    fn over_range_is_scaled_to_ceiling() {
        let mut samples = vec![2.0, -1.0, 0.5, -2.0];
        let report = soft_limit(&mut samples);
        assert_eq!(report.peak, 2.0);
        assert!(report.engaged());
        assert_relative_eq!(peak(&samples), 0.95);
        // Shape is preserved
        assert_relative_eq!(samples[1], -0.475);
        assert_relative_eq!(samples[2], 0.2375);
    }

    #[test]
    fn in_range_is_untouched() {
        let original = vec![0.3, -0.1, 0.2];
        let mut samples = original.clone();
        let report = soft_limit(&mut samples);
        assert_eq!(samples, original, "quiet mixes must not be boosted");
        assert_eq!(report.gain, 1.0);
    }

    #[test]
    fn exactly_full_scale_is_untouched() {
        let mut samples = vec![1.0, -1.0];
        let report = soft_limit(&mut samples);
        assert!(!report.engaged());
        assert_eq!(samples, vec![1.0, -1.0]);
    }

    #[test]
    fn gain_curve_uses_shorter_length() {
        let out = apply_gain_curve(&[1.0, 2.0, 3.0], &[0.5, 0.5]);
        assert_eq!(out, vec![0.5, 1.0]);
    }
}
