//! Time Base — sample index to time mapping.

use crate::config::SynthesizerConfig;

/// Evenly spaced time points `t_i = i / sample_rate` for `i` in `[0, total_samples)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBase {
    points: Vec<f64>,
}

impl TimeBase {
    pub fn new(config: &SynthesizerConfig) -> Self {
        let sample_rate = config.sample_rate();
        let points = (0..config.total_samples())
            .map(|i| i as f64 / sample_rate)
            .collect();
        TimeBase { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_range() {
        let config = SynthesizerConfig::new(100, 1.0).unwrap();
        let tb = TimeBase::new(&config);
        assert_eq!(tb.len(), 100);
        assert_eq!(tb.points()[0], 0.0);
        assert!(
            tb.points()[99] < config.duration_seconds,
            "last point must stay below the duration"
        );
        assert!((tb.points()[99] - 0.99).abs() < 1e-12);
    }

    #[test]
    fn evenly_spaced() {
        let tb = TimeBase::new(&SynthesizerConfig::default());
        let step = 1.0 / 44100.0;
        for w in tb.points().windows(2).take(1000) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }
}
