//! Synthesizer — renders a list of oscillator specs to one limited buffer.
//!
//! The synthesizer owns an immutable [`SynthesizerConfig`] and the time base
//! derived from it. Rendering takes `&self` and keeps no state between
//! calls, so a single instance can be shared across threads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::config::SynthesizerConfig;
use crate::request::{
    AudioPayload, EnvelopeSpec, OscillatorSpec, SynthesisRequest, SynthesisResponse, WaveShape,
};

use super::envelope;
use super::mixer::{Mixer, apply_gain_curve};
use super::oscillator;
use super::renderer;
use super::timebase::TimeBase;

/// The synthesis engine.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    config: SynthesizerConfig,
    time_base: TimeBase,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Synthesizer::new(SynthesizerConfig::default())
    }
}

impl Synthesizer {
    pub fn new(config: SynthesizerConfig) -> Self {
        let time_base = TimeBase::new(&config);
        Synthesizer { config, time_base }
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Number of samples in every buffer this synthesizer produces.
    pub fn total_samples(&self) -> usize {
        self.time_base.len()
    }

    /// Render one raw waveform over the full duration.
    pub fn generate_wave(&self, frequency: f64, shape: WaveShape, gain: f64) -> Vec<f64> {
        oscillator::generate_wave(self.time_base.points(), frequency, shape, gain)
    }

    /// Render one ADSR gain curve over the full duration.
    pub fn generate_envelope(&self, spec: &EnvelopeSpec) -> Vec<f64> {
        envelope::generate_envelope(&self.config, spec)
    }

    /// Mix every enabled oscillator and soft-limit the result.
    ///
    /// Disabled oscillators are skipped. Each enabled oscillator is shaped
    /// by its envelope when it has one and added from the first sample.
    pub fn synthesize(&self, oscillators: &[OscillatorSpec]) -> Vec<f64> {
        let mut mixer = Mixer::new();
        mixer.clear(self.total_samples());

        for osc in oscillators.iter().filter(|o| o.enabled) {
            let wave = self.generate_wave(osc.frequency, osc.wave_type, osc.volume);
            match &osc.adsr {
                Some(adsr) => {
                    let curve = self.generate_envelope(adsr);
                    mixer.add(&apply_gain_curve(&wave, &curve));
                }
                None => mixer.add(&wave),
            }
        }

        let active = mixer.source_count();
        let (output, report) = mixer.finish();
        log::debug!(
            "mixed {active} of {} oscillators, peak {:.4}",
            oscillators.len(),
            report.peak
        );
        if report.engaged() {
            log::debug!("limiter engaged, gain {:.4}", report.gain);
        }
        output
    }

    /// Serve a request: render it and build the response.
    ///
    /// The response carries timing metadata only, unless the request sets
    /// `include_audio`, in which case the buffer is attached as base64 WAV.
    pub fn respond(&self, request: &SynthesisRequest) -> SynthesisResponse {
        let samples = self.synthesize(&request.oscillators);
        let response = SynthesisResponse::standard(&self.config);
        if !request.include_audio {
            return response;
        }

        let wav = renderer::render_wav(&samples, self.config.sample_rate_hz);
        response.with_audio(AudioPayload {
            format: "wav".to_string(),
            encoding: "base64".to_string(),
            data: STANDARD.encode(wav),
        })
    }
}
