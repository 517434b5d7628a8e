//! Wire types for the synthesis boundary.
//!
//! These map directly to the JSON the mixing-deck page posts:
//!
//! ```json
//! { "oscillators": [
//!     { "frequency": 440, "wave_type": "sine", "volume": 0.8, "enabled": true,
//!       "adsr": { "attack": 0.1, "decay": 0.1, "sustain": 1.0, "release": 0.1 } }
//! ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SynthesizerConfig;

// ── Wave Shape ──────────────────────────────────────────────

/// Oscillator waveform. Unrecognized names decode to [`WaveShape::Unknown`],
/// which renders silence rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WaveShape {
    Sine,
    Triangle,
    Sawtooth,
    Square,
    Unknown,
}

impl WaveShape {
    /// Parse a `wave_type` string. Only the four exact wire names are accepted.
    pub fn parse(s: &str) -> WaveShape {
        match s {
            "sine" => WaveShape::Sine,
            "triangle" => WaveShape::Triangle,
            "saw" => WaveShape::Sawtooth,
            "square" => WaveShape::Square,
            other => {
                log::debug!("unrecognized wave_type {other:?}, rendering silence");
                WaveShape::Unknown
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaveShape::Sine => "sine",
            WaveShape::Triangle => "triangle",
            WaveShape::Sawtooth => "saw",
            WaveShape::Square => "square",
            WaveShape::Unknown => "unknown",
        }
    }
}

impl From<String> for WaveShape {
    fn from(s: String) -> Self {
        WaveShape::parse(&s)
    }
}

impl From<WaveShape> for String {
    fn from(shape: WaveShape) -> Self {
        shape.as_str().to_string()
    }
}

// ── Oscillator Specs ────────────────────────────────────────

/// ADSR timings, all in seconds.
///
/// `sustain` is how long the envelope holds, not the level it holds at;
/// the held level is always [`crate::dsp::envelope::SUSTAIN_LEVEL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSpec {
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
}

/// One oscillator in a synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSpec {
    /// Frequency in Hz. Not range-checked.
    pub frequency: f64,
    pub wave_type: WaveShape,
    /// Gain applied to the raw waveform. May exceed 1.0.
    #[serde(default = "default_volume")]
    pub volume: f64,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adsr: Option<EnvelopeSpec>,
}

fn default_volume() -> f64 {
    1.0
}

impl OscillatorSpec {
    /// An enabled oscillator without an envelope.
    pub fn new(frequency: f64, wave_type: WaveShape, volume: f64) -> Self {
        OscillatorSpec {
            frequency,
            wave_type,
            volume,
            enabled: true,
            adsr: None,
        }
    }

    pub fn with_envelope(mut self, adsr: EnvelopeSpec) -> Self {
        self.adsr = Some(adsr);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A synthesis request: an ordered list of oscillators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    #[serde(default)]
    pub oscillators: Vec<OscillatorSpec>,
    /// Ask for the rendered buffer to be embedded in the response as WAV.
    #[serde(default)]
    pub include_audio: bool,
}

// ── Response ────────────────────────────────────────────────

/// Render timing reported back to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingInfo {
    pub total_duration_seconds: f64,
    pub total_duration_milliseconds: f64,
    pub sample_rate_hz: u32,
}

/// Rendered audio embedded in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioPayload {
    /// Container format, currently always `"wav"`.
    pub format: String,
    /// Byte encoding of `data`, currently always `"base64"`.
    pub encoding: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResponse {
    pub success: bool,
    pub mode: String,
    pub duration: f64,
    pub timing_info: TimingInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioPayload>,
}

impl SynthesisResponse {
    /// Metadata-only response for a completed render.
    pub fn standard(config: &SynthesizerConfig) -> Self {
        SynthesisResponse {
            success: true,
            mode: "standard".to_string(),
            duration: config.duration_seconds,
            timing_info: TimingInfo {
                total_duration_seconds: config.duration_seconds,
                total_duration_milliseconds: config.duration_seconds * 1000.0,
                sample_rate_hz: config.sample_rate_hz,
            },
            audio: None,
        }
    }

    pub fn with_audio(mut self, audio: AudioPayload) -> Self {
        self.audio = Some(audio);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_wave_types() {
        assert_eq!(WaveShape::parse("sine"), WaveShape::Sine);
        assert_eq!(WaveShape::parse("triangle"), WaveShape::Triangle);
        assert_eq!(WaveShape::parse("saw"), WaveShape::Sawtooth);
        assert_eq!(WaveShape::parse("square"), WaveShape::Square);
    }

    #[test]
    fn other_wave_types_are_unknown() {
        for name in ["sawtooth", "Sine", "", "noise", "unknown"] {
            assert_eq!(WaveShape::parse(name), WaveShape::Unknown, "{name:?}");
        }
    }

    #[test]
    fn decodes_page_request() {
        let json = r#"{
            "oscillators": [
                { "frequency": 440, "wave_type": "sine", "volume": 0.8, "enabled": true,
                  "adsr": { "attack": 0.1, "decay": 0.1, "sustain": 1.0, "release": 0.1 } },
                { "frequency": 220.5, "wave_type": "pulse", "volume": 1.5, "enabled": false }
            ]
        }"#;
        let req: SynthesisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.oscillators.len(), 2);
        assert!(!req.include_audio);

        let first = &req.oscillators[0];
        assert_eq!(first.wave_type, WaveShape::Sine);
        assert_eq!(
            first.adsr,
            Some(EnvelopeSpec {
                attack: 0.1,
                decay: 0.1,
                sustain: 1.0,
                release: 0.1
            })
        );

        let second = &req.oscillators[1];
        assert_eq!(second.wave_type, WaveShape::Unknown);
        assert!(!second.enabled);
        assert!(second.adsr.is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let req: SynthesisRequest = serde_json::from_str("{}").unwrap();
        assert!(req.oscillators.is_empty());

        let osc: OscillatorSpec =
            serde_json::from_str(r#"{"frequency": 100, "wave_type": "square", "enabled": true}"#)
                .unwrap();
        assert_eq!(osc.volume, 1.0);
    }

    #[test]
    fn missing_enabled_is_rejected() {
        let result =
            serde_json::from_str::<OscillatorSpec>(r#"{"frequency": 100, "wave_type": "sine"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn standard_response_shape() {
        let resp = SynthesisResponse::standard(&SynthesizerConfig::default());
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["mode"], "standard");
        assert_eq!(value["duration"], 2.0);
        assert_eq!(value["timing_info"]["total_duration_milliseconds"], 2000.0);
        assert_eq!(value["timing_info"]["sample_rate_hz"], 44100);
        assert!(value.get("audio").is_none(), "audio should be omitted");
    }

    #[test]
    fn unknown_shape_serializes_as_unknown() {
        let osc = OscillatorSpec::new(440.0, WaveShape::Unknown, 1.0);
        let value = serde_json::to_value(&osc).unwrap();
        assert_eq!(value["wave_type"], "unknown");
        assert!(value.get("adsr").is_none());
    }
}
