pub mod config;
pub mod dsp;
pub mod error;
pub mod request;

use crate::config::SynthesizerConfig;
use crate::dsp::engine::Synthesizer;
use crate::error::{ConfigError, MixDeckError, RequestError};
use crate::request::SynthesisRequest;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the mixdeck-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Decode a synthesis request from JSON.
pub fn parse_request(json: &str) -> Result<SynthesisRequest, RequestError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a JSON request, render it, and encode the JSON response.
pub fn handle_request_json(synth: &Synthesizer, json: &str) -> Result<String, MixDeckError> {
    let request = parse_request(json)?;
    let response = synth.respond(&request);
    serde_json::to_string(&response).map_err(MixDeckError::Encode)
}

/// Build a synthesizer for a per-call config. Rejected before anything is allocated
/// when the config would exceed the sample-rate or duration caps.
fn synthesizer_for(sample_rate: u32, duration_seconds: f64) -> Result<Synthesizer, ConfigError> {
    Ok(Synthesizer::new(SynthesizerConfig::new(sample_rate, duration_seconds)?))
}

/// WASM-exposed: handle a JSON request with the default 44.1 kHz / 2 s config.
#[wasm_bindgen]
pub fn synthesize_response(request_json: &str) -> Result<String, JsValue> {
    handle_request_json(&Synthesizer::default(), request_json)
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a request object to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn synthesize_samples(
    request: JsValue,
    sample_rate: u32,
    duration_seconds: f64,
) -> Result<Vec<f32>, JsValue> {
    let request: SynthesisRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let synth = synthesizer_for(sample_rate, duration_seconds)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let samples = synth.synthesize(&request.oscillators);
    Ok(samples.iter().map(|&s| s as f32).collect())
}

/// WASM-exposed: render a request object to a 16-bit mono WAV byte array.
#[wasm_bindgen]
pub fn synthesize_wav(
    request: JsValue,
    sample_rate: u32,
    duration_seconds: f64,
) -> Result<Vec<u8>, JsValue> {
    let request: SynthesisRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let synth = synthesizer_for(sample_rate, duration_seconds)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let samples = synth.synthesize(&request.oscillators);
    Ok(dsp::renderer::render_wav(&samples, sample_rate))
}
