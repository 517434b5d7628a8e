//! DSP core — pure Rust waveform, envelope, and mixing code.
//!
//! Every buffer is rendered whole, over the fixed length set by the
//! [`crate::config::SynthesizerConfig`]. Nothing here performs I/O or keeps
//! state between renders.

pub mod engine;
pub mod envelope;
pub mod mixer;
pub mod oscillator;
pub mod renderer;
pub mod timebase;
