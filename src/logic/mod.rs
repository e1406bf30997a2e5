//! Logic Module - Pipeline Stages & Engines
//!
//! Everything between raw input and recorded defense lives here.
//!
//! ## Architecture
//! - `features/` - Feature extraction (WAV decode, audio DSP, video probe)
//! - `detection/` - Scoring, classification, and the detection agent
//! - `scenario` - Named simulation presets
//! - `policy/` - Decision engine
//! - `response/` - Defense execution
//! - `telemetry/` - Defense log and threat history
//! - `pipeline` - Stage orchestration
//! - `state` - Caller-owned application state

// Core modules
pub mod config;
pub mod scenario;
pub mod pipeline;
pub mod state;

// Pipeline stages
pub mod features;
pub mod detection;
pub mod policy;
pub mod response;
pub mod telemetry;
