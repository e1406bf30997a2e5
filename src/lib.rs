//! SentinelAI Deepfake Defense Core
//!
//! Agentic defense pipeline against deepfake-driven intrusion
//! attempts. Media samples (or named simulation scenarios) flow
//! through detection, decision, and defense stages, and every run
//! lands exactly one entry in the audit log.
//!
//! ## Quick start
//! ```ignore
//! use sentinel_core::{api, AppState, PipelineConfig};
//!
//! let state = AppState::new(PipelineConfig::default());
//! let report = api::run_scenario(&state, "deepfake attack", "audio", "10.0.0.1", None).await?;
//! assert!(report.outcome.honeypot);
//! ```

pub mod api;
pub mod constants;
pub mod logic;

// Re-export the types embedders touch first
pub use logic::config::PipelineConfig;
pub use logic::detection::Classification;
pub use logic::pipeline::{PipelineReport, PipelineRequest};
pub use logic::policy::DefenseAction;
pub use logic::state::AppState;
pub use logic::telemetry::{DefenseStats, LogEntry, ThreatSample};
