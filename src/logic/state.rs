//! Application State
//!
//! Caller-owned root of the pipeline. Construct one `AppState`, share
//! it behind an `Arc`, and every run goes through it. No globals, so
//! tests and embedders can hold isolated instances side by side.

use crate::logic::config::PipelineConfig;
use crate::logic::detection::DetectionAgent;
use crate::logic::telemetry::{DefenseLog, ThreatHistory};

// ============================================================================
// APP STATE
// ============================================================================

pub struct AppState {
    config: PipelineConfig,
    detection: DetectionAgent,
    log: DefenseLog,
    history: ThreatHistory,
}

impl AppState {
    pub fn new(config: PipelineConfig) -> Self {
        let detection = DetectionAgent::new(&config);
        let history = ThreatHistory::new(config.history_capacity);
        Self {
            config,
            detection,
            log: DefenseLog::new(),
            history,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn detection(&self) -> &DetectionAgent {
        &self.detection
    }

    pub fn log(&self) -> &DefenseLog {
        &self.log
    }

    pub fn history(&self) -> &ThreatHistory {
        &self.history
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
