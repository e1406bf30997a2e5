//! Defense Pipeline
//!
//! One run walks the stages in a fixed order: detect, decide, defend,
//! record. Stages never reorder and never skip, and every run appends
//! exactly one defense log entry. The run itself is infallible;
//! anything that can go wrong upstream is absorbed by the detection
//! stage's fallback path.

use serde::Serialize;

use crate::logic::detection::{AnalysisInput, DetectionResult};
use crate::logic::policy::{self, Decision};
use crate::logic::response::{self, DefenseOutcome};
use crate::logic::state::AppState;
use crate::logic::telemetry::ThreatSample;

// ============================================================================
// REQUEST / REPORT
// ============================================================================

/// One pipeline invocation
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub input: AnalysisInput,
    pub source: String,
    pub risk_sensitivity: u8,
}

/// Everything a run produced, stage by stage
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub detection: DetectionResult,
    pub decision: Decision,
    pub outcome: DefenseOutcome,
}

// ============================================================================
// RUN
// ============================================================================

pub async fn run(state: &AppState, request: PipelineRequest) -> PipelineReport {
    let detection = state.detection().analyze(request.input).await;
    state
        .history()
        .record(ThreatSample::new(detection.score, detection.classification));

    let decision = policy::decide(&detection, request.risk_sensitivity);
    let outcome = response::execute(&decision, &request.source, state.log());

    log::info!(
        "Pipeline run for {}: {} {:.1}% via {} -> {}",
        request.source,
        detection.classification,
        detection.score,
        detection.method,
        outcome.status
    );

    PipelineReport {
        detection,
        decision,
        outcome,
    }
}

// ============================================================================
// TESTS
// ============================================================================
