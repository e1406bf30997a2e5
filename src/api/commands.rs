//! Service Commands - API for embedders and the console runner
//!
//! Thin async wrappers over the pipeline and the stores. String-typed
//! input from the outside world is validated here, before any pipeline
//! work starts. Everything past this boundary is typed.

use crate::constants::DEFAULT_RISK_SENSITIVITY;
use crate::logic::detection::AnalysisInput;
use crate::logic::features::{InvalidModalityError, Modality};
use crate::logic::pipeline::{self, PipelineReport, PipelineRequest};
use crate::logic::state::AppState;
use crate::logic::telemetry::{DefenseStats, LogEntry, ThreatSample};

// ============================================================================
// ANALYSIS COMMANDS
// ============================================================================

/// Run the full pipeline on a raw media sample.
///
/// An unrecognized modality tag fails synchronously, with nothing
/// analyzed or logged.
pub async fn analyze_sample(
    state: &AppState,
    sample: Vec<u8>,
    modality_tag: &str,
    source: &str,
    risk_sensitivity: Option<u8>,
) -> Result<PipelineReport, InvalidModalityError> {
    let modality = Modality::from_tag(modality_tag)?;

    let request = PipelineRequest {
        input: AnalysisInput::Live { sample, modality },
        source: source.to_string(),
        risk_sensitivity: risk_sensitivity.unwrap_or(DEFAULT_RISK_SENSITIVITY),
    };
    Ok(pipeline::run(state, request).await)
}

/// Run the full pipeline on a named scenario
pub async fn run_scenario(
    state: &AppState,
    scenario_name: &str,
    modality_tag: &str,
    source: &str,
    risk_sensitivity: Option<u8>,
) -> Result<PipelineReport, InvalidModalityError> {
    let modality = Modality::from_tag(modality_tag)?;

    let request = PipelineRequest {
        input: AnalysisInput::Scenario {
            name: scenario_name.to_string(),
            modality,
        },
        source: source.to_string(),
        risk_sensitivity: risk_sensitivity.unwrap_or(DEFAULT_RISK_SENSITIVITY),
    };
    Ok(pipeline::run(state, request).await)
}

// ============================================================================
// LOG COMMANDS
// ============================================================================

/// Defense log entries, the most recent `limit` (all when None)
pub fn get_defense_log(state: &AppState, limit: Option<usize>) -> Vec<LogEntry> {
    match limit {
        Some(limit) => state.log().recent(limit),
        None => state.log().snapshot(),
    }
}

/// Threat history samples, the most recent `limit` (all when None)
pub fn get_threat_history(state: &AppState, limit: Option<usize>) -> Vec<ThreatSample> {
    match limit {
        Some(limit) => state.history().recent(limit),
        None => state.history().snapshot(),
    }
}

/// Aggregate statistics over the defense log
pub fn get_statistics(state: &AppState) -> DefenseStats {
    state.log().stats()
}

/// Reset the system (for testing). Returns how many records dropped.
pub fn reset_system(state: &AppState) -> usize {
    let cleared = state.log().clear() + state.history().clear();
    log::info!("System reset completed ({} records dropped)", cleared);
    cleared
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::config::PipelineConfig;
    use crate::logic::policy::DefenseAction;

    fn state() -> AppState {
        AppState::new(PipelineConfig::deterministic(7))
    }

    #[tokio::test]
    async fn test_run_scenario_end_to_end() {
        let state = state();
        let report = run_scenario(&state, "deepfake attack", "audio", "10.1.1.1", None)
            .await
            .expect("valid modality");

        assert_eq!(report.detection.score, 23.0);
        assert_eq!(report.decision.action, DefenseAction::Deceive);
        assert_eq!(get_defense_log(&state, None).len(), 1);
        assert_eq!(get_threat_history(&state, None).len(), 1);
    }

    #[tokio::test]
    async fn test_mime_style_modality_tags_are_accepted() {
        let state = state();
        let report = run_scenario(
            &state,
            "video command",
            "video/mp4",
            "10.1.1.1",
            Some(5),
        )
        .await
        .expect("valid modality");
        assert_eq!(report.detection.score, 45.0);
    }

    #[tokio::test]
    async fn test_invalid_modality_fails_before_any_work() {
        let state = state();
        let err = analyze_sample(&state, vec![0u8; 16], "hologram", "10.1.1.1", None)
            .await
            .expect_err("invalid modality");
        assert!(err.to_string().contains("hologram"));

        // Nothing ran, nothing was recorded
        assert!(get_defense_log(&state, None).is_empty());
        assert!(get_threat_history(&state, None).is_empty());
        assert_eq!(get_statistics(&state).total, 0);
    }

    #[tokio::test]
    async fn test_analyze_sample_garbage_still_logs_once() {
        let state = state();
        let report = analyze_sample(&state, b"not audio".to_vec(), "audio", "10.1.1.1", None)
            .await
            .expect("valid modality");

        assert!(report.detection.method.is_fallback());
        assert_eq!(get_defense_log(&state, None).len(), 1);
    }

    #[tokio::test]
    async fn test_log_limit_takes_the_tail() {
        let state = state();
        for name in ["legitimate owner", "suspicious voice", "deepfake attack"] {
            run_scenario(&state, name, "audio", "10.1.1.1", None)
                .await
                .expect("valid modality");
        }

        let recent = get_defense_log(&state, Some(2));
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].action, DefenseAction::Restrict);
        assert_eq!(recent[1].action, DefenseAction::Deceive);
    }

    #[tokio::test]
    async fn test_reset_system_reports_dropped_records() {
        let state = state();
        run_scenario(&state, "legitimate owner", "audio", "10.1.1.1", None)
            .await
            .expect("valid modality");
        run_scenario(&state, "deepfake attack", "video", "10.1.1.1", None)
            .await
            .expect("valid modality");

        // Two log entries plus two history samples
        assert_eq!(reset_system(&state), 4);
        assert!(get_defense_log(&state, None).is_empty());
        assert!(get_threat_history(&state, None).is_empty());
        assert_eq!(reset_system(&state), 0);
    }
}
