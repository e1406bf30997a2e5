//! Defense Actions
//!
//! Executes the decided action and appends exactly one entry to the
//! defense log. The honeypot here is a diversion flag for the caller,
//! not a network construct.

use super::types::DefenseOutcome;
use crate::logic::policy::{Decision, DefenseAction};
use crate::logic::telemetry::{DefenseLog, LogEntry};

// ============================================================================
// EXECUTION
// ============================================================================

/// Execute a decision against a source, recording it in the log.
///
/// Infallible: every action path produces an outcome and one entry.
pub fn execute(decision: &Decision, source: &str, log: &DefenseLog) -> DefenseOutcome {
    let (status, honeypot, summary) = match decision.action {
        DefenseAction::Allow => (
            "access granted",
            false,
            format!("AUTHENTIC: access granted from {}", source),
        ),
        DefenseAction::Restrict => (
            "secondary verification required",
            false,
            format!("SUSPICIOUS: access restricted from {}", source),
        ),
        DefenseAction::Deceive => (
            "honeypot engaged",
            true,
            format!("DEEPFAKE: honeypot engaged for {}", source),
        ),
    };

    let entry = LogEntry::new(decision.action, decision.risk, &summary, source);
    log.append(entry.clone());

    if decision.risk.is_high() {
        log::warn!("{} ({})", summary, decision.reason);
    } else {
        log::info!("{} ({})", summary, decision.reason);
    }

    DefenseOutcome {
        status: status.to_string(),
        honeypot,
        entry,
    }
}

// ============================================================================
// TESTS
// ============================================================================
