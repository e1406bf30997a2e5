//! Response Types
//!
//! Data produced by executing a defense decision.

use serde::{Deserialize, Serialize};

use crate::logic::telemetry::LogEntry;

// ============================================================================
// DEFENSE OUTCOME
// ============================================================================

/// Result of executing one defense decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseOutcome {
    /// Caller-facing status line
    pub status: String,
    /// Whether the caller was diverted into the honeypot
    pub honeypot: bool,
    /// The audit entry this execution appended
    pub entry: LogEntry,
}
