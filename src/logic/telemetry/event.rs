//! Telemetry Event Types
//!
//! Immutable, timestamped records for the audit trail. One defense
//! log entry per pipeline run and one threat sample per detection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::detection::Classification;
use crate::logic::policy::{DefenseAction, RiskTier};

// ============================================================================
// DEFENSE LOG ENTRY
// ============================================================================

/// One executed defense, append-only and never modified after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique entry ID
    pub id: String,
    /// When the defense executed (UTC)
    pub timestamp: DateTime<Utc>,
    /// Action that was taken
    pub action: DefenseAction,
    /// Risk tier the decision carried
    pub risk: RiskTier,
    /// Human-readable summary
    pub summary: String,
    /// Where the input claimed to come from
    pub source: String,
}

impl LogEntry {
    pub fn new(action: DefenseAction, risk: RiskTier, summary: &str, source: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            action,
            risk,
            summary: summary.to_string(),
            source: source.to_string(),
        }
    }
}

// ============================================================================
// THREAT SAMPLE
// ============================================================================

/// One detection outcome, kept for trend charts and statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatSample {
    pub timestamp: DateTime<Utc>,
    pub score: f32,
    pub classification: Classification,
}

impl ThreatSample {
    pub fn new(score: f32, classification: Classification) -> Self {
        Self {
            timestamp: Utc::now(),
            score,
            classification,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_creation() {
        let entry = LogEntry::new(
            DefenseAction::Deceive,
            RiskTier::High,
            "DEEPFAKE: honeypot engaged for 10.0.0.1",
            "10.0.0.1",
        );
        assert!(!entry.id.is_empty());
        assert_eq!(entry.action, DefenseAction::Deceive);
        assert_eq!(entry.risk, RiskTier::High);
        assert_eq!(entry.source, "10.0.0.1");
    }

    #[test]
    fn test_log_entry_ids_are_unique() {
        let a = LogEntry::new(DefenseAction::Allow, RiskTier::Low, "ok", "src");
        let b = LogEntry::new(DefenseAction::Allow, RiskTier::Low, "ok", "src");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_log_entry_serializes_to_single_line() {
        let entry = LogEntry::new(DefenseAction::Restrict, RiskTier::Medium, "sus", "src");
        let json = serde_json::to_string(&entry).expect("serializable");
        // Serde serializes enums as PascalCase variant names by default
        assert!(json.contains("Restrict"));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_threat_sample_creation() {
        let sample = ThreatSample::new(23.0, Classification::Fake);
        assert_eq!(sample.score, 23.0);
        assert_eq!(sample.classification, Classification::Fake);
    }
}
