//! Telemetry Stores
//!
//! In-memory, thread-safe stores for the defense log and the threat
//! history. Appends serialize on the inner lock, so concurrent
//! pipeline runs never interleave or drop entries. Owned by the
//! caller's app state rather than by a global.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;

use super::event::{LogEntry, ThreatSample};
use crate::logic::policy::DefenseAction;

// ============================================================================
// DEFENSE LOG
// ============================================================================

/// Append-only record of every executed defense
pub struct DefenseLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl DefenseLog {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn append(&self, entry: LogEntry) {
        self.entries.lock().push(entry);
    }

    /// Full copy of the log in append order
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Last `limit` entries in append order
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let entries = self.entries.lock();
        let start = entries.len().saturating_sub(limit);
        entries[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop all entries, returning how many were dropped
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.lock();
        let cleared = entries.len();
        entries.clear();
        cleared
    }

    pub fn stats(&self) -> DefenseStats {
        let entries = self.entries.lock();
        let mut by_action: HashMap<String, usize> = HashMap::new();
        let mut honeypots_engaged = 0;
        let mut alerts_raised = 0;

        for entry in entries.iter() {
            *by_action.entry(entry.action.as_str().to_string()).or_insert(0) += 1;
            if entry.action.engages_honeypot() {
                honeypots_engaged += 1;
            }
            if entry.action != DefenseAction::Allow {
                alerts_raised += 1;
            }
        }

        DefenseStats {
            total: entries.len(),
            by_action,
            honeypots_engaged,
            alerts_raised,
        }
    }
}

impl Default for DefenseLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregates over the defense log
#[derive(Debug, Clone, Serialize)]
pub struct DefenseStats {
    pub total: usize,
    pub by_action: HashMap<String, usize>,
    pub honeypots_engaged: usize,
    pub alerts_raised: usize,
}

// ============================================================================
// THREAT HISTORY
// ============================================================================

/// Rolling window of detection outcomes, capped at `capacity`
pub struct ThreatHistory {
    samples: Mutex<Vec<ThreatSample>>,
    capacity: usize,
}

impl ThreatHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Mutex::new(Vec::new()),
            capacity,
        }
    }

    pub fn record(&self, sample: ThreatSample) {
        let mut samples = self.samples.lock();
        samples.push(sample);

        // Trim if too many
        let current_len = samples.len();
        if current_len > self.capacity {
            samples.drain(0..current_len - self.capacity);
        }
    }

    pub fn snapshot(&self) -> Vec<ThreatSample> {
        self.samples.lock().clone()
    }

    /// Last `limit` samples in record order
    pub fn recent(&self, limit: usize) -> Vec<ThreatSample> {
        let samples = self.samples.lock();
        let start = samples.len().saturating_sub(limit);
        samples[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.samples.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.lock().is_empty()
    }

    /// Drop all samples, returning how many were dropped
    pub fn clear(&self) -> usize {
        let mut samples = self.samples.lock();
        let cleared = samples.len();
        samples.clear();
        cleared
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::detection::Classification;
    use crate::logic::policy::RiskTier;

    fn entry(action: DefenseAction, risk: RiskTier) -> LogEntry {
        LogEntry::new(action, risk, "summary", "192.168.1.100")
    }

    #[test]
    fn test_log_append_and_snapshot_preserve_order() {
        let log = DefenseLog::new();
        log.append(entry(DefenseAction::Allow, RiskTier::Low));
        log.append(entry(DefenseAction::Deceive, RiskTier::High));

        let snapshot = log.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].action, DefenseAction::Allow);
        assert_eq!(snapshot[1].action, DefenseAction::Deceive);
    }

    #[test]
    fn test_log_recent_takes_the_tail() {
        let log = DefenseLog::new();
        log.append(entry(DefenseAction::Allow, RiskTier::Low));
        log.append(entry(DefenseAction::Restrict, RiskTier::Medium));
        log.append(entry(DefenseAction::Deceive, RiskTier::High));

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].action, DefenseAction::Restrict);
        assert_eq!(recent[1].action, DefenseAction::Deceive);

        // Asking for more than exists returns everything
        assert_eq!(log.recent(10).len(), 3);
    }

    #[test]
    fn test_log_clear_reports_dropped_count() {
        let log = DefenseLog::new();
        log.append(entry(DefenseAction::Allow, RiskTier::Low));
        log.append(entry(DefenseAction::Allow, RiskTier::Low));
        assert_eq!(log.clear(), 2);
        assert!(log.is_empty());
        assert_eq!(log.clear(), 0);
    }

    #[test]
    fn test_log_stats_counts_actions_and_alerts() {
        let log = DefenseLog::new();
        log.append(entry(DefenseAction::Allow, RiskTier::Low));
        log.append(entry(DefenseAction::Restrict, RiskTier::Medium));
        log.append(entry(DefenseAction::Deceive, RiskTier::High));
        log.append(entry(DefenseAction::Deceive, RiskTier::High));

        let stats = log.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_action.get("allow"), Some(&1));
        assert_eq!(stats.by_action.get("restrict"), Some(&1));
        assert_eq!(stats.by_action.get("deceive"), Some(&2));
        assert_eq!(stats.honeypots_engaged, 2);
        assert_eq!(stats.alerts_raised, 3);
    }

    #[test]
    fn test_history_caps_at_capacity() {
        let history = ThreatHistory::new(3);
        for i in 0..5 {
            history.record(ThreatSample::new(i as f32, Classification::Suspicious));
        }
        assert_eq!(history.len(), 3);

        // Oldest samples were dropped
        let snapshot = history.snapshot();
        assert_eq!(snapshot[0].score, 2.0);
        assert_eq!(snapshot[2].score, 4.0);
    }

    #[test]
    fn test_history_recent_and_clear() {
        let history = ThreatHistory::new(100);
        history.record(ThreatSample::new(92.0, Classification::Authentic));
        history.record(ThreatSample::new(23.0, Classification::Fake));

        let recent = history.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].score, 23.0);

        assert_eq!(history.clear(), 2);
        assert!(history.is_empty());
    }
}
