//! Policy Types
//!
//! Core types for defense decisions. No logic here, only data
//! structures shared by the engine and the response stage.

use serde::{Deserialize, Serialize};

// ============================================================================
// DEFENSE ACTIONS
// ============================================================================

/// What to do with an analyzed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenseAction {
    /// Let the request through
    Allow,
    /// Demand secondary verification before granting access
    Restrict,
    /// Divert the caller into a honeypot
    Deceive,
}

impl DefenseAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefenseAction::Allow => "allow",
            DefenseAction::Restrict => "restrict",
            DefenseAction::Deceive => "deceive",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            DefenseAction::Allow => 0,
            DefenseAction::Restrict => 1,
            DefenseAction::Deceive => 2,
        }
    }

    pub fn engages_honeypot(&self) -> bool {
        matches!(self, DefenseAction::Deceive)
    }
}

impl std::fmt::Display for DefenseAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK TIERS
// ============================================================================

/// Risk attached to a decision (separate from the classification)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#10b981",    // Green
            RiskTier::Medium => "#f59e0b", // Yellow
            RiskTier::High => "#ef4444",   // Red
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskTier::High)
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DECISION
// ============================================================================

/// Complete decision for one analyzed input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: DefenseAction,
    pub risk: RiskTier,
    pub reason: String,
    pub alert: bool,
}
