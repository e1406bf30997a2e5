//! Policy Engine
//!
//! Decision logic only, no type definitions.
//! Input: DetectionResult + risk sensitivity
//! Output: Decision

use super::types::*;
use crate::logic::detection::{Classification, DetectionResult};

// ============================================================================
// MAIN DECISION FUNCTION
// ============================================================================

/// Map a detection result to a defense decision.
///
/// The mapping keys on the classification alone. `risk_sensitivity`
/// (1 to 5, default 3) is carried through the pipeline so callers can
/// already pass it, but it does not move the outcome yet.
// TODO: fold risk_sensitivity into the action mapping once tier
// calibration is settled
pub fn decide(detection: &DetectionResult, risk_sensitivity: u8) -> Decision {
    log::debug!(
        "Deciding on {} ({:.1}%, sensitivity {})",
        detection.classification,
        detection.score,
        risk_sensitivity
    );

    let action = action_for(detection.classification);
    let risk = risk_for(detection.classification);

    match detection.classification {
        Classification::Authentic => Decision {
            action,
            risk,
            reason: format!("High confidence authentic ({:.1}%)", detection.score),
            alert: false,
        },
        Classification::Suspicious => Decision {
            action,
            risk,
            reason: format!("Suspicious input ({:.1}%)", detection.score),
            alert: true,
        },
        Classification::Fake => Decision {
            action,
            risk,
            reason: format!("Deepfake detected ({:.1}%)", detection.score),
            alert: true,
        },
    }
}

/// Action for a classification, without the surrounding decision
pub fn action_for(classification: Classification) -> DefenseAction {
    match classification {
        Classification::Authentic => DefenseAction::Allow,
        Classification::Suspicious => DefenseAction::Restrict,
        Classification::Fake => DefenseAction::Deceive,
    }
}

/// Risk tier for a classification
pub fn risk_for(classification: Classification) -> RiskTier {
    match classification {
        Classification::Authentic => RiskTier::Low,
        Classification::Suspicious => RiskTier::Medium,
        Classification::Fake => RiskTier::High,
    }
}

// ============================================================================
// TESTS
// ============================================================================
