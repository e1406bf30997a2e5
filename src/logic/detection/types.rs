//! Detection Types
//!
//! Core types for the detection stage. No logic here, only data
//! structures shared by scoring, simulation, and the agent.

use serde::{Deserialize, Serialize};

use crate::logic::features::{FeatureSet, Modality};

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Authenticity classification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Confidently genuine, safe to allow
    Authentic,
    /// Uncertain, needs secondary verification
    Suspicious,
    /// Deepfake indicators dominate, treat as hostile
    Fake,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Authentic => "authentic",
            Classification::Suspicious => "suspicious",
            Classification::Fake => "fake",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Classification::Authentic => 0,
            Classification::Suspicious => 1,
            Classification::Fake => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Classification::Authentic => "#10b981",  // Green
            Classification::Suspicious => "#f59e0b", // Yellow
            Classification::Fake => "#ef4444",       // Red
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ANALYSIS INPUT
// ============================================================================

/// What one pipeline invocation was asked to analyze.
///
/// The scenario branch always wins over sample analysis; the two are
/// mutually exclusive by construction.
#[derive(Debug, Clone)]
pub enum AnalysisInput {
    /// Raw media bytes submitted by the presentation layer
    Live { sample: Vec<u8>, modality: Modality },
    /// A named demo scenario
    Scenario { name: String, modality: Modality },
}

// ============================================================================
// ANALYSIS METHOD
// ============================================================================

/// How a detection result was produced.
///
/// `Fallback` is the observable marker that live extraction failed and
/// the worst-case scenario was scored instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMethod {
    /// Features measured from the submitted sample
    Live,
    /// Features simulated for a named scenario
    Scenario { name: String },
    /// Live extraction failed; recovered via the worst-case scenario
    Fallback { reason: String },
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::Live => "live",
            AnalysisMethod::Scenario { .. } => "scenario",
            AnalysisMethod::Fallback { .. } => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisMethod::Fallback { .. })
    }
}

impl std::fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DETECTION RESULT
// ============================================================================

/// Result of the detection stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Authenticity confidence, 0-100 (higher = more likely genuine)
    pub score: f32,
    /// The feature set the score was derived from
    pub features: FeatureSet,
    pub classification: Classification,
    /// How this result was produced
    pub method: AnalysisMethod,
    /// Hex SHA-256 of the submitted bytes (live path only)
    pub sample_digest: Option<String>,
}
