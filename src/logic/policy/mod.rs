//! Policy Module
//!
//! Decides what to do about a detection result. This stage owns the
//! security posture, not the scoring and not the response mechanics.
//!
//! ## Structure
//! - `types`: Core types (DefenseAction, RiskTier, Decision)
//! - `engine`: Decision logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::policy::{decide, DefenseAction};
//!
//! let decision = decide(&detection, risk_sensitivity);
//! match decision.action {
//!     DefenseAction::Allow => grant_access(),
//!     DefenseAction::Restrict => demand_verification(),
//!     DefenseAction::Deceive => engage_honeypot(),
//! }
//! ```

pub mod types;
pub mod engine;

// Re-export main types for convenience
pub use types::{
    DefenseAction,
    RiskTier,
    Decision,
};

pub use engine::{decide, action_for, risk_for};
