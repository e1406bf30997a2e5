//! Response Module
//!
//! Executes the decided defense and records it. Detection scores,
//! policy decides, and this stage acts.
//!
//! ## Structure
//! - `types.rs`: DefenseOutcome
//! - `actions.rs`: Action execution and log recording

pub mod types;
pub mod actions;

// Re-exports
pub use types::DefenseOutcome;
pub use actions::execute;
