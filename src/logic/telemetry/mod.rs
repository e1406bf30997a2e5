//! Telemetry Module
//!
//! Audit trail for the defense pipeline. Without the log you cannot
//! trace why a defense fired, chart the threat trend, or audit what
//! the system did on whose behalf.
//!
//! ## Structure
//! - `event.rs` - LogEntry and ThreatSample (immutable, timestamped)
//! - `store.rs` - Thread-safe in-memory stores with stats
//!
//! ## Usage
//! ```ignore
//! use crate::logic::telemetry::{DefenseLog, LogEntry};
//!
//! let log = DefenseLog::new();
//! log.append(LogEntry::new(action, risk, &summary, source));
//! let stats = log.stats();
//! ```

pub mod event;
pub mod store;

// Re-export main types for convenience
pub use event::{LogEntry, ThreatSample};

pub use store::{
    DefenseLog,
    DefenseStats,
    ThreatHistory,
};
