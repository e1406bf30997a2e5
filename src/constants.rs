//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default timeout or capacity, only edit this file.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SentinelAI";

/// Default source identifier attached to pipeline invocations when the
/// presentation layer does not supply one (the demo smart-home hub).
pub const DEFAULT_SOURCE_ID: &str = "192.168.1.100";

/// Default risk-sensitivity value (1..=5 scale, dashboard slider midpoint)
pub const DEFAULT_RISK_SENSITIVITY: u8 = 3;

/// Default live-extraction timeout (milliseconds)
pub const DEFAULT_EXTRACTION_TIMEOUT_MS: u64 = 5_000;

/// Default seed for the interim video feature generator
pub const DEFAULT_VIDEO_PROBE_SEED: u64 = 42;

/// Default threat-history capacity (oldest samples dropped beyond this)
pub const DEFAULT_HISTORY_CAPACITY: usize = 500;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get live-extraction timeout from environment or use default
pub fn get_extraction_timeout_ms() -> u64 {
    std::env::var("SENTINEL_EXTRACTION_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_EXTRACTION_TIMEOUT_MS)
}

/// Get threat-history capacity from environment or use default
pub fn get_history_capacity() -> usize {
    std::env::var("SENTINEL_HISTORY_CAPACITY")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HISTORY_CAPACITY)
}
