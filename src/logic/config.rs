//! Pipeline Configuration
//!
//! Runtime knobs for one application-state instance. Defaults come
//! from `constants` (env-overridable); the deterministic preset pins
//! the nuisance RNG for reproducible runs.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for a pipeline state instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Budget for one live extraction (milliseconds)
    pub extraction_timeout_ms: u64,
    /// Seed for the interim video feature generator
    pub video_probe_seed: u64,
    /// Seed for the scenario nuisance RNG; None draws from entropy
    pub rng_seed: Option<u64>,
    /// Threat-history capacity (oldest samples dropped beyond this)
    pub history_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extraction_timeout_ms: constants::get_extraction_timeout_ms(),
            video_probe_seed: constants::DEFAULT_VIDEO_PROBE_SEED,
            rng_seed: None,
            history_capacity: constants::get_history_capacity(),
        }
    }
}

impl PipelineConfig {
    /// Fully reproducible runs: every random draw derives from `seed`
    pub fn deterministic(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Default::default()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
