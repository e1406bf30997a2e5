//! Detection Agent
//!
//! Front door of the detection stage. Routes each request down the
//! scenario branch or the live branch, bounds live extraction with the
//! configured timeout, and absorbs every extraction failure into the
//! worst-case fallback path. The agent owns the injected nuisance RNG,
//! so a seeded config makes simulated output reproducible end to end.

use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use super::classifier;
use super::types::{AnalysisInput, AnalysisMethod, DetectionResult};
use crate::logic::config::PipelineConfig;
use crate::logic::features::{audio, video, ExtractionError, FeatureSet, Modality};
use crate::logic::scenario::{self, Scenario};

// ============================================================================
// DETECTION AGENT
// ============================================================================

/// Stage one of the pipeline: media in, classified result out
pub struct DetectionAgent {
    extraction_timeout: Duration,
    video_probe_seed: u64,
    nuisance_rng: Mutex<StdRng>,
}

impl DetectionAgent {
    pub fn new(config: &PipelineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            extraction_timeout: Duration::from_millis(config.extraction_timeout_ms),
            video_probe_seed: config.video_probe_seed,
            nuisance_rng: Mutex::new(rng),
        }
    }

    /// Analyze one input.
    ///
    /// Never fails: extraction trouble becomes the fallback path and
    /// unknown scenario names score with the neutral default.
    pub async fn analyze(&self, input: AnalysisInput) -> DetectionResult {
        match input {
            AnalysisInput::Scenario { name, modality } => self.run_scenario(&name, modality),
            AnalysisInput::Live { sample, modality } => self.run_live(sample, modality).await,
        }
    }

    fn run_scenario(&self, name: &str, modality: Modality) -> DetectionResult {
        let scenario = Scenario::resolve(name);
        if scenario == Scenario::Unknown {
            log::warn!(
                "Unknown scenario '{}', scoring with the neutral default",
                name
            );
        }
        let mut result = scenario::simulate(scenario, modality, &mut *self.nuisance_rng.lock());
        if scenario == Scenario::Unknown {
            // Keep the requested name visible in the audit trail
            result.method = AnalysisMethod::Scenario {
                name: name.trim().to_string(),
            };
        }
        result
    }

    async fn run_live(&self, sample: Vec<u8>, modality: Modality) -> DetectionResult {
        let digest = hex::encode(Sha256::digest(&sample));

        match self.bounded_extract(sample, modality).await {
            Ok(features) => {
                let score = classifier::score(&features);
                log::debug!(
                    "Live {} extraction ok: score {:.1} (digest {})",
                    modality,
                    score,
                    &digest[..12]
                );
                DetectionResult {
                    score,
                    features,
                    classification: classifier::classify(score),
                    method: AnalysisMethod::Live,
                    sample_digest: Some(digest),
                }
            }
            Err(err) => {
                log::warn!(
                    "Live {} extraction failed ({}), scoring the worst-case scenario",
                    modality,
                    err
                );
                let mut result = scenario::simulate(
                    Scenario::DeepfakeAttack,
                    modality,
                    &mut *self.nuisance_rng.lock(),
                );
                result.method = AnalysisMethod::Fallback {
                    reason: err.to_string(),
                };
                result.sample_digest = Some(digest);
                result
            }
        }
    }

    /// Run the modality's extractor on a blocking worker, bounded by
    /// the configured timeout
    async fn bounded_extract(
        &self,
        sample: Vec<u8>,
        modality: Modality,
    ) -> Result<FeatureSet, ExtractionError> {
        let seed = self.video_probe_seed;
        let work = tokio::task::spawn_blocking(move || match modality {
            Modality::Audio => audio::extract(&sample),
            Modality::Video => Ok(video::extract(&sample, seed)),
        });

        match tokio::time::timeout(self.extraction_timeout, work).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(ExtractionError::Worker {
                detail: join_err.to_string(),
            }),
            Err(_) => Err(ExtractionError::Timeout {
                limit_ms: self.extraction_timeout.as_millis() as u64,
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
