//! Features Module - Media Feature Extraction
//!
//! Turns raw media buffers into fixed-layout feature sets, one layout
//! per modality. Extraction failures never escape the detection stage;
//! they surface only as the fallback marker on the final result.

pub mod audio;
pub mod set;
pub mod video;
pub mod wav;


// Re-export common types
pub use set::{
    feature_layout, AudioFeatures, FeatureSet, InvalidModalityError, Modality, VideoFeatures,
    AUDIO_FEATURE_LAYOUT, VIDEO_FEATURE_LAYOUT,
};

// ============================================================================
// EXTRACTION ERRORS
// ============================================================================

/// Why a live extraction attempt could not produce features.
///
/// Never caller-visible: the detection agent absorbs every variant
/// into the worst-case fallback path.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// The buffer is not a well-formed RIFF/WAVE container
    InvalidContainer { detail: String },
    /// The container is valid but uses an encoding we do not decode
    UnsupportedEncoding { format: u16, bits: u16 },
    /// The waveform is too short for even one analysis frame
    TooShort { samples: usize, needed: usize },
    /// Extraction exceeded the configured time budget
    Timeout { limit_ms: u64 },
    /// The blocking extraction task failed to complete
    Worker { detail: String },
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::InvalidContainer { detail } => {
                write!(f, "invalid media container: {}", detail)
            }
            ExtractionError::UnsupportedEncoding { format, bits } => {
                write!(f, "unsupported WAV encoding (format {}, {} bits)", format, bits)
            }
            ExtractionError::TooShort { samples, needed } => {
                write!(
                    f,
                    "waveform too short ({} samples, need at least {})",
                    samples, needed
                )
            }
            ExtractionError::Timeout { limit_ms } => {
                write!(f, "extraction exceeded the {} ms budget", limit_ms)
            }
            ExtractionError::Worker { detail } => {
                write!(f, "extraction worker failed: {}", detail)
            }
        }
    }
}

impl std::error::Error for ExtractionError {}
