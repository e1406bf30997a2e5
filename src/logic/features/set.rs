//! Feature Schema - Modalities and Fixed Feature Layouts
//!
//! **This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Every extractor emits the complete key set for its modality
//! 2. Key names and order here are the single source of truth
//! 3. Renaming a key breaks the dashboard contract
//!
//! The scoring rules in `detection::rules` reference these keys by
//! field, so schema and scoring stay in sync at compile time.

use serde::{Deserialize, Serialize};

// ============================================================================
// MODALITY
// ============================================================================

/// Supported media modalities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Audio,
    Video,
}

impl Modality {
    /// Parse a presentation-layer modality tag.
    ///
    /// Accepts the exact tags `"audio"` / `"video"` as well as
    /// MIME-style forms (`"audio/wav"`, `"video/mp4"`), case
    /// insensitively. Anything else is rejected.
    pub fn from_tag(tag: &str) -> Result<Self, InvalidModalityError> {
        let normalized = tag.trim().to_ascii_lowercase();
        if normalized == "audio" || normalized.starts_with("audio/") {
            Ok(Modality::Audio)
        } else if normalized == "video" || normalized.starts_with("video/") {
            Ok(Modality::Video)
        } else {
            Err(InvalidModalityError {
                tag: tag.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Audio => "audio",
            Modality::Video => "video",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when the presentation layer submits an unrecognized modality tag
#[derive(Debug, Clone)]
pub struct InvalidModalityError {
    pub tag: String,
}

impl std::fmt::Display for InvalidModalityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid modality tag '{}' (expected \"audio\" or \"video\")",
            self.tag
        )
    }
}

impl std::error::Error for InvalidModalityError {}

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Audio metric names in canonical display order
pub const AUDIO_FEATURE_LAYOUT: &[&str] = &[
    "mfcc_var",           // 0: Variance of the MFCC matrix
    "chroma_corr",        // 1: Correlation between first two chroma bands
    "spectral_rolloff",   // 2: Mean 85% energy rolloff, normalized to Nyquist
    "zero_crossing_rate", // 3: Mean waveform sign-change rate
];

/// Video metric names in canonical display order
pub const VIDEO_FEATURE_LAYOUT: &[&str] = &[
    "blink_ratio",      // 0: Blink interval ratio (natural ~0.3)
    "lip_sync",         // 1: Lip/audio alignment score 0..1
    "face_consistency", // 2: Frame-to-frame face stability 0..1
];

/// Get the canonical metric layout for a modality
pub fn feature_layout(modality: Modality) -> &'static [&'static str] {
    match modality {
        Modality::Audio => AUDIO_FEATURE_LAYOUT,
        Modality::Video => VIDEO_FEATURE_LAYOUT,
    }
}

// ============================================================================
// FEATURE SETS
// ============================================================================

/// The four audio metrics computed from a decoded waveform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub mfcc_var: f32,
    pub chroma_corr: f32,
    pub spectral_rolloff: f32,
    pub zero_crossing_rate: f32,
}

/// The three video metrics from the interim frame-probe generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoFeatures {
    pub blink_ratio: f32,
    pub lip_sync: f32,
    pub face_consistency: f32,
}

/// A complete, immutable feature set for one sample.
///
/// Serializes untagged, so the dashboard receives a flat
/// metric-name → value map for either modality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureSet {
    Audio(AudioFeatures),
    Video(VideoFeatures),
}

impl FeatureSet {
    pub fn modality(&self) -> Modality {
        match self {
            FeatureSet::Audio(_) => Modality::Audio,
            FeatureSet::Video(_) => Modality::Video,
        }
    }

    /// Look up a metric by its layout name
    pub fn metric(&self, name: &str) -> Option<f32> {
        match self {
            FeatureSet::Audio(a) => match name {
                "mfcc_var" => Some(a.mfcc_var),
                "chroma_corr" => Some(a.chroma_corr),
                "spectral_rolloff" => Some(a.spectral_rolloff),
                "zero_crossing_rate" => Some(a.zero_crossing_rate),
                _ => None,
            },
            FeatureSet::Video(v) => match name {
                "blink_ratio" => Some(v.blink_ratio),
                "lip_sync" => Some(v.lip_sync),
                "face_consistency" => Some(v.face_consistency),
                _ => None,
            },
        }
    }

    /// All metrics paired with their names, in canonical layout order
    pub fn metrics(&self) -> Vec<(&'static str, f32)> {
        feature_layout(self.modality())
            .iter()
            .map(|name| {
                let value = self.metric(name).unwrap_or(0.0);
                (*name, value)
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modality_from_tag() {
        assert_eq!(Modality::from_tag("audio").unwrap(), Modality::Audio);
        assert_eq!(Modality::from_tag("video").unwrap(), Modality::Video);
        assert_eq!(Modality::from_tag("AUDIO").unwrap(), Modality::Audio);
        assert_eq!(Modality::from_tag(" video ").unwrap(), Modality::Video);
    }

    #[test]
    fn test_modality_from_mime_tag() {
        assert_eq!(Modality::from_tag("audio/wav").unwrap(), Modality::Audio);
        assert_eq!(Modality::from_tag("video/mp4").unwrap(), Modality::Video);
    }

    #[test]
    fn test_modality_rejects_unknown_tag() {
        let err = Modality::from_tag("text").unwrap_err();
        assert_eq!(err.tag, "text");
        assert!(err.to_string().contains("invalid modality tag"));
        assert!(Modality::from_tag("").is_err());
        assert!(Modality::from_tag("audiobook").is_err());
    }

    #[test]
    fn test_layout_counts() {
        assert_eq!(AUDIO_FEATURE_LAYOUT.len(), 4);
        assert_eq!(VIDEO_FEATURE_LAYOUT.len(), 3);
    }

    #[test]
    fn test_metric_lookup() {
        let fs = FeatureSet::Audio(AudioFeatures {
            mfcc_var: 30.0,
            chroma_corr: 0.5,
            spectral_rolloff: 0.4,
            zero_crossing_rate: 0.1,
        });
        assert_eq!(fs.metric("mfcc_var"), Some(30.0));
        assert_eq!(fs.metric("zero_crossing_rate"), Some(0.1));
        assert_eq!(fs.metric("blink_ratio"), None);
        assert_eq!(fs.metric("nonexistent"), None);
    }

    #[test]
    fn test_metrics_follow_layout_order() {
        let fs = FeatureSet::Video(VideoFeatures {
            blink_ratio: 0.3,
            lip_sync: 0.9,
            face_consistency: 0.8,
        });
        let names: Vec<&str> = fs.metrics().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, VIDEO_FEATURE_LAYOUT);
    }

    #[test]
    fn test_feature_set_serializes_flat() {
        let fs = FeatureSet::Audio(AudioFeatures {
            mfcc_var: 25.0,
            chroma_corr: 0.4,
            spectral_rolloff: 0.6,
            zero_crossing_rate: 0.08,
        });
        let json = serde_json::to_value(&fs).unwrap();
        assert_eq!(json["mfcc_var"], 25.0);
        // No enum wrapper in the serialized form
        assert!(json.get("Audio").is_none());
    }
}
