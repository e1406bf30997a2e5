//! Authenticity Classifier
//!
//! Only scoring and classification logic, no types and no policy.
//! Input: a feature set. Output: an authenticity score 0-100 and its
//! classification. Deterministic and explainable.

use super::rules::{
    AUDIO_BASE_SCORE, AUTHENTIC_FLOOR, BLINK_RATIO_TARGET, BLINK_RATIO_WEIGHT,
    CHROMA_CORR_MIN_ABS, CHROMA_CORR_PENALTY, FACE_CONSISTENCY_WEIGHT, FAKE_CEILING,
    LIP_SYNC_WEIGHT, MFCC_VAR_MAX, MFCC_VAR_MIN, MFCC_VAR_PENALTY, SCORE_MAX, SCORE_MIN,
    SPECTRAL_ROLLOFF_MAX, SPECTRAL_ROLLOFF_PENALTY, VIDEO_BASE_SCORE, ZERO_CROSSING_MAX,
    ZERO_CROSSING_PENALTY,
};
use super::types::Classification;
use crate::logic::features::{AudioFeatures, FeatureSet, VideoFeatures};

// ============================================================================
// SCORING
// ============================================================================

/// Score any feature set on the authenticity scale
pub fn score(features: &FeatureSet) -> f32 {
    match features {
        FeatureSet::Audio(a) => score_audio(a),
        FeatureSet::Video(v) => score_video(v),
    }
}

/// Audio scoring: base score minus independent penalties.
///
/// Each check fires on its own; a sample can collect all four.
pub fn score_audio(f: &AudioFeatures) -> f32 {
    let mut score = AUDIO_BASE_SCORE;

    if f.mfcc_var < MFCC_VAR_MIN || f.mfcc_var > MFCC_VAR_MAX {
        score -= MFCC_VAR_PENALTY;
    }
    if f.chroma_corr.abs() < CHROMA_CORR_MIN_ABS {
        score -= CHROMA_CORR_PENALTY;
    }
    if f.spectral_rolloff > SPECTRAL_ROLLOFF_MAX {
        score -= SPECTRAL_ROLLOFF_PENALTY;
    }
    if f.zero_crossing_rate > ZERO_CROSSING_MAX {
        score -= ZERO_CROSSING_PENALTY;
    }

    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Video scoring: weighted deductions from the three stand-in metrics
pub fn score_video(f: &VideoFeatures) -> f32 {
    let score = VIDEO_BASE_SCORE
        - (f.blink_ratio - BLINK_RATIO_TARGET).abs() * BLINK_RATIO_WEIGHT
        - (1.0 - f.lip_sync) * LIP_SYNC_WEIGHT
        - (1.0 - f.face_consistency) * FACE_CONSISTENCY_WEIGHT;
    score.clamp(SCORE_MIN, SCORE_MAX)
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify an authenticity score.
///
/// Pure function of the score alone: above 80 is Authentic, at or
/// below 50 is Fake, everything between is Suspicious.
pub fn classify(score: f32) -> Classification {
    if score > AUTHENTIC_FLOOR {
        Classification::Authentic
    } else if score > FAKE_CEILING {
        Classification::Suspicious
    } else {
        Classification::Fake
    }
}

// ============================================================================
// TESTS
// ============================================================================
