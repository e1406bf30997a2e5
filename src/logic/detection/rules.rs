//! Detection Rules & Thresholds
//!
//! Scoring penalties and classification boundaries. No classify logic
//! here, only constants; `classifier` applies them.

// ============================================================================
// SCORE RANGE
// ============================================================================

/// Lowest possible authenticity score
pub const SCORE_MIN: f32 = 0.0;

/// Highest possible authenticity score
pub const SCORE_MAX: f32 = 100.0;

// ============================================================================
// AUDIO PENALTIES (independent, not mutually exclusive)
// ============================================================================

/// Every audio score starts here before penalties apply
pub const AUDIO_BASE_SCORE: f32 = 85.0;

/// Natural MFCC variance band; values outside [min, max] are penalized
pub const MFCC_VAR_MIN: f32 = 10.0;
pub const MFCC_VAR_MAX: f32 = 50.0;
pub const MFCC_VAR_PENALTY: f32 = 20.0;

/// Harmonic-structure floor; |chroma_corr| below this is penalized
pub const CHROMA_CORR_MIN_ABS: f32 = 0.1;
pub const CHROMA_CORR_PENALTY: f32 = 15.0;

/// Rolloff ceiling (fraction of Nyquist); energy concentrated above
/// this is penalized
pub const SPECTRAL_ROLLOFF_MAX: f32 = 0.8;
pub const SPECTRAL_ROLLOFF_PENALTY: f32 = 10.0;

/// Natural speech stays under this sign-change rate
pub const ZERO_CROSSING_MAX: f32 = 0.15;
pub const ZERO_CROSSING_PENALTY: f32 = 25.0;

// ============================================================================
// VIDEO SCORING WEIGHTS
// ============================================================================

/// Every video score starts here before deductions apply
pub const VIDEO_BASE_SCORE: f32 = 85.0;

/// Natural blink interval ratio; deviation is weighted heavily
pub const BLINK_RATIO_TARGET: f32 = 0.3;
pub const BLINK_RATIO_WEIGHT: f32 = 100.0;

/// Deduction weight for imperfect lip/audio alignment
pub const LIP_SYNC_WEIGHT: f32 = 30.0;

/// Deduction weight for frame-to-frame face instability
pub const FACE_CONSISTENCY_WEIGHT: f32 = 25.0;

// ============================================================================
// CLASSIFICATION BOUNDARIES
// ============================================================================

/// Scores strictly above this are Authentic
pub const AUTHENTIC_FLOOR: f32 = 80.0;

/// Scores at or below this are Fake; between the two bounds is
/// Suspicious
pub const FAKE_CEILING: f32 = 50.0;
