//! Detection Module
//!
//! Scores extracted features and classifies them as authentic,
//! suspicious, or fake. This is the first pipeline stage and the only
//! one that touches raw media.
//!
//! ## Structure
//! - `types`: Core types (Classification, AnalysisInput, DetectionResult)
//! - `rules`: Scoring thresholds and penalty weights
//! - `classifier`: Pure scoring and classification logic
//! - `agent`: Async front door with bounded extraction and fallback
//!
//! ## Usage
//! ```ignore
//! use crate::logic::detection::{AnalysisInput, DetectionAgent};
//!
//! let agent = DetectionAgent::new(&config);
//! let result = agent.analyze(input).await;
//! match result.classification {
//!     Classification::Authentic => println!("Allow"),
//!     Classification::Suspicious => println!("Restrict"),
//!     Classification::Fake => println!("Deceive"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod classifier;
pub mod agent;

// Re-export main types for convenience
pub use types::{
    Classification,
    AnalysisInput,
    AnalysisMethod,
    DetectionResult,
};

pub use rules::{
    AUTHENTIC_FLOOR,
    FAKE_CEILING,
    SCORE_MAX,
    SCORE_MIN,
};

pub use classifier::{classify, score};

pub use agent::DetectionAgent;
