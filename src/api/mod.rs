//! API Module
//!
//! Command boundary of the core. Embedders and the console runner call
//! these functions; nothing above this layer reaches into the pipeline
//! stages directly.
//!
//! Structure:
//! - commands.rs: Current stable API implementation

pub mod commands;

// Re-export current version as default
pub use commands::*;
