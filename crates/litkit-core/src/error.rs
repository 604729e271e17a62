//! # Error Types
//!
//! Native Rust errors for litkit. These cover failures of the library itself,
//! such as a string that names no variant of a closed vocabulary. Expected
//! domain failures reported by the network are NOT modeled here; they travel
//! as [`crate::Either::Left`] carrying a [`crate::LitError`] payload.
//! Configuration loading has its own [`crate::ConfigError`].

use thiserror::Error;

/// Top-level error type for litkit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LitKitError {
    /// A string did not name a known variant of a closed vocabulary.
    #[error("schema validation error: {0}")]
    SchemaValidation(String),
}
