//! Error types for the namer module.

use thiserror::Error;

/// Errors that can occur while deriving or configuring a directory name.
#[derive(Debug, Error)]
pub enum NamerError {
    /// A required identifying field is missing. No best-effort fallback:
    /// producing a colliding name is worse than refusing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input text the active policy could not normalize. The built-in
    /// policies never return this (Rust string lowercasing is total over
    /// valid UTF-8); it exists for custom policies whose text facilities
    /// can fail. The documented fallback is to pass the offending
    /// characters through as-is rather than fail the whole name.
    #[error("Encoding issue: {0}")]
    Encoding(String),

    /// Invalid policy configuration detected at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl NamerError {
    /// Creates an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an encoding error.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
