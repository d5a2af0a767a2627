//! Error types for the wellness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wellness_core operations
///
/// Invalid answers typed at a prompt are not errors; the collector
/// re-prompts for those. Everything here ends the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard input ended before every question was answered
    #[error("input ended before {field} was provided")]
    InputClosed { field: &'static str },
}
