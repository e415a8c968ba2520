//! Error types for Finn.

use thiserror::Error;

/// Library-level error type for Finn operations.
#[derive(Error, Debug)]
pub enum FinnError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Content extraction failed: {0}")]
    Extraction(String),

    #[error("Unrecognized content format: {0}")]
    UnrecognizedFormat(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Groq API error: {0}")]
    Groq(String),

    #[error("Summarization failed: {0}")]
    Summarize(String),

    #[error("Tool lookup failed: {0}")]
    ToolFailed(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Finn operations.
pub type Result<T> = std::result::Result<T, FinnError>;
