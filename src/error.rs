//! Error types shared across the crate

use thiserror::Error;

/// Client-side problems with the submitted query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No query provided")]
    MissingQuery,
    #[error("Empty query")]
    EmptyQuery,
}

/// Failure of a single call to an external provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no usable content")]
    Empty,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ProviderError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

/// Failure of a whole search request after validation
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("search failed: {0}")]
    Search(ProviderError),

    #[error("processing failed: {0}")]
    Processing(ProviderError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Message safe to hand back to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Search(_) => "Search failed",
            Self::Processing(_) => "Processing failed",
            Self::Internal(_) => "Internal server error",
        }
    }
}

/// Startup configuration problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<String>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
