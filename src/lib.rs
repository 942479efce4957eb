//! Search Synth: web search with full-page extraction, synthesized into a
//! single answer by a language model.
//!
//! A request flows through three external providers in strict sequence:
//! search, per-result content extraction (rate limited), and synthesis.

pub mod config;
pub mod error;
pub mod network;
pub mod pipeline;
pub mod providers;
pub mod throttle;
pub mod web;

pub use config::{ApiKeys, Settings};
pub use error::{PipelineError, ProviderError, ValidationError};
pub use pipeline::{Query, QueryOrchestrator, SearchResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
