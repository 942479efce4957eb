//! Configuration module for Search Synth
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod secrets;
mod settings;

pub use secrets::{ApiKeys, MISTRAL_API_KEY, TAVILY_API_KEY};
pub use settings::*;
