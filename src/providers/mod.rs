//! External provider adapters
//!
//! Defines the search, extraction and synthesis traits and their
//! Tavily / Mistral implementations.

mod loader;
mod traits;

pub mod mistral;
pub mod prompt;
pub mod tavily;

pub use loader::ProviderLoader;
pub use traits::*;

use crate::error::ConfigError;
use url::Url;

/// Join an API root and a path, validating the root
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<String, ConfigError> {
    Url::parse(base_url)
        .map_err(|e| ConfigError::Invalid(format!("base url '{}': {}", base_url, e)))?;
    Ok(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}
