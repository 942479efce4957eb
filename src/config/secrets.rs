//! Provider API keys read from the environment

use crate::error::ConfigError;
use std::fmt;

/// Search and extraction provider key
pub const TAVILY_API_KEY: &str = "TAVILY_API_KEY";
/// Language model provider key
pub const MISTRAL_API_KEY: &str = "MISTRAL_API_KEY";

/// Required secrets, in the order they are reported when missing
const REQUIRED: [&str; 2] = [MISTRAL_API_KEY, TAVILY_API_KEY];

/// API keys for the external providers
#[derive(Clone)]
pub struct ApiKeys {
    pub tavily: String,
    pub mistral: String,
}

impl ApiKeys {
    /// Read keys from the process environment, loading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read keys through an arbitrary lookup; blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<String> = REQUIRED
            .iter()
            .filter(|key| get(**key).is_none())
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing));
        }

        Ok(Self {
            tavily: get(TAVILY_API_KEY).unwrap_or_default(),
            mistral: get(MISTRAL_API_KEY).unwrap_or_default(),
        })
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeys")
            .field("tavily", &"<redacted>")
            .field("mistral", &"<redacted>")
            .finish()
    }
}
