//! Settings structures for Search Synth configuration

use crate::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub extract: ExtractSettings,
    pub llm: LlmSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEARCH_SYNTH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEARCH_SYNTH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("SEARCH_SYNTH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SEARCH_SYNTH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SEARCH_SYNTH_MAX_RESULTS") {
            if let Ok(max) = val.parse() {
                self.search.max_results = max;
            }
        }
        if let Ok(val) = std::env::var("SEARCH_SYNTH_EXTRACT_INTERVAL_MS") {
            if let Ok(ms) = val.parse() {
                self.extract.interval_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("SEARCH_SYNTH_LLM_MODEL") {
            self.llm.model = val;
        }
    }

    /// Reject values the providers cannot work with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.search.max_results == 0 {
            return Err(ConfigError::Invalid(
                "search.max_results must be at least 1".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::Invalid(format!(
                "llm.temperature must be between 0 and 2, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.max_tokens == 0 {
            return Err(ConfigError::Invalid(
                "llm.max_tokens must be at least 1".to_string(),
            ));
        }

        for (name, base) in [
            ("search.base_url", &self.search.base_url),
            ("extract.base_url", &self.extract.base_url),
            ("llm.base_url", &self.llm.base_url),
        ] {
            Url::parse(base)
                .map_err(|e| ConfigError::Invalid(format!("{} '{}': {}", name, base, e)))?;
        }

        for (name, secs) in [
            ("search.timeout", self.search.timeout),
            ("extract.timeout", self.extract.timeout),
            ("llm.timeout", self.llm.timeout),
            ("outgoing.request_timeout", self.outgoing.request_timeout),
        ] {
            timeout_secs(name, secs)?;
        }

        Ok(())
    }
}

/// Convert a timeout in seconds, rejecting zero, negative and non-finite values
pub fn timeout_secs(name: &str, secs: f64) -> std::result::Result<Duration, ConfigError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "{} must be a positive number of seconds, got {}",
            name, secs
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| ConfigError::Invalid(format!("{} {}: {}", name, secs, e)))
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed on the landing page
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Search Synth".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5001,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Web search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Provider API root
    pub base_url: String,
    /// Maximum number of results kept per query
    pub max_results: usize,
    /// Search depth requested from the provider
    pub search_depth: String,
    /// Per-call timeout in seconds
    pub timeout: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.tavily.com".to_string(),
            max_results: 5,
            search_depth: "advanced".to_string(),
            timeout: 30.0,
        }
    }
}

/// Content extraction provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Provider API root
    pub base_url: String,
    /// Minimum spacing between extraction calls, in milliseconds
    pub interval_ms: u64,
    /// Per-call timeout in seconds
    pub timeout: f64,
}

impl ExtractSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.tavily.com".to_string(),
            interval_ms: 1000,
            timeout: 30.0,
        }
    }
}

/// Language model provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Provider API root
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Cap on generated tokens
    pub max_tokens: u32,
    /// Per-call timeout in seconds
    pub timeout: f64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.mistral.ai".to_string(),
            model: "mistral-medium".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            timeout: 60.0,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            pool_maxsize: 10,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
