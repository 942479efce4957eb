//! Request-scoped data models

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, trimmed, non-empty user query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Validate a raw query field; `None` means the field was absent
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = raw.ok_or(ValidationError::MissingQuery)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ranked hit from the search provider, before extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchHit {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }

    /// Attach extracted content, falling back to the snippet
    pub fn enrich(self, extracted: Option<String>) -> SearchResult {
        let full_content = extracted.unwrap_or_else(|| self.snippet.clone());
        SearchResult {
            title: self.title,
            url: self.url,
            snippet: self.snippet,
            full_content,
        }
    }
}

/// A search hit enriched with its page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "name")]
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub full_content: String,
}

/// Everything a successful search produces
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Enriched results in provider ranking order
    pub results: Vec<SearchResult>,
    /// Synthesized answer
    pub answer: String,
}
