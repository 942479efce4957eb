//! Provider traits

use crate::error::ProviderError;
use crate::pipeline::{Query, SearchHit, SearchResult};
use async_trait::async_trait;

/// Web search service returning ranked hits
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Search for `query`, keeping at most `max_results` complete hits.
    /// Returns `ProviderError::Empty` when no complete hit survives.
    async fn search(
        &self,
        query: &Query,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, ProviderError>;
}

/// Service that returns the readable text of a page
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Fetch the full text content of `url`
    async fn extract(&self, url: &str) -> Result<String, ProviderError>;
}

/// Language model that turns enriched results into one answer
#[async_trait]
pub trait AnswerSynthesizer: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Produce an answer for `query` from `results`.
    /// Returns `ProviderError::InvalidInput` when `results` is empty.
    async fn synthesize(
        &self,
        results: &[SearchResult],
        query: &Query,
    ) -> Result<String, ProviderError>;
}
