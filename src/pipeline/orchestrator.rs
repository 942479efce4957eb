//! Search → extract → synthesize orchestration

use super::models::{Query, SearchHit, SearchOutcome, SearchResult};
use crate::error::{PipelineError, ProviderError};
use crate::providers::{AnswerSynthesizer, ContentExtractor, SearchProvider};
use crate::throttle::Throttle;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default cap on search results per query
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Runs one search request through the three providers, strictly in sequence.
///
/// Provider handles are built once at startup and shared read-only between
/// requests; everything else lives for a single call to [`handle_search`].
///
/// [`handle_search`]: QueryOrchestrator::handle_search
pub struct QueryOrchestrator {
    searcher: Arc<dyn SearchProvider>,
    extractor: Arc<dyn ContentExtractor>,
    synthesizer: Arc<dyn AnswerSynthesizer>,
    throttle: Arc<dyn Throttle>,
    max_results: usize,
}

impl QueryOrchestrator {
    pub fn new(
        searcher: Arc<dyn SearchProvider>,
        extractor: Arc<dyn ContentExtractor>,
        synthesizer: Arc<dyn AnswerSynthesizer>,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        Self {
            searcher,
            extractor,
            synthesizer,
            throttle,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the result cap (at least 1)
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Search, enrich every hit with its page content, then synthesize an answer
    pub async fn handle_search(&self, query: &Query) -> Result<SearchOutcome, PipelineError> {
        let start = Instant::now();

        let hits = self.search(query).await?;
        info!(
            "'{}': {} results from {}",
            query,
            hits.len(),
            self.searcher.name()
        );

        let results = self.enrich(hits).await;

        let answer = self
            .synthesizer
            .synthesize(&results, query)
            .await
            .map_err(|e| {
                warn!("{} synthesis failed: {}", self.synthesizer.name(), e);
                PipelineError::Processing(e)
            })?;

        info!("'{}' answered in {:?}", query, start.elapsed());
        Ok(SearchOutcome { results, answer })
    }

    async fn search(&self, query: &Query) -> Result<Vec<SearchHit>, PipelineError> {
        let mut hits = self
            .searcher
            .search(query, self.max_results)
            .await
            .map_err(|e| {
                warn!("{} search failed: {}", self.searcher.name(), e);
                PipelineError::Search(e)
            })?;

        if hits.is_empty() {
            warn!("{} returned no usable results", self.searcher.name());
            return Err(PipelineError::Search(ProviderError::Empty));
        }

        hits.truncate(self.max_results);
        Ok(hits)
    }

    /// One extraction per hit, in ranking order, each gated by the throttle.
    /// A failed extraction falls back to the hit's snippet.
    async fn enrich(&self, hits: Vec<SearchHit>) -> Vec<SearchResult> {
        let mut results = Vec::with_capacity(hits.len());
        let mut fallbacks = 0usize;

        for hit in hits {
            self.throttle.acquire().await;

            let extracted = match self.extractor.extract(&hit.url).await {
                Ok(content) => {
                    debug!("extracted {} chars from {}", content.len(), hit.url);
                    Some(content)
                }
                Err(e) => {
                    warn!("Content extraction error for URL {}: {}", hit.url, e);
                    fallbacks += 1;
                    None
                }
            };

            results.push(hit.enrich(extracted));
        }

        if fallbacks > 0 {
            info!(
                "{} of {} results fell back to snippets",
                fallbacks,
                results.len()
            );
        }

        results
    }
}
