//! In-memory providers for tests

use super::models::{Query, SearchHit, SearchResult};
use crate::error::ProviderError;
use crate::providers::{AnswerSynthesizer, ContentExtractor, SearchProvider};
use crate::throttle::Throttle;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct FakeSearch {
    hits: Option<Vec<SearchHit>>,
}

impl FakeSearch {
    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self { hits: Some(hits) }
    }

    pub fn failing() -> Self {
        Self { hits: None }
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    fn name(&self) -> &str {
        "fake-search"
    }

    async fn search(&self, _query: &Query, _max: usize) -> Result<Vec<SearchHit>, ProviderError> {
        self.hits.clone().ok_or(ProviderError::Status(502))
    }
}

/// Returns `content of <url>` unless the url is marked as failing
pub struct FakeExtract {
    failing: Vec<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeExtract {
    pub fn ok() -> Self {
        Self {
            failing: vec![],
            calls: Arc::default(),
        }
    }

    pub fn failing_for(url: &str) -> Self {
        Self {
            failing: vec![url.to_string()],
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ContentExtractor for FakeExtract {
    fn name(&self) -> &str {
        "fake-extract"
    }

    async fn extract(&self, url: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.failing.iter().any(|u| u == url) {
            return Err(ProviderError::Empty);
        }
        Ok(format!("content of {}", url))
    }
}

pub struct FakeSynth {
    answer: Option<String>,
    seen: Arc<Mutex<Vec<SearchResult>>>,
}

impl FakeSynth {
    pub fn ok(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            seen: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            seen: Arc::default(),
        }
    }

    pub fn seen(&self) -> Arc<Mutex<Vec<SearchResult>>> {
        self.seen.clone()
    }
}

#[async_trait]
impl AnswerSynthesizer for FakeSynth {
    fn name(&self) -> &str {
        "fake-synth"
    }

    async fn synthesize(
        &self,
        results: &[SearchResult],
        _query: &Query,
    ) -> Result<String, ProviderError> {
        *self.seen.lock().unwrap() = results.to_vec();
        self.answer.clone().ok_or(ProviderError::Status(500))
    }
}

/// Counts permits instead of waiting
#[derive(Default)]
pub struct CountingThrottle {
    count: Arc<AtomicUsize>,
}

impl CountingThrottle {
    pub fn count(&self) -> Arc<AtomicUsize> {
        self.count.clone()
    }
}

#[async_trait]
impl Throttle for CountingThrottle {
    async fn acquire(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
