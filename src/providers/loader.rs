//! Provider loader for wiring adapters from configuration

use super::mistral::MistralSynthesizer;
use super::tavily::{TavilyExtract, TavilySearch};
use crate::config::{ApiKeys, Settings};
use crate::network::HttpClient;
use crate::pipeline::QueryOrchestrator;
use crate::throttle;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Loader for constructing the provider adapters from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Build the orchestrator with every provider it needs
    pub fn load(settings: &Settings, keys: &ApiKeys, client: HttpClient) -> Result<QueryOrchestrator> {
        settings.validate()?;

        let searcher = TavilySearch::new(client.clone(), keys.tavily.clone(), &settings.search)?;
        let extractor = TavilyExtract::new(client.clone(), keys.tavily.clone(), &settings.extract)?;
        let synthesizer = MistralSynthesizer::new(client, keys.mistral.clone(), &settings.llm)?;

        info!(
            "Providers: search={} (depth {}), extract={} (every {:?}), llm={}",
            settings.search.base_url,
            settings.search.search_depth,
            settings.extract.base_url,
            settings.extract.interval(),
            settings.llm.model
        );

        Ok(QueryOrchestrator::new(
            Arc::new(searcher),
            Arc::new(extractor),
            Arc::new(synthesizer),
            throttle::for_interval(settings.extract.interval()),
        )
        .with_max_results(settings.search.max_results))
    }
}
