//! Application state shared across handlers

use crate::config::Settings;
use crate::pipeline::QueryOrchestrator;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search pipeline with its provider handles
    pub orchestrator: Arc<QueryOrchestrator>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, orchestrator: QueryOrchestrator) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            orchestrator: Arc::new(orchestrator),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
