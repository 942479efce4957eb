//! Query pipeline module
//!
//! Validates the query, runs search, extraction and synthesis in order,
//! and returns the enriched results with the answer.

mod models;
mod orchestrator;
#[cfg(test)]
pub(crate) mod testing;

pub use models::*;
pub use orchestrator::{QueryOrchestrator, DEFAULT_MAX_RESULTS};
