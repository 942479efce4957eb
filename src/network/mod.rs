//! HTTP networking module
//!
//! Provides the outbound HTTP client used by the provider adapters.

mod client;
mod request;

pub use client::HttpClient;
pub use request::{HttpMethod, ProviderRequest, ProviderResponse};
