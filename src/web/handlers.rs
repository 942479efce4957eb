//! HTTP request handlers

use super::errors::error_response;
use super::state::AppState;
use crate::error::ValidationError;
use crate::pipeline::{Query, SearchResult};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tera::Context;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Successful search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_results: Vec<SearchResult>,
    pub processed_response: String,
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("version", crate::VERSION);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Pull the query out of a raw request body.
/// Anything that is not a JSON object with a string `query` counts as missing.
pub fn parse_query(body: &[u8]) -> Result<Query, ValidationError> {
    let object: Map<String, Value> =
        serde_json::from_slice(body).map_err(|_| ValidationError::MissingQuery)?;
    match object.get("query") {
        Some(Value::String(raw)) => Query::parse(Some(raw)),
        _ => Err(ValidationError::MissingQuery),
    }
}

/// Search handler
pub async fn search(State(state): State<AppState>, body: Bytes) -> Response {
    let span = info_span!("search", request_id = %Uuid::new_v4());

    async move {
        let query = match parse_query(&body) {
            Ok(query) => query,
            Err(e) => {
                tracing::debug!("rejected search request: {}", e);
                return e.into_response();
            }
        };

        match state.orchestrator.handle_search(&query).await {
            Ok(outcome) => Json(SearchResponse {
                search_results: outcome.results,
                processed_response: outcome.answer,
            })
            .into_response(),
            Err(e) => {
                tracing::error!("search for '{}' failed: {}", query, e);
                e.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
