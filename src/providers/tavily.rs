//! Tavily search and extract adapters

use super::endpoint;
use super::traits::{ContentExtractor, SearchProvider};
use crate::config::{timeout_secs, ExtractSettings, SearchSettings};
use crate::error::{ConfigError, ProviderError};
use crate::network::{HttpClient, ProviderRequest, ProviderResponse};
use crate::pipeline::{Query, SearchHit};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Tavily web search
pub struct TavilySearch {
    client: HttpClient,
    api_key: String,
    url: String,
    search_depth: String,
    timeout: Duration,
}

impl TavilySearch {
    pub fn new(
        client: HttpClient,
        api_key: impl Into<String>,
        settings: &SearchSettings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client,
            api_key: api_key.into(),
            url: endpoint(&settings.base_url, "search")?,
            search_depth: settings.search_depth.clone(),
            timeout: timeout_secs("search.timeout", settings.timeout)?,
        })
    }

    /// Build the search request
    pub fn request(&self, query: &Query, max_results: usize) -> ProviderRequest {
        ProviderRequest::post(&self.url)
            .bearer(&self.api_key)
            .json(json!({
                "query": query.as_str(),
                "max_results": max_results,
                "search_depth": self.search_depth,
            }))
    }

    /// Parse the search response, dropping items without title, url and content
    pub fn response(
        &self,
        response: ProviderResponse,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let json: Value = response.ensure_success()?.json()?;

        let hits: Vec<SearchHit> = json
            .get("results")
            .and_then(|r| r.as_array())
            .map(|items| items.iter().filter_map(parse_hit).take(max_results).collect())
            .unwrap_or_default();

        if hits.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(hits)
    }
}

fn parse_hit(item: &Value) -> Option<SearchHit> {
    let field = |name: &str| item.get(name).and_then(|v| v.as_str());
    Some(SearchHit::new(field("title")?, field("url")?, field("content")?))
}

#[async_trait]
impl SearchProvider for TavilySearch {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(
        &self,
        query: &Query,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let request = self.request(query, max_results);
        let response = self
            .client
            .execute_with_timeout(request, self.timeout)
            .await?;
        let hits = self.response(response, max_results)?;
        debug!("tavily returned {} usable results for '{}'", hits.len(), query);
        Ok(hits)
    }
}

/// Tavily page content extraction
pub struct TavilyExtract {
    client: HttpClient,
    api_key: String,
    url: String,
    timeout: Duration,
}

impl TavilyExtract {
    pub fn new(
        client: HttpClient,
        api_key: impl Into<String>,
        settings: &ExtractSettings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client,
            api_key: api_key.into(),
            url: endpoint(&settings.base_url, "extract")?,
            timeout: timeout_secs("extract.timeout", settings.timeout)?,
        })
    }

    /// Build the extract request for a single URL
    pub fn request(&self, url: &str) -> ProviderRequest {
        ProviderRequest::post(&self.url)
            .bearer(&self.api_key)
            .json(json!({ "urls": [url] }))
    }

    /// Pull the page text out of the extract response
    pub fn response(&self, response: ProviderResponse) -> Result<String, ProviderError> {
        let json: Value = response.ensure_success()?.json()?;

        json.get("results")
            .and_then(|r| r.as_array())
            .and_then(|items| items.first())
            .and_then(|item| {
                item.get("raw_content")
                    .or_else(|| item.get("content"))
                    .and_then(|c| c.as_str())
            })
            .filter(|content| !content.trim().is_empty())
            .map(|content| content.to_string())
            .ok_or(ProviderError::Empty)
    }
}

#[async_trait]
impl ContentExtractor for TavilyExtract {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn extract(&self, url: &str) -> Result<String, ProviderError> {
        let request = self.request(url);
        let response = self
            .client
            .execute_with_timeout(request, self.timeout)
            .await?;
        self.response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn search_settings(base_url: &str) -> SearchSettings {
        SearchSettings {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    fn extract_settings(base_url: &str) -> ExtractSettings {
        ExtractSettings {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    fn ok(body: Value) -> ProviderResponse {
        ProviderResponse {
            status: 200,
            text: body.to_string(),
            url: String::new(),
        }
    }

    fn searcher() -> TavilySearch {
        TavilySearch::new(HttpClient::new().unwrap(), "tv-key", &SearchSettings::default()).unwrap()
    }

    fn extractor() -> TavilyExtract {
        TavilyExtract::new(HttpClient::new().unwrap(), "tv-key", &ExtractSettings::default())
            .unwrap()
    }

    #[test]
    fn test_search_request() {
        let query = Query::parse(Some("rust async")).unwrap();
        let request = searcher().request(&query, 5);

        assert_eq!(request.url, "https://api.tavily.com/search");
        assert_eq!(request.headers.get("Authorization").unwrap(), "Bearer tv-key");
        let body = request.body.unwrap();
        assert_eq!(body["query"], "rust async");
        assert_eq!(body["max_results"], 5);
        assert_eq!(body["search_depth"], "advanced");
    }

    #[test]
    fn test_search_filters_incomplete_items() {
        let response = ok(json!({
            "results": [
                {"title": "A", "url": "https://a.org", "content": "a snippet"},
                {"title": "B", "url": "https://b.org"},
                {"url": "https://c.org", "content": "c snippet"},
                {"title": "D", "url": null, "content": "d"},
                {"title": "E", "url": "https://e.org", "content": "e snippet", "score": 0.4}
            ]
        }));

        let hits = searcher().response(response, 5).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], SearchHit::new("A", "https://a.org", "a snippet"));
        assert_eq!(hits[1].url, "https://e.org");
    }

    #[test]
    fn test_search_caps_results() {
        let items: Vec<Value> = (0..8)
            .map(|i| json!({"title": format!("T{i}"), "url": format!("https://x.org/{i}"), "content": "c"}))
            .collect();
        let hits = searcher().response(ok(json!({ "results": items })), 3).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[2].title, "T2");
    }

    #[test]
    fn test_search_no_usable_results() {
        assert!(matches!(
            searcher().response(ok(json!({"results": []})), 5),
            Err(ProviderError::Empty)
        ));
        assert!(matches!(
            searcher().response(ok(json!({"results": [{"title": "only title"}]})), 5),
            Err(ProviderError::Empty)
        ));
        assert!(matches!(
            searcher().response(ok(json!({"answer": "x"})), 5),
            Err(ProviderError::Empty)
        ));
    }

    #[test]
    fn test_search_http_error() {
        let response = ProviderResponse {
            status: 401,
            text: "{\"detail\":\"bad key\"}".into(),
            url: String::new(),
        };
        assert!(matches!(
            searcher().response(response, 5),
            Err(ProviderError::Status(401))
        ));
    }

    #[test]
    fn test_extract_response() {
        let content = extractor()
            .response(ok(json!({
                "results": [{"url": "https://a.org", "raw_content": "Full article text"}],
                "failed_results": []
            })))
            .unwrap();
        assert_eq!(content, "Full article text");
    }

    #[test]
    fn test_extract_missing_content() {
        let failed = ok(json!({
            "results": [],
            "failed_results": [{"url": "https://a.org", "error": "blocked"}]
        }));
        assert!(matches!(extractor().response(failed), Err(ProviderError::Empty)));

        let blank = ok(json!({"results": [{"url": "https://a.org", "raw_content": "   "}]}));
        assert!(matches!(extractor().response(blank), Err(ProviderError::Empty)));

        let malformed = ProviderResponse {
            status: 200,
            text: "not json".into(),
            url: String::new(),
        };
        assert!(matches!(
            extractor().response(malformed),
            Err(ProviderError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_search_against_mock_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("authorization", "Bearer tv-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": "capital of France",
                "results": [
                    {"title": "Paris", "url": "https://en.wikipedia.org/wiki/Paris", "content": "Paris is the capital of France."},
                    {"title": "France", "url": "https://en.wikipedia.org/wiki/France", "content": "France's capital is Paris."}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let search =
            TavilySearch::new(HttpClient::new().unwrap(), "tv-key", &search_settings(&server.uri()))
                .unwrap();
        let query = Query::parse(Some("capital of France")).unwrap();
        let hits = search.search(&query, 5).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Paris");
    }

    #[tokio::test]
    async fn test_extract_against_mock_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"url": "https://a.org", "raw_content": "Extracted body"}]
            })))
            .mount(&server)
            .await;

        let extract = TavilyExtract::new(
            HttpClient::new().unwrap(),
            "tv-key",
            &extract_settings(&server.uri()),
        )
        .unwrap();
        assert_eq!(extract.extract("https://a.org").await.unwrap(), "Extracted body");

        let received = server.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(sent["urls"], json!(["https://a.org"]));
    }

    #[tokio::test]
    async fn test_extract_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let extract = TavilyExtract::new(
            HttpClient::new().unwrap(),
            "tv-key",
            &extract_settings(&server.uri()),
        )
        .unwrap();
        assert!(matches!(
            extract.extract("https://a.org").await,
            Err(ProviderError::Status(500))
        ));
    }
}
