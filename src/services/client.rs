// src/services/client.rs

//! Forum REST client.
//!
//! One HTTP GET per public method against the Discourse JSON API. Transport
//! failures, non-200 statuses, and parse failures each surface as their own
//! `AppError` variant; callers decide whether to log, skip, or abort.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ClientConfig;

/// Endpoints checked by `explore_available_apis`, in probe order.
const PROBE_ENDPOINTS: [&str; 8] = [
    "/categories.json",
    "/latest.json",
    "/top.json",
    "/posts.json",
    "/users.json",
    "/tags.json",
    "/about.json",
    "/search.json",
];

/// Wrapper for `categories.json`, defaulting to empty at each nesting level.
#[derive(Debug, Default, Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    category_list: CategoryList,
}

#[derive(Debug, Default, Deserialize)]
struct CategoryList {
    #[serde(default)]
    categories: Vec<Value>,
}

/// Wrapper for topic listings, defaulting to empty at each nesting level.
#[derive(Debug, Default, Deserialize)]
struct TopicListResponse {
    #[serde(default)]
    topic_list: TopicList,
}

#[derive(Debug, Default, Deserialize)]
struct TopicList {
    #[serde(default)]
    topics: Vec<Value>,
}

/// Client for the forum's JSON REST endpoints.
///
/// Owns one `reqwest::Client` (reused for connection pooling) with fixed
/// default headers and a shared per-call timeout. No method retries.
pub struct ForumClient {
    client: Client,
    base_url: Url,
    probe_delay: Duration,
}

impl ForumClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            probe_delay: Duration::from_millis(config.probe_delay_ms),
        })
    }

    /// Fetch the full `site.json` metadata body.
    pub async fn get_site_info(&self) -> Result<Value> {
        self.get("/site.json", &[]).await
    }

    /// Probe the known endpoints and return the paths that answered 200.
    ///
    /// Probe order is preserved and unreachable endpoints are omitted. A
    /// failed probe is a reachability datum, not an error, so it is logged
    /// and absorbed here. The configured pause runs before every probe.
    pub async fn explore_available_apis(&self) -> Vec<String> {
        let mut available = Vec::new();

        for endpoint in PROBE_ENDPOINTS {
            if self.probe_delay.as_millis() > 0 {
                tokio::time::sleep(self.probe_delay).await;
            }

            match self.probe(endpoint).await {
                Ok(StatusCode::OK) => {
                    log::info!("{endpoint}: available");
                    available.push(endpoint.to_string());
                }
                Ok(status) => log::info!("{endpoint}: unavailable ({status})"),
                Err(error) => log::warn!("{endpoint}: probe failed: {error}"),
            }
        }

        available
    }

    /// Fetch the raw category mappings from `categories.json`.
    pub async fn get_categories(&self) -> Result<Vec<Value>> {
        let response: CategoriesResponse = self.get("/categories.json", &[]).await?;
        Ok(response.category_list.categories)
    }

    /// Fetch one page of the latest-topics listing. `page` is zero-based.
    pub async fn get_latest_topics(&self, page: u32) -> Result<Vec<Value>> {
        let response: TopicListResponse = self
            .get("/latest.json", &[("page", page.to_string())])
            .await?;
        Ok(response.topic_list.topics)
    }

    /// Fetch the top-topics listing for a period (e.g. "daily").
    ///
    /// `period` is passed through unvalidated; the service decides what it
    /// accepts.
    pub async fn get_top_topics(&self, period: &str) -> Result<Vec<Value>> {
        let response: TopicListResponse = self
            .get("/top.json", &[("period", period.to_string())])
            .await?;
        Ok(response.topic_list.topics)
    }

    /// Fetch the full detail body for a single topic.
    pub async fn get_topic_posts(&self, topic_id: u64) -> Result<Value> {
        self.get(&format!("/t/{topic_id}.json"), &[]).await
    }

    /// Search topics. The response shape is service-defined and returned
    /// verbatim.
    pub async fn search_topics(&self, query: &str, page: u32) -> Result<Value> {
        self.get(
            "/search.json",
            &[("q", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    /// GET an endpoint, discarding the body and returning the status.
    async fn probe(&self, path: &str) -> Result<StatusCode> {
        let url = self.endpoint_url(path)?;
        let response = self.client.get(url).send().await?;
        Ok(response.status())
    }

    /// GET an endpoint and parse the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        if response.status() != StatusCode::OK {
            return Err(AppError::status(path, response.status()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}
