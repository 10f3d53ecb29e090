//! Search augmentation for topics without a hand-authored roadmap.
//!
//! Only constructed when both an API key and a search engine id are set.
//! One request per lookup, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::SearchCredentials;

const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, topic: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Query text sent for a topic.
pub fn search_query(topic: &str) -> String {
    format!("{topic} learning roadmap course tutorial")
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchApiError {
    error: SearchApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct SearchApiErrorBody {
    message: String,
}

/// Custom Search JSON API client.
#[derive(Clone)]
pub struct CustomSearchClient {
    client: Client,
    credentials: SearchCredentials,
}

impl CustomSearchClient {
    pub fn new(credentials: SearchCredentials) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            credentials,
        })
    }
}

#[async_trait]
impl SearchProvider for CustomSearchClient {
    async fn search(&self, topic: &str) -> Result<Vec<SearchResult>, SearchError> {
        let q = search_query(topic);
        debug!("Searching for '{q}'");

        let response = self
            .client
            .get(&self.credentials.endpoint)
            .query(&[
                ("key", self.credentials.api_key.as_str()),
                ("cx", self.credentials.engine_id.as_str()),
                ("q", q.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<SearchApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "Search failed".to_string());
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed
            .items
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                link: item.link,
                snippet: item.snippet,
            })
            .collect())
    }
}
