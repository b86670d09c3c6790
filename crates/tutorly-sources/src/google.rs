//! Google Programmable Search (Custom Search JSON API) client.
//!
//! Endpoint: https://www.googleapis.com/customsearch/v1
//!
//! The response is returned as an opaque JSON value; its schema belongs to Google.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{SearchProvider, SourceError};

const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

pub struct GoogleSearchClient {
    search_url: String,
    api_key: SecretString,
    cx: String,
    client: reqwest::Client,
}

impl GoogleSearchClient {
    pub fn new(api_key: SecretString, cx: impl Into<String>) -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            api_key,
            cx: cx.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Value, SourceError> {
        let params = [
            ("key", self.api_key.expose_secret()),
            ("cx", self.cx.as_str()),
            ("q", query),
        ];

        let resp = self.client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await?;

        // Google reports its own errors inside the JSON body; relay them unchanged.
        let status = resp.status();
        let body = resp.json::<Value>().await?;
        debug!(status = status.as_u16(), "search service responded");
        Ok(body)
    }
}
