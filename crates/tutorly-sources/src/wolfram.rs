//! Wolfram|Alpha Full Results API client.
//!
//! Endpoint: https://api.wolframalpha.com/v2/query
//!
//! Only the plaintext of each subpod is kept. Subpods within a pod are joined
//! with a newline, pods with a blank line.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{KnowledgeSource, SourceError};

const DEFAULT_BASE_URL: &str = "https://api.wolframalpha.com";

pub struct WolframClient {
    base_url: String,
    app_id: SecretString,
    client: reqwest::Client,
}

impl WolframClient {
    pub fn new(app_id: SecretString) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl KnowledgeSource for WolframClient {
    #[instrument(skip(self))]
    async fn lookup(&self, query: &str) -> Result<String, SourceError> {
        let url = format!("{}/v2/query", self.base_url.trim_end_matches('/'));
        let params = [
            ("input", query),
            ("format", "plaintext"),
            ("output", "JSON"),
            ("appid", self.app_id.expose_secret()),
        ];

        let resp = self.client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .json::<Value>()
            .await?;

        let text = extract_plaintext(&resp)?;
        debug!(chars = text.len(), "Wolfram lookup returned plaintext");
        Ok(text)
    }
}

/// Flatten `queryresult.pods[*].subpods[*].plaintext`.
///
/// A response without a pods array (no result, or an error result) yields an
/// empty string. A pod without a subpods array is malformed.
pub fn extract_plaintext(resp: &Value) -> Result<String, SourceError> {
    let Some(pods) = resp["queryresult"]["pods"].as_array() else {
        return Ok(String::new());
    };

    let mut sections = Vec::with_capacity(pods.len());
    for pod in pods {
        let subpods = pod["subpods"].as_array().ok_or_else(|| {
            SourceError::Shape(format!(
                "pod {:?} has no subpods array",
                pod["title"].as_str().unwrap_or("<untitled>")
            ))
        })?;
        let lines: Vec<String> = subpods.iter().map(|s| plaintext_of(&s["plaintext"])).collect();
        sections.push(lines.join("\n"));
    }
    Ok(sections.join("\n\n"))
}

fn plaintext_of(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
