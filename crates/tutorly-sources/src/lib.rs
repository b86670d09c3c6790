//! tutorly-sources — clients for the external lookup services.
//!
//!   wolfram — computational-knowledge lookup used to enrich prompts
//!   google  — web search, relayed to the caller untouched

pub mod google;
pub mod wolfram;

use async_trait::async_trait;
use thiserror::Error;

pub use google::GoogleSearchClient;
pub use wolfram::WolframClient;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

// Request URLs carry API keys; they must not reach callers through error text.
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Http(err.without_url())
    }
}

/// Supplies extra context for a query before it reaches the LLM.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Plain-text facts about `query`; empty when the service knows nothing.
    async fn lookup(&self, query: &str) -> Result<String, SourceError>;
}

/// A web-search backend whose payload is passed through as-is.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<serde_json::Value, SourceError>;
}
