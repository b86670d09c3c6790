//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tutorly_common::Config;
use tutorly_llm::{LlmBackend, OpenAiBackend};
use tutorly_sources::{GoogleSearchClient, KnowledgeSource, SearchProvider, WolframClient};

/// Shared state injected into every Axum handler.
///
/// Built once from [`Config`] and never mutated afterwards. A `None` client
/// means its credentials were not configured.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn LlmBackend>>,
    pub knowledge: Option<Arc<dyn KnowledgeSource>>,
    pub search: Option<Arc<dyn SearchProvider>>,
    pub system_prompt: String,
    pub static_dir: PathBuf,
}

impl AppState {
    /// State with no upstream clients, serving the frontend from `static_dir`.
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            llm: None,
            knowledge: None,
            search: None,
            system_prompt: tutorly_common::config::LlmConfig::default().system_prompt,
            static_dir: static_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(&config.server.static_dir);
        state.system_prompt = config.llm.system_prompt.clone();

        match &config.llm.api_key {
            Some(key) => {
                let backend = OpenAiBackend::new(key.clone(), &config.llm.model)
                    .with_base_url(&config.llm.base_url);
                info!(model = backend.model_id(), "completion backend ready");
                state.llm = Some(Arc::new(backend));
            }
            None => warn!("OPENAI_API_KEY is not set; /api/ask will fail"),
        }

        match &config.wolfram.app_id {
            Some(app_id) => {
                let client = WolframClient::new(app_id.clone())
                    .with_base_url(&config.wolfram.base_url);
                state.knowledge = Some(Arc::new(client));
                info!("Wolfram|Alpha enrichment enabled");
            }
            None => info!("WOLFRAM_APPID is not set; answers will not be enriched"),
        }

        match (&config.google.api_key, &config.google.cx) {
            (Some(key), Some(cx)) => {
                let client = GoogleSearchClient::new(key.clone(), cx)
                    .with_search_url(&config.google.search_url);
                state.search = Some(Arc::new(client));
            }
            _ => warn!("GOOGLE_API_KEY or GOOGLE_CX is not set; /api/google will fail"),
        }

        state
    }

    pub fn with_llm(mut self, llm: Arc<dyn LlmBackend>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn with_knowledge(mut self, source: Arc<dyn KnowledgeSource>) -> Self {
        self.knowledge = Some(source);
        self
    }

    pub fn with_search(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.search = Some(provider);
        self
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

pub type SharedState = Arc<AppState>;
