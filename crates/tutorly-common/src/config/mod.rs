//! Configuration loading for Tutorly.
//!
//! Sources, lowest to highest precedence:
//!   1. built-in defaults
//!   2. tutorly.toml (or the path in TUTORLY_CONFIG)
//!   3. process environment, after loading `.env` with dotenvy
//!
//! The resulting `Config` is immutable and handed to the server once at startup.

use anyhow::Context;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "tutorly.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub wolfram: WolframConfig,
    #[serde(default)]
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the frontend bundle; must contain index.html.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "0.0.0.0".to_string() }
fn default_port()       -> u16    { 3000 }
fn default_static_dir() -> String { "public".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    /// OPENAI_API_KEY. Required for /api/ask.
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

fn default_llm_model()       -> String { "gpt-4o-mini".to_string() }
fn default_openai_base_url() -> String { "https://api.openai.com".to_string() }
fn default_system_prompt()   -> String {
    "You are an intelligent AI tutor capable of answering ANY subject in detail.".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_llm_model(),
            system_prompt: default_system_prompt(),
            base_url: default_openai_base_url(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WolframConfig {
    #[serde(default = "default_wolfram_base_url")]
    pub base_url: String,
    /// WOLFRAM_APPID. Enrichment is skipped entirely when absent.
    #[serde(default)]
    pub app_id: Option<SecretString>,
}

fn default_wolfram_base_url() -> String { "https://api.wolframalpha.com".to_string() }

impl Default for WolframConfig {
    fn default() -> Self {
        Self { base_url: default_wolfram_base_url(), app_id: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    #[serde(default = "default_google_search_url")]
    pub search_url: String,
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Programmable Search Engine id (`cx`).
    #[serde(default)]
    pub cx: Option<String>,
}

fn default_google_search_url() -> String {
    "https://www.googleapis.com/customsearch/v1".to_string()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self { search_url: default_google_search_url(), api_key: None, cx: None }
    }
}

#[cfg(test)]
mod tests;

impl Config {
    /// Load configuration from `.env`, tutorly.toml and the environment.
    /// Checks TUTORLY_CONFIG env var first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        // A missing .env is normal in production.
        let _ = dotenvy::dotenv();

        let explicit = std::env::var("TUTORLY_CONFIG").ok();
        let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {path}"))?;
            Self::from_toml_str(&content).with_context(|| format!("parsing {path}"))?
        } else if explicit.is_some() {
            anyhow::bail!("Config file not found: {path} (set by TUTORLY_CONFIG)");
        } else {
            Self::default()
        };

        config.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides. Empty values count as unset.
    pub fn with_env<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a TCP port number, got {port:?}"))?;
        }
        if let Some(dir) = var("STATIC_DIR") {
            self.server.static_dir = dir;
        }

        if let Some(key) = var("OPENAI_API_KEY") {
            self.llm.api_key = Some(SecretString::from(key));
        }
        if let Some(url) = var("OPENAI_BASE_URL") {
            self.llm.base_url = url;
        }

        if let Some(id) = var("WOLFRAM_APPID") {
            self.wolfram.app_id = Some(SecretString::from(id));
        }
        if let Some(url) = var("WOLFRAM_BASE_URL") {
            self.wolfram.base_url = url;
        }

        if let Some(key) = var("GOOGLE_API_KEY") {
            self.google.api_key = Some(SecretString::from(key));
        }
        if let Some(cx) = var("GOOGLE_CX") {
            self.google.cx = Some(cx);
        }
        if let Some(url) = var("GOOGLE_SEARCH_URL") {
            self.google.search_url = url;
        }

        Ok(self)
    }

    pub fn enrichment_enabled(&self) -> bool {
        self.wolfram.app_id.is_some()
    }
}
