//! Tutor endpoint: optional Wolfram|Alpha enrichment, then one chat completion.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use tutorly_common::error::{ApiError, ApiResult};
use tutorly_llm::{answer_or_placeholder, build_messages, LlmRequest};

use crate::state::{AppState, SharedState};

/// Request body for `POST /api/ask`.
///
/// `query` is deliberately untyped: any JSON value is accepted and rendered
/// into the prompt, and a missing value renders as nothing.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: Option<Value>,
}

impl AskRequest {
    pub fn query_text(&self) -> String {
        match &self.query {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// POST /api/ask
pub async fn ask(
    State(state): State<SharedState>,
    body: Bytes,
) -> ApiResult<Json<AskResponse>> {
    let req = parse_body(&body)?;
    let query = req.query_text();

    let llm = state.llm.as_ref().ok_or_else(|| {
        ApiError::NotConfigured("completion service is not configured (OPENAI_API_KEY)".to_string())
    })?;

    let enrichment = enrich(&state, &query).await;
    let messages = build_messages(&state.system_prompt, &query, &enrichment);

    let completion = llm
        .complete(LlmRequest { messages, model: None })
        .await
        .map_err(ApiError::upstream)?;

    Ok(Json(AskResponse {
        answer: answer_or_placeholder(completion.content),
    }))
}

/// An empty body is treated as `{}`; anything else must be JSON.
fn parse_body(body: &[u8]) -> ApiResult<AskRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AskRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// Knowledge lookup never fails the request; any error yields no enrichment.
async fn enrich(state: &AppState, query: &str) -> String {
    let Some(source) = &state.knowledge else {
        return String::new();
    };
    match source.lookup(query).await {
        Ok(text) => {
            debug!(chars = text.len(), "prompt enriched");
            text
        }
        Err(e) => {
            warn!("knowledge lookup failed, continuing without it: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_text_rendering() {
        let render = |v: Value| serde_json::from_value::<AskRequest>(v).unwrap().query_text();
        assert_eq!(render(json!({ "query": "What is 2+2?" })), "What is 2+2?");
        assert_eq!(render(json!({})), "");
        assert_eq!(render(json!({ "query": null })), "");
        assert_eq!(render(json!({ "query": 42 })), "42");
        assert_eq!(render(json!({ "query": ["a", 1] })), r#"["a",1]"#);
    }

    #[test]
    fn test_parse_body() {
        assert!(parse_body(b"").unwrap().query.is_none());
        assert!(parse_body(b"  \n").unwrap().query.is_none());
        assert_eq!(parse_body(br#"{"query":"hi","extra":true}"#).unwrap().query_text(), "hi");
        assert!(matches!(parse_body(b"{not json"), Err(ApiError::BadRequest(_))));
    }
}
