//! Web search passthrough.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use tutorly_common::error::{ApiError, ApiResult};

use crate::state::SharedState;

/// GET /api/google?q=... — returns the search service's JSON unchanged.
pub async fn google_search(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Value>> {
    let query = params
        .get("q")
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing query".to_string()))?;

    let provider = state.search.as_ref().ok_or_else(|| {
        ApiError::NotConfigured("search service is not configured (GOOGLE_API_KEY, GOOGLE_CX)".to_string())
    })?;

    let body = provider.search(query).await.map_err(ApiError::upstream)?;
    Ok(Json(body))
}
