use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::SearchResult;
use crate::error::RelayError;
use crate::extractor::extract_results;

use super::AppState;
use super::models::SearchRequest;

/// Liveness probe. Answers every GET regardless of path.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], "OK")
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<SearchResult>>, RelayError> {
    let start = Instant::now();

    let body: Value = serde_json::from_slice(&body).map_err(|_| RelayError::InvalidJson)?;
    if !body.is_object() {
        return Err(RelayError::Internal(
            "request body is not a JSON object".to_string(),
        ));
    }
    let request: SearchRequest =
        serde_json::from_value(body).map_err(|e| RelayError::Internal(e.to_string()))?;
    let query = request.query().ok_or(RelayError::MissingQuery)?;

    let payload = state.leta.search(query, state.config.engine).await?;
    let results = extract_results(&payload, request.max_results());

    tracing::info!(
        query,
        engine = %state.config.engine,
        requested = request.count,
        returned = results.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search relayed"
    );

    Ok(Json(results))
}
