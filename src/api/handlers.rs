use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::request_id::RequestId;
use crate::models::{FilterRequest, RecommendRequest, RecommendResponse, TrendingTitle};
use crate::services::{recommendations, trending};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend up to three titles for a filter selection or free-text query
///
/// Always 200 for a well-formed body; "nothing found" is an `error` payload.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<RecommendRequest>, JsonRejection>,
) -> AppResult<Json<RecommendResponse>> {
    let Json(request) = body?;
    let filter = FilterRequest::from(request);

    tracing::info!(
        request_id = %request_id,
        mood = ?filter.mood,
        content_type = ?filter.content_type,
        region = ?filter.region,
        min_year = filter.min_year,
        age_group = ?filter.age_group,
        free_text = filter.free_text.is_some(),
        "Processing recommendation request"
    );

    let response = recommendations::get_recommendations(state.provider.clone(), filter).await;

    if let RecommendResponse::NoResults { .. } = &response {
        tracing::info!(request_id = %request_id, "No recommendations found");
    }

    Ok(Json(response))
}

/// This week's trending titles
pub async fn trending(State(state): State<AppState>) -> Json<Vec<TrendingTitle>> {
    Json(trending::get_trending(state.provider.clone()).await)
}
