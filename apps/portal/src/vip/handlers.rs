//! Axum route handlers for the VIP CRM API.
//!
//! Query parameters never reject a request: unknown values fall back to a
//! default and a repeated parameter takes its last value.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use crate::errors::AppError;
use crate::state::AppState;
use crate::vip::models::{
    ActivityFilter, AnalyticsPeriod, ClientActivity, Recommendation, VipAnalytics, VipInsights,
};

/// GET /api/vip/insights
pub async fn handle_insights(State(state): State<AppState>) -> Result<Json<VipInsights>, AppError> {
    Ok(Json(state.analytics.insights().await?))
}

/// GET /api/vip/activity?filter=
///
/// Unknown filters are treated as `all`.
pub async fn handle_activity(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ClientActivity>>, AppError> {
    let filter = ActivityFilter::parse(params.get("filter").map(String::as_str));
    Ok(Json(state.activity.activity(filter).await?))
}

/// GET /api/vip/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    Ok(Json(state.activity.recommendations().await?))
}

/// GET /api/vip/analytics?period=
///
/// Unknown periods are treated as `today`.
pub async fn handle_analytics(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<VipAnalytics>, AppError> {
    let period = AnalyticsPeriod::parse(params.get("period").map(String::as_str));
    Ok(Json(state.analytics.analytics(period).await?))
}
