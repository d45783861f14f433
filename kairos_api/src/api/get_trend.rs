use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use kairos_core::trend_sample::TrendSample;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    dashboard::{dashboard_view::rounded_trend, insights::TrendInsights},
    error::ApiError,
    state::AppState,
};

use super::route_query::RouteQueryParams;

#[derive(Serialize, JsonSchema)]
pub struct TrendResponse {
    pub samples: Vec<TrendSample>,
    pub insights: Option<TrendInsights>,
}

pub async fn get_trend_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteQueryParams>,
) -> Result<Json<TrendResponse>, ApiError> {
    params.validate()?;

    let samples = rounded_trend(&state, &params.origin, &params.destination, params.mode).await;
    let insights = TrendInsights::from_samples(&samples);

    Ok(Json(TrendResponse { samples, insights }))
}
