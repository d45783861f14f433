use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use kairos_core::route_candidate::RouteCandidate;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{dashboard::dashboard_view::ranked_routes, error::ApiError, state::AppState};

use super::route_query::RouteQueryParams;

#[derive(Serialize, JsonSchema)]
pub struct RoutesResponse {
    /// Fastest first
    pub routes: Vec<RouteCandidate>,
}

pub async fn get_routes_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteQueryParams>,
) -> Result<Json<RoutesResponse>, ApiError> {
    params.validate()?;

    let routes = ranked_routes(&state, &params.origin, &params.destination, params.mode).await?;

    Ok(Json(RoutesResponse { routes }))
}
