use std::sync::Arc;

use axum::{Json, extract::State};
use kairos_core::user_query::UserQuery;

use crate::{
    dashboard::dashboard_view::{DashboardView, build_dashboard},
    error::ApiError,
    state::AppState,
};

pub async fn post_dashboard_handler(
    State(state): State<Arc<AppState>>,
    Json(query): Json<UserQuery>,
) -> Result<Json<DashboardView>, ApiError> {
    query.validate()?;

    let view = build_dashboard(&state, &query).await?;

    Ok(Json(view))
}
