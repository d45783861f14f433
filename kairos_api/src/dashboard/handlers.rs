use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use kairos_core::user_query::QueryError;
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

use super::{
    dashboard_view::{DashboardError, build_dashboard},
    form::DashboardForm,
    page::{DashboardState, render_page},
};

pub async fn index_handler() -> Result<Html<String>, ApiError> {
    Ok(Html(render_page(&DashboardState::Idle)?))
}

/// A failed route lookup, blank locations included, still renders the page
/// with the error in the sidebar. Only out-of-range fuel values are rejected.
pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    Query(form): Query<DashboardForm>,
) -> Result<Html<String>, ApiError> {
    let query = form.into_query();

    let outcome = match query.validate() {
        Ok(()) => {
            info!(
                "Dashboard query {} -> {} ({})",
                query.origin, query.destination, query.mode
            );
            build_dashboard(&state, &query).await
        }
        Err(error @ (QueryError::MissingOrigin | QueryError::MissingDestination)) => {
            warn!("Dashboard query without locations: {}", error);
            Err(DashboardError::InvalidLocations)
        }
        Err(error) => return Err(error.into()),
    };

    Ok(Html(render_page(&DashboardState::Results {
        query,
        outcome,
    })?))
}
