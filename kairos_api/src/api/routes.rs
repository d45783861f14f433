use std::sync::Arc;

use aide::axum::{
    ApiRouter,
    routing::{get, post},
};

use crate::state::AppState;

use super::{
    get_geometry::get_geometry_handler, get_routes::get_routes_handler,
    get_trend::get_trend_handler, post_dashboard::post_dashboard_handler,
};

pub fn api_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route("/routes", get(get_routes_handler))
        .api_route("/routes/fastest/geometry", get(get_geometry_handler))
        .api_route("/trend", get(get_trend_handler))
        .api_route("/dashboard", post(post_dashboard_handler))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
