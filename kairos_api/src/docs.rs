use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
};
use axum::{Extension, Json, response::IntoResponse};

use crate::state::AppState;

const OPENAPI_JSON_PATH: &str = "/docs/openapi.json";

/// Scalar reference of the JSON API, served next to the raw OpenAPI document.
pub fn docs_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(OPENAPI_JSON_PATH)
                    .with_title("Kairos API")
                    .axum_handler(),
                |op| op.description("Reference of the traffic dashboard JSON API."),
            ),
        )
        .route("/openapi.json", get(serve_openapi))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
