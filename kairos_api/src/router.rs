use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi, transform::TransformOpenApi};
use axum::{Extension, Router, http::Method, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    api::routes::api_routes,
    dashboard::handlers::{dashboard_handler, index_handler},
    docs::docs_routes,
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    ApiRouter::new()
        .route("/", get(index_handler))
        .route("/dashboard", get(dashboard_handler))
        .nest_api_service("/api", api_routes(state.clone()))
        .nest_api_service("/docs", docs_routes(state.clone()))
        .finish_api_with(&mut api, api_docs)
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Kairos Open API")
}
