mod api;
mod dashboard;
mod docs;
mod error;
mod router;
mod state;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use axum::serve;
use kairos_directions::{
    cache::RouteCache,
    google_directions_api::{GoogleDirectionsClient, GoogleDirectionsClientParams},
    traffic_client::TrafficClient,
};
use tracing::{Level, info};

use crate::router::build_router;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const BIND_ADDRESS: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let directions_client = GoogleDirectionsClient::new(GoogleDirectionsClientParams::from_env()?);

    let state = Arc::new(AppState {
        traffic_client: TrafficClient::new(Arc::new(directions_client)),
        route_cache: RouteCache::default(),
    });

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDRESS).await?;
    info!("Kairos dashboard listening on http://{}", BIND_ADDRESS);

    serve(listener, app).await?;

    Ok(())
}
