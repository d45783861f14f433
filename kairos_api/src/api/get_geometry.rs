use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use geojson::{Feature, Geometry, JsonObject};
use kairos_core::selector::select_fastest;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::Serialize;

use crate::{
    dashboard::{
        dashboard_view::{DashboardError, ranked_routes},
        map_overlay::decode_route,
    },
    error::ApiError,
    state::AppState,
};

use super::route_query::RouteQueryParams;

fn line_string_feature_schema(_gen: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "required": ["type", "geometry", "properties"],
        "properties": {
            "type": { "type": "string", "enum": ["Feature"] },
            "geometry": {
                "type": "object",
                "required": ["type", "coordinates"],
                "properties": {
                    "type": { "type": "string", "enum": ["LineString"] },
                    "coordinates": {
                        "type": "array",
                        "items": {
                            "type": "array",
                            "minItems": 2,
                            "items": { "type": "number" }
                        }
                    }
                }
            },
            "properties": { "oneOf": [{ "type": "null" }, { "type": "object" }] }
        }
    })
}

#[derive(Serialize, JsonSchema)]
pub struct RouteGeometryResponse {
    /// `[lon, lat]` coordinates of the fastest route
    #[schemars(schema_with = "line_string_feature_schema")]
    pub route: Feature,
}

pub async fn get_geometry_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteQueryParams>,
) -> Result<Json<RouteGeometryResponse>, ApiError> {
    params.validate()?;

    let routes = ranked_routes(&state, &params.origin, &params.destination, params.mode).await?;
    let fastest = select_fastest(&routes).map_err(|_| DashboardError::InvalidLocations)?;

    let line = decode_route(fastest.polyline()).map_err(ApiError::InternalServerError)?;

    let mut properties = JsonObject::new();
    properties.insert(String::from("label"), fastest.label().into());
    properties.insert(String::from("eta"), fastest.eta_text().into());
    properties.insert(String::from("distance"), fastest.distance_text().into());

    Ok(Json(RouteGeometryResponse {
        route: Feature {
            geometry: Some(Geometry::from(&line)),
            properties: Some(properties),
            ..Default::default()
        },
    }))
}
