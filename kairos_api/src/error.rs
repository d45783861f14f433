use aide::OperationOutput;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kairos_core::user_query::QueryError;

use crate::dashboard::dashboard_view::DashboardError;

pub enum ApiError {
    BadRequest(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<DashboardError> for ApiError {
    fn from(error: DashboardError) -> Self {
        ApiError::UnprocessableEntity(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::UnprocessableEntity(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
        }
    }
}

impl OperationOutput for ApiError {
    type Inner = String;
}
