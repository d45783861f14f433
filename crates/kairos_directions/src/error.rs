use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("API error: {status} - {message}")]
    Api { status: String, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("No route found")]
    NoRoutes,

    #[error("Incomplete response: missing {0}")]
    IncompleteResponse(&'static str),
}
