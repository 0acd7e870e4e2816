use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oklch_map::ZoneError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Forbidden")]
    Forbidden,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unknown hue: {0}")]
    UnknownHue(f64),

    #[error("Not found")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid sampler zones: {0}")]
    Sampler(#[from] ZoneError),

    #[error("Invalid chart size: {width}x{height}")]
    ChartSize { width: f64, height: f64 },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingHeader(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::UnknownHue(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Store(e @ StoreError::DuplicateId(_)) => (StatusCode::CONFLICT, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
