//! HTTP API handlers.

pub mod layout;
pub mod photos;
pub mod sessions;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::error::PawtoboothError;

/// Map a library error to an HTTP error response.
pub(crate) fn error_response(err: &PawtoboothError) -> (StatusCode, Json<Value>) {
    let status = match err {
        PawtoboothError::InvalidInputCount(_) => StatusCode::CONFLICT,
        PawtoboothError::ImageDecodeFailed { .. } | PawtoboothError::InvalidPhotoData(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PawtoboothError::DecodeTimeout => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "message": err.to_string() })))
}

/// 404 body shared by the session routes.
pub(crate) fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Session not found" })),
    )
}
