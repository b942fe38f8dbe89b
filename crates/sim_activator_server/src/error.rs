//! Maps `SimActivatorError` onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sim_activator_core::SimActivatorError;
use tracing::error;

#[derive(Debug)]
pub struct AppError(pub SimActivatorError);

impl From<SimActivatorError> for AppError {
    fn from(err: SimActivatorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0 {
            // A miss is an ordinary answer: empty 404, nothing logged.
            SimActivatorError::NotFound(_) => status.into_response(),
            err => {
                if status.is_server_error() {
                    error!(error = %err, "request failed");
                }
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
        }
    }
}
