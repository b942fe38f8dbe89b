//! Stand-in actuator for local development and end-to-end tests.
//!
//! Serves `POST /actuate` and answers according to a fixed mode, so the
//! server can be exercised without the real activation microservice.

use std::str::FromStr;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use sim_activator_core::ActuatorRequest;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockActuatorMode {
    /// `{"success": true}`
    Success,
    /// `{"success": false}`
    Fail,
    /// HTTP 500
    Error,
    /// HTTP 200 with a body that is not JSON
    Garbage,
}

impl FromStr for MockActuatorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "fail" => Ok(Self::Fail),
            "error" => Ok(Self::Error),
            "garbage" => Ok(Self::Garbage),
            other => Err(format!(
                "unknown mode '{other}', expected success|fail|error|garbage"
            )),
        }
    }
}

pub fn mock_actuator_router(mode: MockActuatorMode) -> Router {
    Router::new()
        .route("/actuate", post(actuate))
        .with_state(mode)
}

async fn actuate(
    State(mode): State<MockActuatorMode>,
    Json(request): Json<ActuatorRequest>,
) -> Response {
    info!(iccid = %request.iccid, ?mode, "mock actuator received request");
    match mode {
        MockActuatorMode::Success => Json(json!({ "success": true })).into_response(),
        MockActuatorMode::Fail => Json(json!({ "success": false })).into_response(),
        MockActuatorMode::Error => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "simulated actuator failure",
        )
            .into_response(),
        MockActuatorMode::Garbage => (StatusCode::OK, "not json").into_response(),
    }
}
