//! POST /activate

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sim_activator_core::{ActivationOutcome, ActivationReport, ActivationRequest, AttemptId};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResponse {
    pub message: String,
    pub recorded: bool,
    /// Identifier to pass as `simCardId` to `GET /query`.
    pub record_id: Option<AttemptId>,
    /// What the actuator reported, even when the attempt was not recorded.
    pub active: bool,
    pub outcome: ActivationOutcome,
    /// `rejected`, `unreachable` or `malformed` when the actuator call failed.
    pub actuator_error: Option<&'static str>,
}

impl From<&ActivationReport> for ActivationResponse {
    fn from(report: &ActivationReport) -> Self {
        Self {
            message: report.message(),
            recorded: report.recorded(),
            record_id: report.record_id(),
            active: report.active(),
            outcome: report.outcome,
            actuator_error: report.actuator_error.as_ref().map(|e| e.kind()),
        }
    }
}

pub async fn activate(
    State(state): State<AppState>,
    Json(request): Json<ActivationRequest>,
) -> Result<(StatusCode, Json<ActivationResponse>), AppError> {
    request.validate()?;

    let report = state.activation.activate(&request).await;
    let status =
        StatusCode::from_u16(report.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok((status, Json(ActivationResponse::from(&report))))
}
