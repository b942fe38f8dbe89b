//! GET /query?simCardId={id}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use sim_activator_core::{AttemptId, QueryResponse};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    #[serde(rename = "simCardId")]
    pub sim_card_id: AttemptId,
}

pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResponse>, AppError> {
    let resp = state.query.query(params.sim_card_id).await?;
    Ok(Json(resp))
}
