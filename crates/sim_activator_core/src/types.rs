//! Domain types shared by the workflow, the stores and the HTTP layer.
//!
//! Field names on the wire are camelCase (`customerEmail`) to match the
//! store-location clients; Rust-side names stay snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SimActivatorError;

/// Store-assigned identifier of an activation attempt.
pub type AttemptId = i64;

/// Inbound activation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    /// SIM card identifier, opaque.
    pub iccid: String,
    pub customer_email: String,
}

impl ActivationRequest {
    pub fn new(iccid: impl Into<String>, customer_email: impl Into<String>) -> Self {
        Self {
            iccid: iccid.into(),
            customer_email: customer_email.into(),
        }
    }

    /// Both fields are required. Format is not checked.
    pub fn validate(&self) -> Result<(), SimActivatorError> {
        if self.iccid.trim().is_empty() {
            return Err(SimActivatorError::InvalidInput(
                "iccid must not be blank".into(),
            ));
        }
        if self.customer_email.trim().is_empty() {
            return Err(SimActivatorError::InvalidInput(
                "customerEmail must not be blank".into(),
            ));
        }
        Ok(())
    }
}

/// Payload forwarded to the actuator. The actuator only needs the ICCID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorRequest {
    pub iccid: String,
}

/// Body returned by the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorResponse {
    pub success: bool,
}

/// An activation attempt that has not been persisted yet.
///
/// The workflow builds exactly one of these per request, after the actuator
/// call has completed; only the store turns it into an [`ActivationAttempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivationAttempt {
    pub iccid: String,
    pub customer_email: String,
    pub active: bool,
}

/// Persisted record of one activation request and its outcome. Never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationAttempt {
    pub id: AttemptId,
    pub iccid: String,
    pub customer_email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Projection served by `GET /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub iccid: String,
    pub customer_email: String,
    pub active: bool,
}

impl From<ActivationAttempt> for QueryResponse {
    fn from(attempt: ActivationAttempt) -> Self {
        Self {
            iccid: attempt.iccid,
            customer_email: attempt.customer_email,
            active: attempt.active,
        }
    }
}
