//! Activation workflow.
//!
//! One request runs through three steps, always in this order:
//!
//! 1. call the actuator once and reduce the result to an `active` flag
//!    (anything but an explicit `{"success": true}` is `false`);
//! 2. persist exactly one [`NewActivationAttempt`] carrying that flag, whatever
//!    happened in step 1;
//! 3. build an [`ActivationReport`] that keeps the actuator axis and the
//!    persistence axis apart.
//!
//! Nothing here returns `Err`: every failure ends up in the report.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{ActuatorError, SimActivatorError};
use crate::ports::{ActivationStore, ActuatorClient};
use crate::types::{ActivationAttempt, ActivationRequest, AttemptId, NewActivationAttempt};

/// Final outcome of one activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOutcome {
    /// Actuator reported success and the attempt was recorded.
    Activated,
    /// Actuator reported failure, returned nothing, or errored; the attempt was recorded.
    Rejected,
    /// The attempt could not be recorded, whatever the actuator said.
    StoreFailed,
}

#[derive(Debug)]
pub struct ActivationReport {
    pub outcome: ActivationOutcome,
    /// The stored attempt. `None` only when `outcome` is `StoreFailed`.
    pub record: Option<ActivationAttempt>,
    /// Flag captured from the actuator, kept even when the write failed.
    pub actuator_active: bool,
    pub actuator_error: Option<ActuatorError>,
    pub store_error: Option<SimActivatorError>,
}

impl ActivationReport {
    pub fn recorded(&self) -> bool {
        self.record.is_some()
    }

    pub fn record_id(&self) -> Option<AttemptId> {
        self.record.as_ref().map(|r| r.id)
    }

    /// What the actuator reported. Equals the stored flag whenever a record exists.
    pub fn active(&self) -> bool {
        self.actuator_active
    }

    /// Persistence failure wins over any actuator error; a recorded rejection
    /// with no transport problem is still a 200.
    pub fn http_status(&self) -> u16 {
        if self.outcome == ActivationOutcome::StoreFailed {
            return 500;
        }
        match &self.actuator_error {
            Some(err) => err.http_status(),
            None => 200,
        }
    }

    pub fn message(&self) -> String {
        if self.outcome == ActivationOutcome::StoreFailed {
            return "SIM activation could not be recorded.".to_string();
        }
        match (&self.actuator_error, self.outcome) {
            (Some(ActuatorError::Rejected { body, .. }), _) => {
                format!("Error communicating with actuator: {body}")
            }
            (Some(ActuatorError::Unreachable(_)), _) => {
                "Failed to connect to SIM activation service. Please check if the actuator is running."
                    .to_string()
            }
            (Some(ActuatorError::Malformed(_)), _) => {
                "Actuator returned an unreadable response.".to_string()
            }
            (None, ActivationOutcome::Activated) => "SIM activation successful.".to_string(),
            (None, _) => "SIM activation failed, but recorded.".to_string(),
        }
    }
}

/// Orchestrates the actuator call and the mandatory store write.
pub struct ActivationService {
    actuator: Arc<dyn ActuatorClient>,
    store: Arc<dyn ActivationStore>,
}

impl ActivationService {
    pub fn new(actuator: Arc<dyn ActuatorClient>, store: Arc<dyn ActivationStore>) -> Self {
        Self { actuator, store }
    }

    pub async fn activate(&self, request: &ActivationRequest) -> ActivationReport {
        info!(iccid = %request.iccid, "received activation request");

        let (active, actuator_error) = match self.actuator.activate(&request.iccid).await {
            Ok(Some(resp)) => (resp.success, None),
            Ok(None) => {
                warn!(iccid = %request.iccid, "actuator answered without a body");
                (false, None)
            }
            Err(err) => {
                warn!(iccid = %request.iccid, error = %err, "actuator call failed");
                (false, Some(err))
            }
        };

        let attempt = NewActivationAttempt {
            iccid: request.iccid.clone(),
            customer_email: request.customer_email.clone(),
            active,
        };

        let report = match self.store.create(attempt).await {
            Ok(record) => ActivationReport {
                outcome: if active {
                    ActivationOutcome::Activated
                } else {
                    ActivationOutcome::Rejected
                },
                record: Some(record),
                actuator_active: active,
                actuator_error,
                store_error: None,
            },
            Err(err) => {
                error!(
                    iccid = %request.iccid,
                    actuator_active = active,
                    error = %err,
                    "failed to record activation attempt"
                );
                ActivationReport {
                    outcome: ActivationOutcome::StoreFailed,
                    record: None,
                    actuator_active: active,
                    actuator_error,
                    store_error: Some(err),
                }
            }
        };

        info!(
            iccid = %request.iccid,
            outcome = ?report.outcome,
            record_id = ?report.record_id(),
            "activation finished"
        );
        report
    }
}
