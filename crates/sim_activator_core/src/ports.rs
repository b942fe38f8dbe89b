//! Port traits. The workflow and query service only ever see these.

use async_trait::async_trait;

use crate::error::{ActuatorError, SimActivatorError};
use crate::types::{ActivationAttempt, ActuatorResponse, AttemptId, NewActivationAttempt};

pub type Result<T> = std::result::Result<T, SimActivatorError>;

/// Outcome of one actuator call. `Ok(None)` is a 2xx answer with no body.
pub type ActuatorResult = std::result::Result<Option<ActuatorResponse>, ActuatorError>;

/// Downstream actuator that performs the activation.
///
/// Implementations make exactly one outbound call per invocation and never retry.
#[async_trait]
pub trait ActuatorClient: Send + Sync {
    async fn activate(&self, iccid: &str) -> ActuatorResult;
}

/// Append-only store of activation attempts.
#[async_trait]
pub trait ActivationStore: Send + Sync {
    /// Insert a new attempt and return it with its assigned identifier.
    async fn create(&self, attempt: NewActivationAttempt) -> Result<ActivationAttempt>;

    async fn find_by_id(&self, id: AttemptId) -> Result<Option<ActivationAttempt>>;
}
