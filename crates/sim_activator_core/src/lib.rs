//! sim_activator_core — SIM activation domain.
//!
//! Pure domain types, the two port traits (`ActuatorClient`, `ActivationStore`),
//! the activation workflow and the query service. Adapters live in sibling
//! crates: `sim_activator_actuator` (reqwest) and `sim_activator_postgres` (sqlx).
//!
//! Call chain:
//! ```text
//! POST /activate -> ActivationService -> ActuatorClient -> ActivationStore::create -> ActivationReport
//! GET  /query    -> ActivationQueryService -> ActivationStore::find_by_id -> QueryResponse | NotFound
//! ```

pub mod error;
pub mod memory;
pub mod ports;
pub mod query;
pub mod types;
pub mod workflow;

pub use error::{ActuatorError, SimActivatorError};
pub use memory::InMemoryActivationStore;
pub use ports::{ActivationStore, ActuatorClient, ActuatorResult, Result};
pub use query::ActivationQueryService;
pub use types::{
    ActivationAttempt, ActivationRequest, ActuatorRequest, ActuatorResponse, AttemptId,
    NewActivationAttempt, QueryResponse,
};
pub use workflow::{ActivationOutcome, ActivationReport, ActivationService};
