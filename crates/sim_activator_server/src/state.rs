use std::sync::Arc;

use sim_activator_core::{
    ActivationQueryService, ActivationService, ActivationStore, ActuatorClient,
};

/// Shared by every request. Holds no mutable state of its own.
#[derive(Clone)]
pub struct AppState {
    pub activation: Arc<ActivationService>,
    pub query: Arc<ActivationQueryService>,
}

impl AppState {
    /// Both services read and write the same store.
    pub fn new(actuator: Arc<dyn ActuatorClient>, store: Arc<dyn ActivationStore>) -> Self {
        Self {
            activation: Arc::new(ActivationService::new(actuator, Arc::clone(&store))),
            query: Arc::new(ActivationQueryService::new(store)),
        }
    }
}
