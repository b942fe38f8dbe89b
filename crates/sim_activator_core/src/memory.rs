//! In-memory `ActivationStore` for tests and database-less local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::ports::{ActivationStore, Result};
use crate::types::{ActivationAttempt, AttemptId, NewActivationAttempt};

#[derive(Default)]
struct MemoryState {
    last_id: AttemptId,
    records: BTreeMap<AttemptId, ActivationAttempt>,
}

/// Identifiers start at 1 and are assigned under the write lock.
#[derive(Default)]
pub struct InMemoryActivationStore {
    state: RwLock<MemoryState>,
}

impl InMemoryActivationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in identifier order.
    pub async fn records(&self) -> Vec<ActivationAttempt> {
        self.state.read().await.records.values().cloned().collect()
    }
}

#[async_trait]
impl ActivationStore for InMemoryActivationStore {
    async fn create(&self, attempt: NewActivationAttempt) -> Result<ActivationAttempt> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let record = ActivationAttempt {
            id: state.last_id,
            iccid: attempt.iccid,
            customer_email: attempt.customer_email,
            active: attempt.active,
            created_at: Utc::now(),
        };
        state.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: AttemptId) -> Result<Option<ActivationAttempt>> {
        Ok(self.state.read().await.records.get(&id).cloned())
    }
}
