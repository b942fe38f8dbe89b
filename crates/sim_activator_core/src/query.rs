//! Query service: look up one activation attempt and project it.

use std::sync::Arc;

use tracing::debug;

use crate::error::SimActivatorError;
use crate::ports::{ActivationStore, Result};
use crate::types::{AttemptId, QueryResponse};

pub struct ActivationQueryService {
    store: Arc<dyn ActivationStore>,
}

impl ActivationQueryService {
    pub fn new(store: Arc<dyn ActivationStore>) -> Self {
        Self { store }
    }

    /// Returns `NotFound` for identifiers the store never assigned. Store
    /// failures come back as `Persistence`, never as `NotFound`.
    pub async fn query(&self, id: AttemptId) -> Result<QueryResponse> {
        match self.store.find_by_id(id).await? {
            Some(attempt) => Ok(attempt.into()),
            None => {
                debug!(id, "no activation record");
                Err(SimActivatorError::NotFound(format!(
                    "activation record {id}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::memory::InMemoryActivationStore;
    use crate::types::{ActivationAttempt, NewActivationAttempt};

    struct BrokenStore;

    #[async_trait]
    impl ActivationStore for BrokenStore {
        async fn create(&self, _attempt: NewActivationAttempt) -> Result<ActivationAttempt> {
            Err(SimActivatorError::persistence(anyhow::anyhow!("down")))
        }

        async fn find_by_id(&self, _id: AttemptId) -> Result<Option<ActivationAttempt>> {
            Err(SimActivatorError::persistence(anyhow::anyhow!("down")))
        }
    }

    #[tokio::test]
    async fn query_returns_stored_fields_unchanged() {
        let store = Arc::new(InMemoryActivationStore::new());
        let created = store
            .create(NewActivationAttempt {
                iccid: "8901...".into(),
                customer_email: "a@b.com".into(),
                active: true,
            })
            .await
            .unwrap();

        let service = ActivationQueryService::new(store);
        let resp = service.query(created.id).await.unwrap();
        assert_eq!(
            resp,
            QueryResponse {
                iccid: "8901...".into(),
                customer_email: "a@b.com".into(),
                active: true,
            }
        );
    }

    #[tokio::test]
    async fn query_miss_is_not_found() {
        let service = ActivationQueryService::new(Arc::new(InMemoryActivationStore::new()));
        let err = service.query(42).await.unwrap_err();
        assert!(matches!(err, SimActivatorError::NotFound(_)));
        assert_eq!(err.http_status(), 404);
    }

    #[tokio::test]
    async fn store_failure_is_not_reported_as_not_found() {
        let service = ActivationQueryService::new(Arc::new(BrokenStore));
        let err = service.query(1).await.unwrap_err();
        assert!(matches!(err, SimActivatorError::Persistence(_)));
        assert_eq!(err.http_status(), 500);
    }
}
