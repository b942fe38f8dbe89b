//! Integration tests for `PgActivationStore`.
//!
//! Requires a reachable PostgreSQL database.
//! Run with: DATABASE_URL="postgresql:///sim_activator_test" cargo test -p sim_activator_postgres -- --ignored

use std::collections::HashSet;
use std::sync::Arc;

use sim_activator_core::{ActivationStore, NewActivationAttempt};
use sim_activator_postgres::{DatabaseConfig, PgActivationStore};

async fn connect() -> PgActivationStore {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let mut config = DatabaseConfig::new(database_url);
    config.max_connections = 5;
    let store = PgActivationStore::connect(&config)
        .await
        .expect("failed to connect to test database");
    store
        .initialize_schema()
        .await
        .expect("failed to create schema");
    store
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn create_then_find_returns_same_fields() {
    let store = connect().await;
    let created = store
        .create(NewActivationAttempt {
            iccid: "8901...".into(),
            customer_email: "a@b.com".into(),
            active: true,
        })
        .await
        .unwrap();

    let found = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.iccid, "8901...");
    assert_eq!(found.customer_email, "a@b.com");
    assert!(found.active);
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn never_assigned_id_is_none() {
    let store = connect().await;
    assert!(store.find_by_id(-1).await.unwrap().is_none());
    assert!(store.find_by_id(i64::MAX).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn schema_bootstrap_is_idempotent() {
    let store = connect().await;
    store.initialize_schema().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore] // requires DATABASE_URL
async fn concurrent_inserts_get_distinct_ids() {
    let store = Arc::new(connect().await);
    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .create(NewActivationAttempt {
                    iccid: format!("8901{i:04}"),
                    customer_email: "c@x.com".into(),
                    active: false,
                })
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), 16);
}
