//! End-to-end: router + real `HttpActuatorClient` + mock actuator on an
//! ephemeral port. Exercises the whole outbound path without stubbing the
//! client.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use serde_json::{json, Value};
use sim_activator_actuator::HttpActuatorClient;
use sim_activator_core::InMemoryActivationStore;
use sim_activator_server::{
    build_router,
    mock_actuator::{mock_actuator_router, MockActuatorMode},
    AppState,
};
use tokio::net::TcpListener;
use tower::ServiceExt;

async fn spawn_mock(mode: MockActuatorMode) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock_actuator_router(mode))
            .await
            .unwrap();
    });
    format!("http://{addr}/actuate")
}

async fn run(actuator_url: String) -> (StatusCode, Value, Arc<InMemoryActivationStore>) {
    let client = HttpActuatorClient::new(actuator_url, Duration::from_secs(2)).unwrap();
    let store = Arc::new(InMemoryActivationStore::new());
    let router = build_router(AppState::new(Arc::new(client), store.clone()));

    let req = Request::builder()
        .method("POST")
        .uri("/activate")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "iccid": "89010000000001", "customerEmail": "c@x.com" }).to_string(),
        ))
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap(), store)
}

#[tokio::test]
async fn mock_success_activates() {
    let (status, body, store) = run(spawn_mock(MockActuatorMode::Success).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], true);
    assert!(store.records().await[0].active);
}

#[tokio::test]
async fn mock_fail_is_recorded_rejection() {
    let (status, body, store) = run(spawn_mock(MockActuatorMode::Fail).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "rejected");
    assert!(!store.records().await[0].active);
}

#[tokio::test]
async fn mock_error_is_bad_gateway() {
    let (status, body, store) = run(spawn_mock(MockActuatorMode::Error).await).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("simulated actuator failure"));
    assert_eq!(store.records().await.len(), 1);
}

#[tokio::test]
async fn mock_garbage_is_bad_gateway() {
    let (status, _, store) = run(spawn_mock(MockActuatorMode::Garbage).await).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!store.records().await[0].active);
}

#[tokio::test]
async fn no_actuator_is_service_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, body, store) = run(format!("http://{addr}/actuate")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["recorded"], true);
    assert!(!store.records().await[0].active);
}
