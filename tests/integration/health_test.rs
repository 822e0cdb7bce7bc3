use super::common;

use common::fake_backend::FakeBackend;
use common::test_server::TestServer;

#[tokio::test]
async fn test_health_endpoint() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].is_number());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_ready_endpoint() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/health/ready")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(backend.requests(), vec!["GET /virtual_assistants".to_string()]);
}

#[tokio::test]
async fn test_health_ready_without_backend() {
    // Reserve a port, then release it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let server = TestServer::new(&format!("http://{}", addr)).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/health/ready")).send().await.unwrap();

    assert_eq!(response.status(), 503);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_health_live_endpoint() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/health/live")).send().await.unwrap();

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "alive");
}
