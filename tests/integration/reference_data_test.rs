use super::common;

use common::fake_backend::{FakeBackend, FakeStore};
use common::test_server::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_models_are_forwarded() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;

    let body: Value = reqwest::get(server.url("/api/llama_stack/llms"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    let models = body["data"].as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["name"], "llama3.2:3b");
    // Extra fields from the backend are carried through
    assert_eq!(models[0]["model_type"], "llm");
}

#[tokio::test]
async fn test_mcp_servers_are_forwarded() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;

    let body: Value = reqwest::get(server.url("/api/llama_stack/mcp_servers"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let servers = body["data"].as_array().unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[1]["id"], "mcp::github");
    assert_eq!(servers[1]["endpoint_url"], "http://github:8080/sse");
}

#[tokio::test]
async fn test_failing_reference_list_does_not_affect_others() {
    let backend = FakeBackend::start_with(FakeStore {
        fail_knowledge_bases: true,
        ..Default::default()
    })
    .await;
    let server = TestServer::new(&backend.base_url).await;

    let response = reqwest::get(server.url("/api/llama_stack/knowledge_bases"))
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("vector store unavailable"));

    let response = reqwest::get(server.url("/api/llama_stack/llms")).await.unwrap();
    assert_eq!(response.status(), 200);
    let response = reqwest::get(server.url("/api/llama_stack/mcp_servers"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
