use super::common;

use common::fake_backend::FakeBackend;
use common::test_server::TestServer;
use serde_json::{json, Value};

async fn list_assistants(client: &reqwest::Client, server: &TestServer) -> Vec<Value> {
    let body: Value = client
        .get(server.url("/api/virtual_assistants"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["data"].as_array().unwrap().clone()
}

#[tokio::test]
async fn test_create_update_delete_cycle() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;
    let client = reqwest::Client::new();

    // Create
    let response = client
        .post(server.url("/api/virtual_assistants"))
        .json(&json!({
            "name": "Support bot",
            "prompt": "You answer product questions.",
            "model_name": "llama3.2:3b",
            "knowledge_base_ids": ["kb-docs"],
            "mcp_server_ids": ["mcp::weather"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    let created = body["data"].clone();
    assert_eq!(created["id"], "va-1");
    assert_eq!(created["created_at"], "2026-10-18T12:00:00Z");

    // Update keeps fields the console does not manage
    let mut edited = created.clone();
    edited["prompt"] = json!("You answer product and billing questions.");
    edited["mcp_server_ids"] = json!([]);
    let response = client
        .put(server.url("/api/virtual_assistants/va-1"))
        .json(&edited)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["prompt"], "You answer product and billing questions.");
    assert_eq!(body["data"]["mcp_server_ids"], json!([]));
    assert_eq!(body["data"]["created_at"], "2026-10-18T12:00:00Z");

    let assistants = list_assistants(&client, &server).await;
    assert_eq!(assistants.len(), 1);
    assert_eq!(assistants[0]["knowledge_base_ids"], json!(["kb-docs"]));

    // Delete (backend answers 204)
    let response = client
        .delete(server.url("/api/virtual_assistants/va-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    assert!(list_assistants(&client, &server).await.is_empty());

    assert_eq!(
        backend.requests(),
        vec![
            "POST /virtual_assistants".to_string(),
            "PUT /virtual_assistants/va-1".to_string(),
            "GET /virtual_assistants".to_string(),
            "DELETE /virtual_assistants/va-1".to_string(),
            "GET /virtual_assistants".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_never_forwards_an_id() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/api/virtual_assistants"))
        .json(&json!({ "id": "client-made", "name": "Bot", "prompt": "", "model_name": "granite" }))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["id"], "va-1");
    assert_eq!(backend.requests(), vec!["POST /virtual_assistants".to_string()]);
}

#[tokio::test]
async fn test_unknown_assistant_reports_backend_detail() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;
    let client = reqwest::Client::new();

    let response = client
        .put(server.url("/api/virtual_assistants/missing"))
        .json(&json!({ "name": "Ghost", "prompt": "", "model_name": "granite" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Backend returned 404: Virtual assistant not found"
    );

    let response = client
        .delete(server.url("/api/virtual_assistants/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_get_single_assistant() {
    let backend = FakeBackend::start().await;
    let server = TestServer::new(&backend.base_url).await;
    let client = reqwest::Client::new();

    client
        .post(server.url("/api/virtual_assistants"))
        .json(&json!({ "name": "Bot", "prompt": "Hi", "model_name": "granite" }))
        .send()
        .await
        .unwrap();

    let body: Value = client
        .get(server.url("/api/virtual_assistants/va-1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["name"], "Bot");
    assert_eq!(body["data"]["knowledge_base_ids"], json!([]));
}
