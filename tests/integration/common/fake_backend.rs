//! Stand-in for the assistant backend, speaking its REST dialect
//! (bare JSON bodies, `{"detail": ...}` errors, 204 on delete).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
pub struct FakeStore {
    pub assistants: Vec<Value>,
    pub next_id: u32,
    pub requests: Vec<String>,
    pub fail_knowledge_bases: bool,
    /// Delay before answering `GET /virtual_assistants`
    pub list_delay: Option<Duration>,
}

pub type SharedStore = Arc<Mutex<FakeStore>>;

pub struct FakeBackend {
    pub addr: SocketAddr,
    pub base_url: String,
    pub store: SharedStore,
}

impl FakeBackend {
    pub async fn start() -> Self {
        Self::start_with(FakeStore::default()).await
    }

    pub async fn start_with(store: FakeStore) -> Self {
        let store = Arc::new(Mutex::new(store));
        let app = router(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeBackend {
            addr,
            base_url: format!("http://{}", addr),
            store,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }
}

fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/llama_stack/llms", get(llms))
        .route("/llama_stack/knowledge_bases", get(knowledge_bases))
        .route("/llama_stack/mcp_servers", get(mcp_servers))
        .route("/virtual_assistants", get(list).post(create))
        .route(
            "/virtual_assistants/:id",
            get(read).put(update).delete(remove),
        )
        .with_state(store)
}

fn log(store: &SharedStore, entry: String) {
    store.lock().unwrap().requests.push(entry);
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Virtual assistant not found" })),
    )
        .into_response()
}

async fn llms(State(store): State<SharedStore>) -> Json<Value> {
    log(&store, "GET /llama_stack/llms".to_string());
    Json(json!([
        { "id": "meta-llama/Llama-3.2-3B-Instruct", "name": "llama3.2:3b", "model_type": "llm" },
        { "id": "granite-8b", "name": "granite", "model_type": "llm" }
    ]))
}

async fn knowledge_bases(State(store): State<SharedStore>) -> Response {
    log(&store, "GET /llama_stack/knowledge_bases".to_string());
    if store.lock().unwrap().fail_knowledge_bases {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "vector store unavailable" })),
        )
            .into_response();
    }
    Json(json!([
        { "id": "kb-docs", "name": "Product docs", "provider_id": "pgvector" }
    ]))
    .into_response()
}

async fn mcp_servers(State(store): State<SharedStore>) -> Json<Value> {
    log(&store, "GET /llama_stack/mcp_servers".to_string());
    Json(json!([
        { "id": "mcp::weather", "name": "weather", "endpoint_url": "http://weather:8080/sse" },
        { "id": "mcp::github", "name": "github", "endpoint_url": "http://github:8080/sse" }
    ]))
}

async fn list(State(store): State<SharedStore>) -> Json<Value> {
    log(&store, "GET /virtual_assistants".to_string());
    let delay = store.lock().unwrap().list_delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    Json(Value::Array(store.lock().unwrap().assistants.clone()))
}

async fn create(State(store): State<SharedStore>, Json(mut body): Json<Value>) -> Response {
    log(&store, "POST /virtual_assistants".to_string());
    let mut guard = store.lock().unwrap();
    guard.next_id += 1;
    body["id"] = json!(format!("va-{}", guard.next_id));
    body["created_at"] = json!("2026-10-18T12:00:00Z");
    guard.assistants.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn read(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    log(&store, format!("GET /virtual_assistants/{}", id));
    let guard = store.lock().unwrap();
    match guard.assistants.iter().find(|a| a["id"] == json!(id)) {
        Some(found) => Json(found.clone()).into_response(),
        None => not_found(),
    }
}

async fn update(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    log(&store, format!("PUT /virtual_assistants/{}", id));
    let mut guard = store.lock().unwrap();
    match guard.assistants.iter_mut().find(|a| a["id"] == json!(id)) {
        Some(slot) => {
            body["id"] = json!(id);
            *slot = body.clone();
            Json(body).into_response()
        }
        None => not_found(),
    }
}

async fn remove(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    log(&store, format!("DELETE /virtual_assistants/{}", id));
    let mut guard = store.lock().unwrap();
    let before = guard.assistants.len();
    guard.assistants.retain(|a| a["id"] != json!(id));
    if guard.assistants.len() == before {
        not_found()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}
