//! REST API handlers for the Web UI
//!
//! Every endpoint forwards to the assistant backend and wraps the outcome in
//! the `{ success, data, error }` envelope the UI expects.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::{AssistantBackend, BackendResult, VirtualAssistant};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub backend: Arc<dyn AssistantBackend>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

fn reply<T: Serialize>(result: BackendResult<T>, ok_status: StatusCode, action: &str) -> Reply<T> {
    match result {
        Ok(data) => (ok_status, Json(ApiResponse::success(data))),
        Err(e) => {
            tracing::warn!("Failed to {}: {}", action, e);
            (e.status_code(), Json(ApiResponse::error(e.to_string())))
        }
    }
}

/// Malformed or mistyped request bodies still answer with the envelope
fn rejected<T>(rejection: JsonRejection) -> Reply<T> {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    (rejection.status(), Json(ApiResponse::error(rejection.body_text())))
}

/// Routes mounted under `/api`
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        // Reference data
        .route("/llama_stack/llms", get(list_models))
        .route("/llama_stack/knowledge_bases", get(list_knowledge_bases))
        .route("/llama_stack/mcp_servers", get(list_mcp_servers))
        // Virtual assistants CRUD
        .route(
            "/virtual_assistants",
            get(list_virtual_assistants).post(create_virtual_assistant),
        )
        .route(
            "/virtual_assistants/:id",
            get(get_virtual_assistant)
                .put(update_virtual_assistant)
                .delete(delete_virtual_assistant),
        )
        .with_state(state)
}

// ============================================================================
// Reference Data Endpoints
// ============================================================================

/// GET /api/llama_stack/llms - List available models
pub async fn list_models(State(state): State<ApiState>) -> impl IntoResponse {
    reply(state.backend.list_models().await, StatusCode::OK, "list models")
}

/// GET /api/llama_stack/knowledge_bases - List knowledge bases
pub async fn list_knowledge_bases(State(state): State<ApiState>) -> impl IntoResponse {
    reply(
        state.backend.list_knowledge_bases().await,
        StatusCode::OK,
        "list knowledge bases",
    )
}

/// GET /api/llama_stack/mcp_servers - List MCP servers
pub async fn list_mcp_servers(State(state): State<ApiState>) -> impl IntoResponse {
    reply(
        state.backend.list_mcp_servers().await,
        StatusCode::OK,
        "list MCP servers",
    )
}

// ============================================================================
// Virtual Assistant CRUD Endpoints
// ============================================================================

/// GET /api/virtual_assistants - List all virtual assistants
pub async fn list_virtual_assistants(State(state): State<ApiState>) -> impl IntoResponse {
    reply(
        state.backend.list_virtual_assistants().await,
        StatusCode::OK,
        "list virtual assistants",
    )
}

/// GET /api/virtual_assistants/:id - Get a single virtual assistant
pub async fn get_virtual_assistant(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    reply(
        state.backend.get_virtual_assistant(&id).await,
        StatusCode::OK,
        "get virtual assistant",
    )
}

/// POST /api/virtual_assistants - Create a new virtual assistant
pub async fn create_virtual_assistant(
    State(state): State<ApiState>,
    body: Result<Json<VirtualAssistant>, JsonRejection>,
) -> impl IntoResponse {
    let assistant = match body {
        Ok(Json(assistant)) => assistant.without_id(),
        Err(rejection) => return rejected(rejection),
    };
    let result = state.backend.create_virtual_assistant(&assistant).await;
    if let Ok(created) = &result {
        tracing::info!(
            "Created virtual assistant '{}' ({})",
            created.name,
            created.id.as_deref().unwrap_or("no id")
        );
    }
    reply(result, StatusCode::CREATED, "create virtual assistant")
}

/// PUT /api/virtual_assistants/:id - Update a virtual assistant
pub async fn update_virtual_assistant(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    body: Result<Json<VirtualAssistant>, JsonRejection>,
) -> impl IntoResponse {
    let assistant = match body {
        Ok(Json(assistant)) => assistant,
        Err(rejection) => return rejected(rejection),
    };
    let result = state.backend.update_virtual_assistant(&id, &assistant).await;
    if result.is_ok() {
        tracing::info!("Updated virtual assistant {}", id);
    }
    reply(result, StatusCode::OK, "update virtual assistant")
}

/// DELETE /api/virtual_assistants/:id - Delete a virtual assistant
pub async fn delete_virtual_assistant(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.backend.delete_virtual_assistant(&id).await {
        Ok(()) => {
            tracing::info!("Deleted virtual assistant {}", id);
            (StatusCode::OK, Json(ApiResponse::<()>::ok()))
        }
        Err(e) => {
            tracing::warn!("Failed to delete virtual assistant {}: {}", id, e);
            (e.status_code(), Json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}
