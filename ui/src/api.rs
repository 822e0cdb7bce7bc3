//! API client for the Assistant Console host

use crate::actions::AssistantApi;
use crate::types::*;
use async_trait::async_trait;
use gloo_net::http::Request;

const API_BASE: &str = "/api";

// ============================================================================
// Reference data
// ============================================================================

pub async fn list_models() -> Result<Vec<ModelRef>, String> {
    let url = format!("{}/llama_stack/llms", API_BASE);
    fetch_json::<Vec<ModelRef>>(&url).await
}

pub async fn list_knowledge_bases() -> Result<Vec<CatalogEntry>, String> {
    let url = format!("{}/llama_stack/knowledge_bases", API_BASE);
    fetch_json::<Vec<CatalogEntry>>(&url).await
}

pub async fn list_mcp_servers() -> Result<Vec<CatalogEntry>, String> {
    let url = format!("{}/llama_stack/mcp_servers", API_BASE);
    fetch_json::<Vec<CatalogEntry>>(&url).await
}

// ============================================================================
// Virtual Assistants
// ============================================================================

pub async fn list_virtual_assistants() -> Result<Vec<VirtualAssistant>, String> {
    let url = format!("{}/virtual_assistants", API_BASE);
    fetch_json::<Vec<VirtualAssistant>>(&url).await
}

pub async fn create_virtual_assistant(assistant: &VirtualAssistant) -> Result<VirtualAssistant, String> {
    let url = format!("{}/virtual_assistants", API_BASE);
    post_json::<VirtualAssistant, VirtualAssistant>(&url, assistant).await
}

pub async fn update_virtual_assistant(id: &str, assistant: &VirtualAssistant) -> Result<VirtualAssistant, String> {
    let url = format!("{}/virtual_assistants/{}", API_BASE, urlencoding_encode(id));
    put_json::<VirtualAssistant, VirtualAssistant>(&url, assistant).await
}

pub async fn delete_virtual_assistant(id: &str) -> Result<(), String> {
    let url = format!("{}/virtual_assistants/{}", API_BASE, urlencoding_encode(id));
    delete_request(&url).await
}

/// `AssistantApi` backed by the browser's fetch
#[derive(Clone, Copy, Default)]
pub struct HttpAssistantApi;

#[async_trait(?Send)]
impl AssistantApi for HttpAssistantApi {
    async fn list_models(&self) -> Result<Vec<ModelRef>, String> {
        list_models().await
    }

    async fn list_knowledge_bases(&self) -> Result<Vec<CatalogEntry>, String> {
        list_knowledge_bases().await
    }

    async fn list_mcp_servers(&self) -> Result<Vec<CatalogEntry>, String> {
        list_mcp_servers().await
    }

    async fn list_virtual_assistants(&self) -> Result<Vec<VirtualAssistant>, String> {
        list_virtual_assistants().await
    }

    async fn create_virtual_assistant(&self, assistant: &VirtualAssistant) -> Result<VirtualAssistant, String> {
        create_virtual_assistant(assistant).await
    }

    async fn update_virtual_assistant(&self, id: &str, assistant: &VirtualAssistant) -> Result<VirtualAssistant, String> {
        update_virtual_assistant(id, assistant).await
    }

    async fn delete_virtual_assistant(&self, id: &str) -> Result<(), String> {
        delete_virtual_assistant(id).await
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn urlencoding_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

fn unwrap_envelope<T>(api_response: ApiResponse<T>) -> Result<T, String> {
    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    unwrap_envelope(api_response)
}

async fn post_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<R> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    unwrap_envelope(api_response)
}

async fn put_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    let response = Request::put(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<R> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    unwrap_envelope(api_response)
}

async fn delete_request(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<()> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        Ok(())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
