//! HTTP client for the virtual assistant backend

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::BackendSettings;
use crate::domain::{
    AssistantBackend, BackendError, BackendResult, CatalogEntry, ModelRef, VirtualAssistant,
};

/// `AssistantBackend` over the backend's REST API
pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error body shape used by the backend (`{"detail": ...}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl HttpBackendClient {
    pub fn new(settings: &BackendSettings) -> BackendResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn assistant_url(&self, id: &str) -> String {
        self.url(&format!("/virtual_assistants/{}", urlencoding::encode(id)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BackendResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        read_json(response).await
    }
}

/// Turn a non-success response into `BackendError::Api`, preferring the
/// backend's `detail` message over the raw body
async fn check_status(response: Response) -> BackendResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if text.is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => text,
    };

    Err(BackendError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl AssistantBackend for HttpBackendClient {
    async fn list_models(&self) -> BackendResult<Vec<ModelRef>> {
        self.get_json("/llama_stack/llms").await
    }

    async fn list_knowledge_bases(&self) -> BackendResult<Vec<CatalogEntry>> {
        self.get_json("/llama_stack/knowledge_bases").await
    }

    async fn list_mcp_servers(&self) -> BackendResult<Vec<CatalogEntry>> {
        self.get_json("/llama_stack/mcp_servers").await
    }

    async fn list_virtual_assistants(&self) -> BackendResult<Vec<VirtualAssistant>> {
        self.get_json("/virtual_assistants").await
    }

    async fn get_virtual_assistant(&self, id: &str) -> BackendResult<VirtualAssistant> {
        let response = self.client.get(self.assistant_url(id)).send().await?;
        read_json(response).await
    }

    async fn create_virtual_assistant(
        &self,
        assistant: &VirtualAssistant,
    ) -> BackendResult<VirtualAssistant> {
        let response = self
            .client
            .post(self.url("/virtual_assistants"))
            .json(&assistant.without_id())
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_virtual_assistant(
        &self,
        id: &str,
        assistant: &VirtualAssistant,
    ) -> BackendResult<VirtualAssistant> {
        let response = self
            .client
            .put(self.assistant_url(id))
            .json(assistant)
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete_virtual_assistant(&self, id: &str) -> BackendResult<()> {
        let response = self.client.delete(self.assistant_url(id)).send().await?;
        let response = check_status(response).await?;
        tracing::debug!("Deleted virtual assistant {} ({})", id, response.status());
        Ok(())
    }
}
