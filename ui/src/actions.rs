//! Page operations, independent of the view layer.
//!
//! Each operation talks to an `AssistantApi` so it can run against the
//! browser fetch client or a test double.

use async_trait::async_trait;

use crate::form::SubmitAction;
use crate::types::{CatalogEntry, ModelRef, VirtualAssistant};

/// Calls the page makes against the host
#[async_trait(?Send)]
pub trait AssistantApi {
    async fn list_models(&self) -> Result<Vec<ModelRef>, String>;
    async fn list_knowledge_bases(&self) -> Result<Vec<CatalogEntry>, String>;
    async fn list_mcp_servers(&self) -> Result<Vec<CatalogEntry>, String>;
    async fn list_virtual_assistants(&self) -> Result<Vec<VirtualAssistant>, String>;
    async fn create_virtual_assistant(&self, assistant: &VirtualAssistant) -> Result<VirtualAssistant, String>;
    async fn update_virtual_assistant(&self, id: &str, assistant: &VirtualAssistant) -> Result<VirtualAssistant, String>;
    async fn delete_virtual_assistant(&self, id: &str) -> Result<(), String>;
}

/// Collections the page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Models,
    KnowledgeBases,
    McpServers,
    Assistants,
}

impl Resource {
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Models => "models",
            Resource::KnowledgeBases => "knowledge bases",
            Resource::McpServers => "MCP servers",
            Resource::Assistants => "virtual assistants",
        }
    }

    /// Message shown to the user when loading this collection fails
    pub fn load_failure_message(&self) -> String {
        format!("Failed to load {}", self.label())
    }
}

/// Generic message for a failed create/update
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save virtual assistant";

/// Message for a failed delete
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete virtual assistant";

/// Outcome of the three reference fetches; each one succeeds or fails alone
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub models: Result<Vec<ModelRef>, String>,
    pub knowledge_bases: Result<Vec<CatalogEntry>, String>,
    pub mcp_servers: Result<Vec<CatalogEntry>, String>,
}

impl ReferenceData {
    /// Collections that failed, with the underlying error
    pub fn failures(&self) -> Vec<(Resource, String)> {
        let mut failures = Vec::new();
        if let Err(e) = &self.models {
            failures.push((Resource::Models, e.clone()));
        }
        if let Err(e) = &self.knowledge_bases {
            failures.push((Resource::KnowledgeBases, e.clone()));
        }
        if let Err(e) = &self.mcp_servers {
            failures.push((Resource::McpServers, e.clone()));
        }
        failures
    }
}

/// A successful mutation followed by a list reload
#[derive(Debug, Clone)]
pub struct Refreshed {
    /// Record returned by create/update; `None` after a delete
    pub saved: Option<VirtualAssistant>,
    /// The reloaded assistant list
    pub assistants: Result<Vec<VirtualAssistant>, String>,
}

/// Fetch models, knowledge bases and MCP servers concurrently
pub async fn load_reference_data<A: AssistantApi + ?Sized>(api: &A) -> ReferenceData {
    let (models, knowledge_bases, mcp_servers) = futures::join!(
        api.list_models(),
        api.list_knowledge_bases(),
        api.list_mcp_servers(),
    );

    ReferenceData {
        models,
        knowledge_bases,
        mcp_servers,
    }
}

pub async fn reload_assistants<A: AssistantApi + ?Sized>(api: &A) -> Result<Vec<VirtualAssistant>, String> {
    api.list_virtual_assistants().await
}

/// Create or update depending on whether the draft has an id, then reload
pub async fn submit_assistant<A: AssistantApi + ?Sized>(
    api: &A,
    draft: &VirtualAssistant,
) -> Result<Refreshed, String> {
    let saved = match SubmitAction::for_record(draft) {
        SubmitAction::Create => {
            let body = VirtualAssistant { id: None, ..draft.clone() };
            api.create_virtual_assistant(&body).await?
        }
        SubmitAction::Update(id) => api.update_virtual_assistant(&id, draft).await?,
    };

    Ok(Refreshed {
        saved: Some(saved),
        assistants: reload_assistants(api).await,
    })
}

/// Delete by id (no confirmation), then reload
pub async fn delete_assistant<A: AssistantApi + ?Sized>(api: &A, id: &str) -> Result<Refreshed, String> {
    api.delete_virtual_assistant(id).await?;

    Ok(Refreshed {
        saved: None,
        assistants: reload_assistants(api).await,
    })
}
