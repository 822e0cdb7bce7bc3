use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod error;

pub use error::{BackendError, BackendResult};

/// A virtual assistant record as stored by the backend.
///
/// `id` is assigned by the backend; a record without one has not been
/// persisted yet. Fields the console does not manage (sampling settings,
/// shields, timestamps) are kept in `extra` so they survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualAssistant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub knowledge_base_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mcp_server_ids: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VirtualAssistant {
    /// Body for a create call: never carries an id
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// A language model the backend can serve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRef {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A knowledge base or MCP server reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Port to the system that owns virtual assistants and their reference data
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn list_models(&self) -> BackendResult<Vec<ModelRef>>;
    async fn list_knowledge_bases(&self) -> BackendResult<Vec<CatalogEntry>>;
    async fn list_mcp_servers(&self) -> BackendResult<Vec<CatalogEntry>>;

    async fn list_virtual_assistants(&self) -> BackendResult<Vec<VirtualAssistant>>;
    async fn get_virtual_assistant(&self, id: &str) -> BackendResult<VirtualAssistant>;
    async fn create_virtual_assistant(
        &self,
        assistant: &VirtualAssistant,
    ) -> BackendResult<VirtualAssistant>;
    async fn update_virtual_assistant(
        &self,
        id: &str,
        assistant: &VirtualAssistant,
    ) -> BackendResult<VirtualAssistant>;
    async fn delete_virtual_assistant(&self, id: &str) -> BackendResult<()>;

    /// Cheap reachability check used by the readiness probe
    async fn probe(&self) -> BackendResult<()> {
        self.list_virtual_assistants().await.map(|_| ())
    }
}
