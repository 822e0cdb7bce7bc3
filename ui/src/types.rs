//! Shared types for the Assistant Console Web UI
//!
//! These types mirror the backend API response structures.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// A virtual assistant record
///
/// `id` is assigned by the backend; `None` means not yet persisted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
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
    /// Backend fields the form does not edit, sent back untouched on update
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Language model offered by the backend
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelRef {
    pub id: String,
    pub name: String,
}

/// Knowledge base or MCP server reference
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogEntry {
    /// Look up a display name, falling back to the raw id
    pub fn name_for(entries: &[CatalogEntry], id: &str) -> String {
        entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
