//! Form state for the virtual assistant editor.
//!
//! Plain data, no signals: the page keeps one `AssistantForm` inside an
//! `RwSignal` and mutates it through these methods.

use serde_json::{Number, Value};
use std::collections::HashSet;

use crate::types::VirtualAssistant;

/// What submitting the form will do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update(String),
}

impl SubmitAction {
    pub fn for_record(record: &VirtualAssistant) -> Self {
        match &record.id {
            Some(id) => SubmitAction::Update(id.clone()),
            None => SubmitAction::Create,
        }
    }
}

/// Generation settings stored next to each assistant. They travel in
/// `VirtualAssistant::extra`; an absent key means the backend default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationParameter {
    Temperature,
    TopP,
    RepetitionPenalty,
    MaxTokens,
    MaxInferIters,
}

impl GenerationParameter {
    pub const ALL: [GenerationParameter; 5] = [
        GenerationParameter::Temperature,
        GenerationParameter::TopP,
        GenerationParameter::RepetitionPenalty,
        GenerationParameter::MaxTokens,
        GenerationParameter::MaxInferIters,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GenerationParameter::Temperature => "temperature",
            GenerationParameter::TopP => "top_p",
            GenerationParameter::RepetitionPenalty => "repetition_penalty",
            GenerationParameter::MaxTokens => "max_tokens",
            GenerationParameter::MaxInferIters => "max_infer_iters",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationParameter::Temperature => "Temperature",
            GenerationParameter::TopP => "Top P",
            GenerationParameter::RepetitionPenalty => "Repetition penalty",
            GenerationParameter::MaxTokens => "Max tokens",
            GenerationParameter::MaxInferIters => "Max inference iterations",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            GenerationParameter::MaxTokens | GenerationParameter::MaxInferIters
        )
    }

    /// `step` attribute for the number input
    pub fn step(&self) -> &'static str {
        if self.is_integer() {
            "1"
        } else {
            "0.01"
        }
    }

    fn parse(&self, raw: &str) -> Result<Value, String> {
        if self.is_integer() {
            raw.parse::<u64>()
                .map(Value::from)
                .map_err(|_| format!("{} must be a whole number", self.label()))
        } else {
            raw.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| format!("{} must be a number", self.label()))
        }
    }
}

/// The in-progress assistant record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantForm {
    pub record: VirtualAssistant,
}

impl AssistantForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: String) {
        self.record.name = name;
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.record.prompt = prompt;
    }

    pub fn set_model_name(&mut self, model_name: String) {
        self.record.model_name = model_name;
    }

    pub fn toggle_knowledge_base(&mut self, id: &str) {
        toggle(&mut self.record.knowledge_base_ids, id);
    }

    pub fn toggle_mcp_server(&mut self, id: &str) {
        toggle(&mut self.record.mcp_server_ids, id);
    }

    pub fn has_knowledge_base(&self, id: &str) -> bool {
        self.record.knowledge_base_ids.iter().any(|k| k == id)
    }

    pub fn has_mcp_server(&self, id: &str) -> bool {
        self.record.mcp_server_ids.iter().any(|m| m == id)
    }

    /// Load an existing record for in-place editing. Repeated ids collapse to
    /// their first occurrence so toggles keep set semantics.
    pub fn edit(&mut self, assistant: &VirtualAssistant) {
        self.record = assistant.clone();
        dedup(&mut self.record.knowledge_base_ids);
        dedup(&mut self.record.mcp_server_ids);
    }

    /// Current value as input text, empty when unset
    pub fn parameter_text(&self, parameter: GenerationParameter) -> String {
        match self.record.extra.get(parameter.key()) {
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    /// Blank input clears the parameter; anything unparsable leaves it as is
    pub fn set_parameter(&mut self, parameter: GenerationParameter, raw: &str) -> Result<(), String> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.record.extra.remove(parameter.key());
            return Ok(());
        }

        let value = parameter.parse(raw)?;
        self.record.extra.insert(parameter.key().to_string(), value);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.record = VirtualAssistant::default();
    }

    pub fn is_editing(&self) -> bool {
        self.record.id.is_some()
    }

    pub fn submit_action(&self) -> SubmitAction {
        SubmitAction::for_record(&self.record)
    }
}

/// Add `id` if absent, remove every occurrence if present
fn toggle(ids: &mut Vec<String>, id: &str) {
    if ids.iter().any(|existing| existing == id) {
        ids.retain(|existing| existing != id);
    } else {
        ids.push(id.to_string());
    }
}

fn dedup(ids: &mut Vec<String>) {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}
