use serde::{Deserialize, Serialize};

/// Iteration budget sent with every advanced request.
pub const MAX_ITERATION: u32 = 2;

/// Model settings the user controls from the editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantConfig {
    pub api_key: String,
    pub base_url: String,
    pub advanced: bool,
}

/// A partial configuration change; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigChange {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub advanced: Option<bool>,
}

impl AssistantConfig {
    /// Apply `change`, returning true when it switched advanced mode on.
    pub fn apply(&mut self, change: ConfigChange) -> bool {
        let was_advanced = self.advanced;

        if let Some(api_key) = change.api_key {
            self.api_key = api_key;
        }
        if let Some(base_url) = change.base_url {
            self.base_url = base_url;
        }
        if let Some(advanced) = change.advanced {
            self.advanced = advanced;
        }

        self.advanced && !was_advanced
    }
}

/// Effective source of the focused document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    pub content: String,
    /// Workspace name joined with the root-relative path.
    pub relative_path: String,
}

/// Fields shared by both request shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalRequest {
    pub prompt: String,
    pub base_url: String,
    pub api_key: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedRequest {
    #[serde(flatten)]
    pub base: NormalRequest,
    pub target_file: String,
    pub max_iteration: u32,
}

/// Body of a generation call. Only the advanced shape carries a target file
/// and an iteration budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationRequest {
    Normal(NormalRequest),
    Advanced(AdvancedRequest),
}

impl GenerationRequest {
    pub fn is_advanced(&self) -> bool {
        matches!(self, GenerationRequest::Advanced(_))
    }
}

/// Successful response of the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub code: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Body of an inline completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub prompt: String,
    pub base_url: String,
    pub api_key: String,
}
