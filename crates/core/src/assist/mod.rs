//! Request construction and response rendering for the generation gateway.

pub mod completion;
pub mod render;
pub mod request;
pub mod types;

pub use completion::docstring_completion_prompt;
pub use render::{close_code_fences, render_result};
pub use request::{build_completion_request, build_request, normalize_prompt};
pub use types::{
    AdvancedRequest, AssistantConfig, CompletionRequest, ConfigChange, DocumentContext,
    GenerationRequest, GenerationResult, NormalRequest, MAX_ITERATION,
};
