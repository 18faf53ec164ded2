//! Error taxonomy for the assistant pipeline
//!
//! Every failure that can reach the user is one of these variants. The
//! variant is decided once, where the failure happens (HTTP boundary,
//! extractor, transmitter), and callers only ever turn it into text with
//! [`AssistError::user_message`].

/// Message shown when the generation endpoint rejects the credentials.
pub const AUTHENTICATION_MESSAGE: &str = "Authentication error. Please check model config!";
/// Message shown when the gateway cannot be reached.
pub const CONNECTIVITY_MESSAGE: &str = "Can not connect to server!";
/// Message shown for every other server-side failure.
pub const SERVER_MESSAGE: &str = "Server error!";
pub const NO_WORKSPACE_MESSAGE: &str = "No workspace folder is open!";
pub const NO_ACTIVE_DOCUMENT_MESSAGE: &str = "No active editor found!";
pub const UNSUPPORTED_DOCUMENT_MESSAGE: &str = "Active file is not a physical file!";
pub const INVALID_NOTEBOOK_MESSAGE: &str = "Active notebook could not be read!";
pub const TRANSMISSION_MESSAGE: &str = "Failed to send project to server!";
pub const ENCODE_MESSAGE: &str = "Failed to prepare request!";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("no workspace folder is open")]
    NoWorkspace,

    #[error("no active document")]
    NoActiveDocument,

    #[error("document is neither a file on disk nor a notebook: {0}")]
    UnsupportedDocument(String),

    #[error("failed to load notebook {path}: {reason}")]
    InvalidNotebook { path: String, reason: String },

    #[error("{failed} of {total} project batches failed to send")]
    Transmission { failed: usize, total: usize },

    #[error("endpoint rejected credentials")]
    Authentication,

    #[error("endpoint unreachable: {0}")]
    Connectivity(String),

    #[error("server failure (status {status:?}): {reason}")]
    Server { status: Option<u16>, reason: String },

    #[error("failed to encode payload: {0}")]
    Encode(String),
}

impl AssistError {
    /// The single human-readable line handed to the presentation layer.
    ///
    /// Never includes the internal detail carried by the variant; that detail
    /// is only meant for logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            AssistError::NoWorkspace => NO_WORKSPACE_MESSAGE,
            AssistError::NoActiveDocument => NO_ACTIVE_DOCUMENT_MESSAGE,
            AssistError::UnsupportedDocument(_) => UNSUPPORTED_DOCUMENT_MESSAGE,
            AssistError::InvalidNotebook { .. } => INVALID_NOTEBOOK_MESSAGE,
            AssistError::Transmission { .. } => TRANSMISSION_MESSAGE,
            AssistError::Authentication => AUTHENTICATION_MESSAGE,
            AssistError::Connectivity(_) => CONNECTIVITY_MESSAGE,
            AssistError::Server { .. } => SERVER_MESSAGE,
            AssistError::Encode(_) => ENCODE_MESSAGE,
        }
    }
}

/// Map a non-success HTTP status from the gateway to its error kind.
///
/// `body` is the raw response body; when it is a JSON object with an
/// `error` field that text is kept as the (log-only) reason.
pub fn classify_status(status: u16, body: &str) -> AssistError {
    match status {
        401 => AssistError::Authentication,
        404 => AssistError::Connectivity(format!("endpoint returned 404: {}", error_reason(body))),
        _ => AssistError::Server {
            status: Some(status),
            reason: error_reason(body),
        },
    }
}

fn error_reason(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
