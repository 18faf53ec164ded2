//! Session identity and gateway endpoint layout

/// Identifiers that scope every gateway call to one editor session.
///
/// Both values are opaque to the client; the gateway keys its per-session
/// project store and workers on the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIds {
    pub machine_id: String,
    pub session_id: String,
}

impl SessionIds {
    pub fn new(machine_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            machine_id: machine_id.into(),
            session_id: session_id.into(),
        }
    }

    /// Query parameters identifying the session.
    pub fn query(&self) -> [(&'static str, &str); 2] {
        [
            ("machineId", self.machine_id.as_str()),
            ("sessionId", self.session_id.as_str()),
        ]
    }
}

/// Gateway URLs used by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub generate: String,
    pub store: String,
    pub kill_session: String,
    pub completion: String,
}

impl Endpoints {
    /// Default gateway location for local development.
    pub const DEFAULT_GATEWAY: &'static str = "http://localhost:8000";

    /// Derive every endpoint from the gateway base URL.
    pub fn from_gateway(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            generate: format!("{base}/v1/api/gen"),
            store: format!("{base}/v1/api/store"),
            kill_session: format!("{base}/v1/api/kill-session"),
            completion: format!("{base}/v1/api/complete"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_gateway(Self::DEFAULT_GATEWAY)
    }
}
