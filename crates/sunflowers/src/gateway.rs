//! HTTP client for the sunflowers gateway.
//!
//! This is the one place where transport failures and HTTP statuses are
//! turned into [`AssistError`] kinds.

use reqwest::header::{HeaderValue, CONTENT_ENCODING, CONTENT_TYPE};
use sunflowers_core::assist::{CompletionRequest, GenerationRequest, GenerationResult};
use sunflowers_core::batch::{encode_payload, CONTENT_ENCODING as GZIP};
use sunflowers_core::error::classify_status;
use sunflowers_core::session::{Endpoints, SessionIds};
use sunflowers_core::snapshot::FileRecord;
use sunflowers_core::AssistError;

#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    endpoints: Endpoints,
    session: SessionIds,
}

impl Gateway {
    pub fn new(client: reqwest::Client, endpoints: Endpoints, session: SessionIds) -> Self {
        Self {
            client,
            endpoints,
            session,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// `POST <generate>?machineId=&sessionId=&advanced=`
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, AssistError> {
        let advanced = if request.is_advanced() { "true" } else { "false" };

        let response = self
            .client
            .post(&self.endpoints.generate)
            .query(&self.session.query())
            .query(&[("advanced", advanced)])
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_response(response).await?;

        response
            .json::<GenerationResult>()
            .await
            .map_err(|e| AssistError::Server {
                status: None,
                reason: format!("unexpected generation response: {e}"),
            })
    }

    /// `POST <completion>?advanced=`, returning the completed code.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
        advanced: bool,
    ) -> Result<String, AssistError> {
        let response = self
            .client
            .post(&self.endpoints.completion)
            .query(&[("advanced", if advanced { "true" } else { "false" })])
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_response(response).await?;

        let result: GenerationResult = response.json().await.map_err(|e| AssistError::Server {
            status: None,
            reason: format!("unexpected completion response: {e}"),
        })?;

        Ok(result.code)
    }

    /// `POST <store>?machineId=&sessionId=` with a gzip JSON body.
    pub async fn store(&self, records: &[FileRecord]) -> Result<(), AssistError> {
        let body = encode_payload(records)?;

        let response = self
            .client
            .post(&self.endpoints.store)
            .query(&self.session.query())
            .header(CONTENT_ENCODING, HeaderValue::from_static(GZIP))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        check_response(response).await?;
        Ok(())
    }

    /// `DELETE <kill-session>?machineId=&sessionId=`, returning the gateway's message.
    pub async fn kill_session(&self) -> Result<Option<String>, AssistError> {
        let response = self
            .client
            .delete(&self.endpoints.kill_session)
            .query(&self.session.query())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_response(response).await?;

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

        Ok(message)
    }

    /// Tear down the session. Failures are logged and swallowed.
    pub async fn end_session(&self) -> Option<String> {
        match self.kill_session().await {
            Ok(message) => {
                log::info!(
                    "Session ended: {}",
                    message.as_deref().unwrap_or("no message")
                );
                message
            }
            Err(err) => {
                log::warn!("Failed to end session: {err}");
                None
            }
        }
    }
}

/// Requests that never got a response.
fn transport_error(err: reqwest::Error) -> AssistError {
    AssistError::Connectivity(err.to_string())
}

/// Check that an HTTP response was successful, classifying it otherwise.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AssistError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::debug!("Gateway responded {status}: {body}");
    Err(classify_status(status.as_u16(), &body))
}
