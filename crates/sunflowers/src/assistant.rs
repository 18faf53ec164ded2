//! Request orchestration: one prompt in, one presentation update out.

use std::sync::Arc;

use sunflowers_core::assist::{
    build_completion_request, build_request, docstring_completion_prompt, normalize_prompt,
    render_result, AssistantConfig, ConfigChange,
};
use sunflowers_core::batch::{SendOutcome, CHUNK_SIZE};
use sunflowers_core::AssistError;
use tokio::sync::RwLock;

use crate::context::current_context;
use crate::gateway::Gateway;
use crate::host::{EditorHost, Presenter};
use crate::snapshot::snapshot_workspace;
use crate::transmit;

/// Shown while a generation request is in flight.
pub const PENDING_MESSAGE: &str = "Wait for SunflowersDev ...";

pub struct Assistant {
    gateway: Gateway,
    host: Arc<dyn EditorHost>,
    presenter: Arc<dyn Presenter>,
    config: RwLock<AssistantConfig>,
    chunk_size: usize,
}

impl Assistant {
    pub fn new(
        gateway: Gateway,
        host: Arc<dyn EditorHost>,
        presenter: Arc<dyn Presenter>,
        config: AssistantConfig,
    ) -> Self {
        Self {
            gateway,
            host,
            presenter,
            config: RwLock::new(config),
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Override the number of records per project batch.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub async fn config(&self) -> AssistantConfig {
        self.config.read().await.clone()
    }

    /// Replace the current settings; the next submission uses them.
    pub async fn update(&self, config: AssistantConfig) {
        *self.config.write().await = config;
    }

    /// Apply a partial settings change from the editor.
    ///
    /// Switching advanced mode on pushes the project right away so the first
    /// advanced request does not wait on a cold store.
    pub async fn on_config_changed(&self, change: ConfigChange) {
        let enabled_advanced = self.config.write().await.apply(change);
        log::info!("Configuration changed");

        if enabled_advanced {
            match self.sync().await {
                Ok(outcome) => log::info!("Sent project to server ({} files)", outcome.records),
                Err(err) => {
                    log::warn!("Project sync after configuration change failed: {err}");
                    self.presenter.warn(err.user_message());
                }
            }
        }
    }

    /// Run one prompt through the full request cycle.
    ///
    /// Absent or blank prompts are ignored without any presentation update.
    /// Every other path ends in exactly one [`Presenter::respond`] call.
    pub async fn submit(&self, prompt: Option<&str>) {
        let Some(prompt) = normalize_prompt(prompt) else {
            return;
        };

        let message = match self.generate(prompt).await {
            Ok(answer) => answer,
            Err(err) => {
                log::error!("Generation failed: {err}");
                err.user_message().to_string()
            }
        };

        self.presenter.respond(&message);
    }

    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let document = current_context(self.host.as_ref()).await?;

        self.presenter.pending(PENDING_MESSAGE);

        let config = self.config().await;
        let request = build_request(&config, prompt, document);

        if request.is_advanced() {
            self.sync().await?;
        }

        log::debug!(
            "Sending {} generate request",
            if request.is_advanced() { "advanced" } else { "normal" }
        );
        let result = self.gateway.generate(&request).await?;
        log::debug!("Received response from server");

        Ok(render_result(&result))
    }

    /// Snapshot the workspace and push it to the project store.
    pub async fn sync(&self) -> Result<SendOutcome, AssistError> {
        let snapshot = snapshot_workspace(self.host.as_ref()).await?;

        for skipped in &snapshot.skipped {
            self.presenter.warn(&skipped.warning());
        }

        transmit::send(&self.gateway, &snapshot, self.chunk_size)
            .await
            .into_result()
    }

    /// Inline completion for the cursor at `line` of the focused document.
    ///
    /// Returns `Ok(None)` when the cursor is not right after a docstring
    /// opener, or when no document is focused.
    pub async fn complete(&self, line: usize) -> Result<Option<String>, AssistError> {
        let Some(document) = self.host.active_document() else {
            return Ok(None);
        };
        let Some(prompt) = docstring_completion_prompt(&document.text, line) else {
            return Ok(None);
        };

        let config = self.config().await;
        let request = build_completion_request(&config, &prompt);

        log::debug!("Sending completion request");
        let code = self.gateway.complete(&request, config.advanced).await?;

        Ok(Some(code))
    }

    /// Tear down the gateway session. Failures are only logged.
    pub async fn end_session(&self) {
        self.gateway.end_session().await;
    }
}
