pub mod ask;
pub mod chat;
pub mod complete;
pub mod context;
pub mod sync;

use std::sync::Arc;

use sunflowers_core::assist::AssistantConfig;

use crate::assistant::Assistant;
use crate::config::{endpoints, session_ids, HostArgs, ModelArgs};
use crate::gateway::Gateway;
use crate::host::Presenter;
use crate::prelude::{println, *};
use crate::terminal::{TerminalHost, TerminalPresenter};

/// Build the HTTP client shared by every gateway call.
fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("sunflowers/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

fn create_gateway(global: &crate::Global) -> Result<Gateway> {
    let session = session_ids(global.machine_id.clone(), global.session_id.clone());
    let endpoints = endpoints(&global.gateway_url);

    if global.verbose {
        println!("Gateway: {}", global.gateway_url);
        println!("Machine: {}", session.machine_id);
        println!("Session: {}", session.session_id);
    }

    Ok(Gateway::new(create_client()?, endpoints, session))
}

/// Wire an assistant to the terminal host and presenter.
fn create_assistant(
    global: &crate::Global,
    host: HostArgs,
    model: &ModelArgs,
    presenter: Arc<dyn Presenter>,
) -> Result<Assistant> {
    let gateway = create_gateway(global)?;
    let host: TerminalHost = host.into_host()?;

    Ok(
        Assistant::new(gateway, Arc::new(host), presenter, AssistantConfig::from(model))
            .with_chunk_size(model.chunk_size),
    )
}

fn terminal_presenter(global: &crate::Global) -> Arc<dyn Presenter> {
    if global.verbose {
        Arc::new(TerminalPresenter::default())
    } else {
        Arc::new(TerminalPresenter::quiet())
    }
}

/// Handle the end-session command
pub async fn end_session(global: crate::Global) -> Result<()> {
    let gateway = create_gateway(&global)?;

    if let Some(message) = gateway.end_session().await {
        println!("{}", message);
    }

    Ok(())
}
