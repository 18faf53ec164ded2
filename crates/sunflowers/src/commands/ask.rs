use crate::config::{HostArgs, ModelArgs};
use crate::prelude::*;

/// Options for a one-shot generation request
#[derive(Debug, clap::Args, Clone)]
pub struct AskOptions {
    /// What to generate or change
    pub prompt: Option<String>,

    #[clap(flatten)]
    pub host: HostArgs,

    #[clap(flatten)]
    pub model: ModelArgs,

    /// Tear down the gateway session after the response
    #[arg(long)]
    pub end_session: bool,
}

/// Handle the ask command
pub async fn run(options: AskOptions, global: crate::Global) -> Result<()> {
    let presenter = super::terminal_presenter(&global);
    let assistant = super::create_assistant(&global, options.host, &options.model, presenter)?;

    assistant.submit(options.prompt.as_deref()).await;

    if options.end_session {
        assistant.end_session().await;
    }

    Ok(())
}
