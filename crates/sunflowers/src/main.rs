use crate::prelude::*;
use clap::Parser;

mod assistant;
mod commands;
mod config;
mod context;
mod error;
mod gateway;
mod host;
mod prelude;
mod snapshot;
mod terminal;
mod transmit;

#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Project-aware code generation backed by the sunflowers gateway"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the sunflowers gateway
    #[clap(
        long,
        env = "SUNFLOWERS_GATEWAY_URL",
        global = true,
        default_value = sunflowers_core::session::Endpoints::DEFAULT_GATEWAY
    )]
    gateway_url: String,

    /// Machine identifier sent with every request (defaults to a hash of the home directory)
    #[clap(long, env = "SUNFLOWERS_MACHINE_ID", global = true)]
    machine_id: Option<String>,

    /// Session identifier sent with every request (defaults to a random id)
    #[clap(long, env = "SUNFLOWERS_SESSION_ID", global = true)]
    session_id: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "SUNFLOWERS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Ask for code generation using the focused file as context
    Ask(crate::commands::ask::AskOptions),

    /// Interactive prompt loop with live settings changes
    Chat(crate::commands::chat::ChatOptions),

    /// Inline completion after a docstring opener
    Complete(crate::commands::complete::CompleteOptions),

    /// Print the context that would be sent for the focused file
    Context(crate::commands::context::ContextOptions),

    /// Push a snapshot of the workspace to the project store
    Sync(crate::commands::sync::SyncOptions),

    /// Tear down the gateway session
    EndSession,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Ask(options) => crate::commands::ask::run(options, app.global).await,
        SubCommands::Chat(options) => crate::commands::chat::run(options, app.global).await,
        SubCommands::Complete(options) => {
            crate::commands::complete::run(options, app.global).await
        }
        SubCommands::Context(options) => crate::commands::context::run(options, app.global).await,
        SubCommands::Sync(options) => crate::commands::sync::run(options, app.global).await,
        SubCommands::EndSession => crate::commands::end_session(app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
