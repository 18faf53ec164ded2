use colored::Colorize;
use serde::Serialize;

use crate::config::{HostArgs, ModelArgs};
use crate::prelude::{println, *};

/// Options for pushing the project snapshot
#[derive(Debug, clap::Args, Clone)]
pub struct SyncOptions {
    #[clap(flatten)]
    pub host: HostArgs,

    #[clap(flatten)]
    pub model: ModelArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SyncOutput {
    files: usize,
    batches: usize,
}

/// Handle the sync command
pub async fn run(options: SyncOptions, global: crate::Global) -> Result<()> {
    let presenter = super::terminal_presenter(&global);
    let assistant = super::create_assistant(&global, options.host, &options.model, presenter)?;

    let outcome = assistant
        .sync()
        .await
        .map_err(|err| eyre!("{}", err.user_message()))?;

    if options.json {
        let output = SyncOutput {
            files: outcome.records,
            batches: outcome.batches,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Files".bold().cyan(),
        outcome.records.to_string().bright_white()
    ]);
    table.add_row(prettytable::row![
        "Batches".bold().cyan(),
        outcome.batches.to_string().bright_white()
    ]);
    table.add_row(prettytable::row![
        "Status".bold().cyan(),
        "sent".green().to_string()
    ]);
    table.printstd();

    Ok(())
}
