use colored::Colorize;
use serde::Serialize;

use crate::config::HostArgs;
use crate::prelude::{println, *};

/// Options for inspecting the extracted document context
#[derive(Debug, clap::Args, Clone)]
pub struct ContextOptions {
    #[clap(flatten)]
    pub host: HostArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContextOutput {
    target_file: String,
    content: String,
}

/// Handle the context command
pub async fn run(options: ContextOptions, _global: crate::Global) -> Result<()> {
    let host = options.host.into_host()?;

    let document = crate::context::current_context(&host)
        .await
        .map_err(|err| eyre!("{}", err.user_message()))?;

    if options.json {
        let output = ContextOutput {
            target_file: document.relative_path,
            content: document.content,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", document.relative_path.bold().cyan());
        println!("{}", "=".repeat(80).bright_black());
        println!("{}", document.content);
    }

    Ok(())
}
