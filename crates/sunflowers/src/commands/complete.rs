use crate::config::{HostArgs, ModelArgs};
use crate::prelude::{println, *};

/// Options for an inline completion
#[derive(Debug, clap::Args, Clone)]
pub struct CompleteOptions {
    /// 0-indexed line of the cursor; the line above must open a docstring
    #[arg(long)]
    pub line: usize,

    #[clap(flatten)]
    pub host: HostArgs,

    #[clap(flatten)]
    pub model: ModelArgs,
}

/// Handle the complete command
pub async fn run(options: CompleteOptions, global: crate::Global) -> Result<()> {
    let presenter = super::terminal_presenter(&global);
    let assistant = super::create_assistant(&global, options.host, &options.model, presenter)?;

    match assistant.complete(options.line).await {
        Ok(Some(code)) => println!("{}", code),
        Ok(None) => log::info!("No completion: line {} does not follow a docstring opener", options.line),
        Err(err) => {
            log::error!("Completion failed: {err}");
            return Err(eyre!("{}", err.user_message()));
        }
    }

    Ok(())
}
