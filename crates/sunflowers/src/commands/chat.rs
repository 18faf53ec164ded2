use colored::Colorize;
use sunflowers_core::assist::{AssistantConfig, ConfigChange};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::{HostArgs, ModelArgs};
use crate::prelude::{eprintln, println, *};

/// Options for the interactive loop
#[derive(Debug, clap::Args, Clone)]
pub struct ChatOptions {
    #[clap(flatten)]
    pub host: HostArgs,

    #[clap(flatten)]
    pub model: ModelArgs,
}

/// One line of chat input.
#[derive(Debug, PartialEq, Eq)]
enum ChatCommand {
    Prompt(String),
    Set(ConfigChange),
    Reset,
    Sync,
    Quit,
}

const HELP: &str = "\
Type a prompt and press enter. Commands:
  /set apiKey <key>        change the model API key
  /set baseUrl <url>       change the model base URL
  /set advanced <on|off>   toggle advanced mode
  /reset                   restore the settings the session started with
  /sync                    push the project now
  /quit                    end the session";

fn parse_line(line: &str) -> Result<ChatCommand, Error> {
    let trimmed = line.trim();

    let Some(command) = trimmed.strip_prefix('/') else {
        return Ok(ChatCommand::Prompt(line.to_string()));
    };

    let words = shlex::split(command).ok_or_else(|| Error::InvalidCommand(line.to_string()))?;

    match words.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["quit"] | ["exit"] => Ok(ChatCommand::Quit),
        ["reset"] => Ok(ChatCommand::Reset),
        ["sync"] => Ok(ChatCommand::Sync),
        ["set", setting, value] => parse_setting(setting, value).map(ChatCommand::Set),
        _ => Err(Error::InvalidCommand(line.to_string())),
    }
}

fn parse_setting(setting: &str, value: &str) -> Result<ConfigChange, Error> {
    let mut change = ConfigChange::default();

    match setting {
        "apiKey" => change.api_key = Some(value.to_string()),
        "baseUrl" => change.base_url = Some(value.to_string()),
        "advanced" => {
            change.advanced = Some(match value.to_ascii_lowercase().as_str() {
                "true" | "on" | "1" | "yes" => true,
                "false" | "off" | "0" | "no" => false,
                _ => {
                    return Err(Error::InvalidSetting {
                        setting: setting.to_string(),
                        value: value.to_string(),
                    })
                }
            })
        }
        other => return Err(Error::UnknownSetting(other.to_string())),
    }

    Ok(change)
}

/// Handle the chat command
pub async fn run(options: ChatOptions, global: crate::Global) -> Result<()> {
    let initial = AssistantConfig::from(&options.model);
    let presenter = super::terminal_presenter(&global);
    let assistant = super::create_assistant(&global, options.host, &options.model, presenter)?;

    eprintln!("{}", HELP.bright_black());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        match parse_line(&line) {
            Ok(ChatCommand::Prompt(prompt)) => assistant.submit(Some(&prompt)).await,
            Ok(ChatCommand::Set(change)) => {
                assistant.on_config_changed(change).await;
                let config = assistant.config().await;
                eprintln!(
                    "{} advanced={} baseUrl={}",
                    "settings:".green(),
                    config.advanced,
                    config.base_url
                );
            }
            Ok(ChatCommand::Reset) => assistant.update(initial.clone()).await,
            Ok(ChatCommand::Sync) => match assistant.sync().await {
                Ok(outcome) => println!(
                    "Sent {} files in {} batch(es)",
                    outcome.records, outcome.batches
                ),
                Err(err) => println!("{}", err.user_message()),
            },
            Ok(ChatCommand::Quit) => break,
            Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
        }
    }

    assistant.end_session().await;

    Ok(())
}
