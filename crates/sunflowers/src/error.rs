#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown setting: {0}. Valid settings: apiKey, baseUrl, advanced")]
    UnknownSetting(String),

    #[error("Invalid value for {setting}: {value}")]
    InvalidSetting { setting: String, value: String },

    #[error("Could not parse command: {0}")]
    InvalidCommand(String),
}
