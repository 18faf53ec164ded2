use std::path::PathBuf;

use rand::Rng;
use sunflowers_core::assist::AssistantConfig;
use sunflowers_core::batch::CHUNK_SIZE;
use sunflowers_core::session::{Endpoints, SessionIds};

use crate::host::{DocumentScheme, WorkspaceFolder};
use crate::prelude::*;
use crate::terminal::TerminalHost;

/// Model settings, read from the environment with command-line overrides.
#[derive(Debug, Clone, clap::Args)]
pub struct ModelArgs {
    /// API key forwarded to the model provider
    #[clap(long, env = "SUNFLOWERS_MODEL_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the model provider
    #[clap(long, env = "SUNFLOWERS_MODEL_BASE_URL", default_value = "")]
    pub base_url: String,

    /// Sync the whole project and run multi-iteration generation
    #[clap(long, env = "SUNFLOWERS_ADVANCED_ASSISTANT", default_value = "false")]
    pub advanced: bool,

    /// Files per upload request once a project is large enough to batch
    #[clap(long, env = "SUNFLOWERS_CHUNK_SIZE", default_value_t = CHUNK_SIZE, hide = true)]
    pub chunk_size: usize,
}

impl From<&ModelArgs> for AssistantConfig {
    fn from(args: &ModelArgs) -> Self {
        AssistantConfig {
            api_key: args.api_key.clone(),
            base_url: args.base_url.clone(),
            advanced: args.advanced,
        }
    }
}

/// Which workspace and document the terminal host exposes.
#[derive(Debug, Clone, clap::Args)]
pub struct HostArgs {
    /// Workspace root
    #[clap(long, short, env = "SUNFLOWERS_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Document treated as the focused editor
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// URI scheme of the focused document (anything but "file" is a virtual buffer)
    #[clap(long, default_value = "file")]
    pub scheme: String,
}

impl HostArgs {
    pub fn into_host(self) -> Result<TerminalHost> {
        let root = self.workspace.canonicalize().map_err(|e| {
            eyre!(
                "Workspace {} is not accessible: {}",
                self.workspace.display(),
                e
            )
        })?;

        let document = self.file.map(|file| {
            if file.is_absolute() {
                file
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(&file))
                    .unwrap_or(file)
            }
        });

        let scheme = match self.scheme.as_str() {
            "file" => DocumentScheme::File,
            other => DocumentScheme::Other(other.to_string()),
        };

        Ok(TerminalHost::new(
            Some(WorkspaceFolder::from_root(root)),
            document,
            scheme,
        ))
    }
}

/// Gateway endpoints, honouring per-endpoint overrides from the environment.
pub fn endpoints(gateway_url: &str) -> Endpoints {
    let mut endpoints = Endpoints::from_gateway(gateway_url);

    let overrides = [
        ("SUNFLOWERS_GENERATE_URL", &mut endpoints.generate),
        ("SUNFLOWERS_STORE_URL", &mut endpoints.store),
        ("SUNFLOWERS_KILL_SESSION_URL", &mut endpoints.kill_session),
        ("SUNFLOWERS_COMPLETION_URL", &mut endpoints.completion),
    ];
    for (var, slot) in overrides {
        if let Ok(url) = std::env::var(var) {
            *slot = url;
        }
    }

    endpoints
}

/// Session identifiers, generating stable/random defaults for missing ones.
pub fn session_ids(machine_id: Option<String>, session_id: Option<String>) -> SessionIds {
    let machine_id = machine_id.unwrap_or_else(default_machine_id);
    let session_id = session_id.unwrap_or_else(random_session_id);
    SessionIds::new(machine_id, session_id)
}

/// Stable per-user identifier: md5 of the home directory path.
fn default_machine_id() -> String {
    let seed = dirs_next::home_dir()
        .map(|home| home.display().to_string())
        .unwrap_or_else(|| "unknown-machine".to_string());
    format!("{:x}", md5::compute(seed.as_bytes()))
}

fn random_session_id() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_keep_explicit_values() {
        let ids = session_ids(Some("m".to_string()), Some("s".to_string()));
        assert_eq!(ids, SessionIds::new("m", "s"));
    }

    #[test]
    fn test_default_session_ids() {
        let a = session_ids(None, None);
        let b = session_ids(None, None);

        assert_eq!(a.machine_id, b.machine_id);
        assert_eq!(a.machine_id.len(), 32);
        assert_eq!(a.session_id.len(), 32);
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_model_args_into_config() {
        let args = ModelArgs {
            api_key: "k".to_string(),
            base_url: "u".to_string(),
            advanced: true,
            chunk_size: CHUNK_SIZE,
        };
        assert_eq!(
            AssistantConfig::from(&args),
            AssistantConfig {
                api_key: "k".to_string(),
                base_url: "u".to_string(),
                advanced: true
            }
        );
    }

    #[test]
    fn test_host_args_names_workspace_after_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("my-project");
        std::fs::create_dir_all(&root).unwrap();

        let host = HostArgs {
            workspace: root,
            file: None,
            scheme: "file".to_string(),
        }
        .into_host()
        .unwrap();

        use crate::host::EditorHost;
        assert_eq!(host.workspace().unwrap().name, "my-project");
    }

    #[test]
    fn test_host_args_missing_workspace() {
        let result = HostArgs {
            workspace: PathBuf::from("/definitely/not/here"),
            file: None,
            scheme: "file".to_string(),
        }
        .into_host();
        assert!(result.is_err());
    }
}
