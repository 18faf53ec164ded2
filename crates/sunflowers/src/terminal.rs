//! Terminal stand-ins for the editor: the workspace and focused document come
//! from command-line paths, and responses are printed.

use std::path::PathBuf;

use colored::Colorize;
use sunflowers_core::assist::close_code_fences;

use crate::host::{ActiveDocument, DocumentScheme, EditorHost, Presenter, WorkspaceFolder};
use crate::prelude::{eprintln, println};

#[derive(Debug, Clone)]
pub struct TerminalHost {
    workspace: Option<WorkspaceFolder>,
    document: Option<PathBuf>,
    scheme: DocumentScheme,
}

impl TerminalHost {
    pub fn new(
        workspace: Option<WorkspaceFolder>,
        document: Option<PathBuf>,
        scheme: DocumentScheme,
    ) -> Self {
        Self {
            workspace,
            document,
            scheme,
        }
    }
}

impl EditorHost for TerminalHost {
    fn workspace(&self) -> Option<WorkspaceFolder> {
        self.workspace.clone()
    }

    /// Re-reads the document on every call so edits between prompts are seen.
    fn active_document(&self) -> Option<ActiveDocument> {
        let path = self.document.clone()?;

        let text = match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            // A file-backed buffer that no longer exists is not an open editor.
            Err(err) if self.scheme == DocumentScheme::File => {
                log::warn!("Cannot read {}: {}", path.display(), err);
                return None;
            }
            Err(_) => String::new(),
        };

        Some(ActiveDocument {
            path,
            scheme: self.scheme.clone(),
            text,
        })
    }
}

#[derive(Debug, Default)]
pub struct TerminalPresenter {
    quiet: bool,
}

impl TerminalPresenter {
    /// A presenter that only prints responses.
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Presenter for TerminalPresenter {
    fn pending(&self, text: &str) {
        if !self.quiet {
            eprintln!("{}", text.bright_black());
        }
    }

    fn respond(&self, text: &str) {
        println!("{}", close_code_fences(text));
    }

    fn warn(&self, text: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), text);
    }
}
