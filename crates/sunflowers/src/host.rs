//! Narrow interfaces to the hosting editor.
//!
//! The assistant never talks to an editor API directly. It asks an
//! [`EditorHost`] for the open workspace and focused document, and reports
//! back through a [`Presenter`].

use std::path::PathBuf;

/// The workspace root the user has open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    pub name: String,
    pub root: PathBuf,
}

impl WorkspaceFolder {
    /// Workspace named after the last component of `root`.
    pub fn from_root(root: PathBuf) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workspace".to_string());
        Self { name, root }
    }
}

/// Where a document's buffer lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentScheme {
    /// A plain file on disk.
    File,
    /// Anything else: notebook cells, untitled buffers, virtual documents.
    Other(String),
}

/// The focused document with its live buffer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    pub path: PathBuf,
    pub scheme: DocumentScheme,
    /// Buffer text, which may differ from disk when unsaved.
    pub text: String,
}

pub trait EditorHost: Send + Sync {
    fn workspace(&self) -> Option<WorkspaceFolder>;

    fn active_document(&self) -> Option<ActiveDocument>;
}

/// Output side of the assistant.
///
/// Each submission ends in exactly one call to [`Presenter::respond`].
/// `pending` and `warn` are informational and may be called any number of
/// times before that.
pub trait Presenter: Send + Sync {
    /// Shown while a request is in flight.
    fn pending(&self, text: &str);

    /// The terminal result (or error message) of a submission.
    fn respond(&self, text: &str);

    /// Non-fatal notices, e.g. files skipped while snapshotting.
    fn warn(&self, text: &str);
}
