use std::path::Path;

use sunflowers_core::assist::DocumentContext;
use sunflowers_core::notebook::{extract_code_cells, is_notebook_path};
use sunflowers_core::snapshot::workspace_path;
use sunflowers_core::AssistError;

use crate::host::{DocumentScheme, EditorHost};

/// Effective source and workspace path of the focused document.
///
/// Notebooks are re-read from disk and reduced to their code cells. Any other
/// document must be a plain file, and its live buffer text is used as is.
pub async fn current_context(host: &dyn EditorHost) -> Result<DocumentContext, AssistError> {
    let workspace = host.workspace().ok_or(AssistError::NoWorkspace)?;
    let document = host.active_document().ok_or(AssistError::NoActiveDocument)?;

    let display_path = document.path.to_string_lossy().into_owned();

    let content = if is_notebook_path(&display_path) {
        load_notebook(&document.path).await?
    } else if document.scheme == DocumentScheme::File {
        document.text
    } else {
        return Err(AssistError::UnsupportedDocument(display_path));
    };

    Ok(DocumentContext {
        content,
        relative_path: workspace_path(&workspace.name, &workspace.root, &document.path),
    })
}

async fn load_notebook(path: &Path) -> Result<String, AssistError> {
    let invalid = |reason: String| AssistError::InvalidNotebook {
        path: path.display().to_string(),
        reason,
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| invalid(e.to_string()))?;

    extract_code_cells(&raw).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ActiveDocument, WorkspaceFolder};
    use crate::testing::FixedHost;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn folder(root: &Path) -> WorkspaceFolder {
        WorkspaceFolder {
            name: "demo".to_string(),
            root: root.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn test_plain_file_uses_buffer_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src/app.py");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "saved = True\n").unwrap();

        let host = FixedHost {
            workspace: Some(folder(dir.path())),
            document: Some(ActiveDocument {
                path,
                scheme: DocumentScheme::File,
                text: "unsaved = True\n".to_string(),
            }),
        };

        let context = current_context(&host).await.unwrap();
        assert_eq!(context.content, "unsaved = True\n");
        assert_eq!(context.relative_path, "demo/src/app.py");
    }

    #[tokio::test]
    async fn test_notebook_uses_code_cells_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("analysis.ipynb");
        fs::write(
            &path,
            r#"{"cells": [
                {"cell_type": "code", "source": ["a=1\n"]},
                {"cell_type": "markdown", "source": ["b\n"]},
                {"cell_type": "code", "source": ["c=3\n"]}
            ]}"#,
        )
        .unwrap();

        let host = FixedHost {
            workspace: Some(folder(dir.path())),
            document: Some(ActiveDocument {
                path,
                scheme: DocumentScheme::Other("vscode-notebook-cell".to_string()),
                text: "c=3\n".to_string(),
            }),
        };

        let context = current_context(&host).await.unwrap();
        assert_eq!(context.content, "a=1\n\nc=3\n");
        assert_eq!(context.relative_path, "demo/analysis.ipynb");
    }

    #[tokio::test]
    async fn test_no_workspace() {
        let host = FixedHost {
            workspace: None,
            document: None,
        };
        assert_eq!(
            current_context(&host).await.unwrap_err(),
            AssistError::NoWorkspace
        );
    }

    #[tokio::test]
    async fn test_no_active_document() {
        let host = FixedHost {
            workspace: Some(folder(Path::new("/ws/demo"))),
            document: None,
        };
        assert_eq!(
            current_context(&host).await.unwrap_err(),
            AssistError::NoActiveDocument
        );
    }

    #[tokio::test]
    async fn test_virtual_document_is_unsupported() {
        let host = FixedHost {
            workspace: Some(folder(Path::new("/ws/demo"))),
            document: Some(ActiveDocument {
                path: PathBuf::from("Untitled-1"),
                scheme: DocumentScheme::Other("untitled".to_string()),
                text: "draft".to_string(),
            }),
        };

        let err = current_context(&host).await.unwrap_err();
        assert!(matches!(err, AssistError::UnsupportedDocument(_)));
        assert_eq!(err.user_message(), "Active file is not a physical file!");
    }

    #[tokio::test]
    async fn test_missing_notebook_is_invalid_notebook() {
        let dir = TempDir::new().unwrap();
        let host = FixedHost {
            workspace: Some(folder(dir.path())),
            document: Some(ActiveDocument {
                path: dir.path().join("gone.ipynb"),
                scheme: DocumentScheme::Other("vscode-notebook-cell".to_string()),
                text: String::new(),
            }),
        };

        let err = current_context(&host).await.unwrap_err();
        assert!(matches!(err, AssistError::InvalidNotebook { .. }));
    }
}
