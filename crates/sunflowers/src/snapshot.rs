use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use sunflowers_core::snapshot::{workspace_path, FileRecord, SkippedFile, Snapshot};
use sunflowers_core::AssistError;

use crate::host::{EditorHost, WorkspaceFolder};

/// Entries the editor hides from file search by default.
const EXCLUDED_NAMES: &[&str] = &[".git", ".svn", ".hg", "CVS", ".DS_Store", "Thumbs.db"];

/// Snapshot the host's open workspace.
pub async fn snapshot_workspace(host: &dyn EditorHost) -> Result<Snapshot, AssistError> {
    let workspace = host.workspace().ok_or(AssistError::NoWorkspace)?;
    Ok(snapshot(&workspace).await)
}

/// Read every file under the workspace root into a [`Snapshot`].
///
/// The directory walk runs on the blocking pool. A file that cannot be
/// stat'ed or read is recorded in `skipped` and the snapshot carries on with
/// the rest.
pub async fn snapshot(workspace: &WorkspaceFolder) -> Snapshot {
    let root = workspace.root.clone();
    let walk = tokio::task::spawn_blocking(move || enumerate_files(&root));

    let (files, mut skipped) = match walk.await {
        Ok(walked) => walked,
        Err(err) => {
            log::error!("Workspace walk did not complete: {}", err);
            let skipped = vec![SkippedFile {
                path: workspace.root.display().to_string(),
                reason: err.to_string(),
            }];
            (Vec::new(), skipped)
        }
    };
    let mut records = Vec::with_capacity(files.len());

    for file in files {
        match read_record(workspace, &file).await {
            Ok(record) => records.push(record),
            Err(err) => {
                log::warn!("Skipping {}: {}", file.display(), err);
                skipped.push(SkippedFile {
                    path: file.display().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    log::debug!(
        "Snapshot of {} has {} files ({} skipped)",
        workspace.root.display(),
        records.len(),
        skipped.len()
    );

    Snapshot { records, skipped }
}

async fn read_record(workspace: &WorkspaceFolder, file: &Path) -> std::io::Result<FileRecord> {
    let metadata = tokio::fs::metadata(file).await?;
    let modified = metadata.modified()?;
    let bytes = tokio::fs::read(file).await?;

    Ok(FileRecord {
        path: workspace_path(&workspace.name, &workspace.root, file),
        last_modified: DateTime::<Utc>::from(modified),
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Walk `root` recursively, returning regular files in walk order.
///
/// Hidden files are included and ignore files are not honoured; only the
/// entries in `EXCLUDED_NAMES` are pruned. Symlinks are followed, so a link
/// to a file is listed under the link's own path. Dangling links and link
/// loops end up in the skipped list.
fn enumerate_files(root: &Path) -> (Vec<PathBuf>, Vec<SkippedFile>) {
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !EXCLUDED_NAMES.contains(&name))
        })
        .build();

    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                log::warn!("Failed to walk workspace entry: {}", err);
                let path = error_path(&err).unwrap_or(root);
                skipped.push(SkippedFile {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    (files, skipped)
}

/// The entry a walk error is about, when the error carries one.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
