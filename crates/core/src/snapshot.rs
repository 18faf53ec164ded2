//! Workspace snapshot data model
//!
//! A snapshot is the point-in-time list of every readable file under the
//! workspace root. Records are built fresh on each snapshot and never mutated.

use std::path::{Component, Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One workspace file as shipped to the project store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Workspace name joined with the root-relative path, `/`-separated.
    #[serde(rename = "filePath")]
    pub path: String,
    pub last_modified: DateTime<Utc>,
    pub content: String,
}

/// A file that could not be stat'ed or read while snapshotting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

impl SkippedFile {
    /// Warning text shown to the user for this file.
    pub fn warning(&self) -> String {
        format!("Failed to read file {}: {}", self.path, self.reason)
    }
}

/// Ordered file records in enumeration order, plus the files that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedFile>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(path, content)` pairs, ignoring timestamps.
    pub fn contents(&self) -> Vec<(&str, &str)> {
        self.records
            .iter()
            .map(|r| (r.path.as_str(), r.content.as_str()))
            .collect()
    }
}

/// Join the workspace name with `file`'s path relative to `root`.
///
/// The result always uses `/` separators so it is the same on every host.
/// A file outside `root` is reached through `..` segments.
///
/// ```rust,ignore
/// let path = workspace_path("demo", Path::new("/ws/demo"), Path::new("/ws/demo/src/a.py"));
/// assert_eq!(path, "demo/src/a.py");
/// ```
pub fn workspace_path(workspace_name: &str, root: &Path, file: &Path) -> String {
    let root_parts = path_segments(root);
    let file_parts = path_segments(file);

    let common = root_parts
        .iter()
        .zip(&file_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec![workspace_name.to_string()];
    parts.extend(std::iter::repeat("..".to_string()).take(root_parts.len() - common));
    parts.extend(file_parts[common..].iter().cloned());

    parts.join("/")
}

fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    #[test]
    fn test_workspace_path_nested_file() {
        let root = PathBuf::from("/home/dev/project");
        let file = root.join("src").join("pkg").join("main.py");
        assert_eq!(
            workspace_path("project", &root, &file),
            "project/src/pkg/main.py"
        );
    }

    #[test]
    fn test_workspace_path_file_at_root() {
        let root = PathBuf::from("/home/dev/project");
        let file = root.join("README.md");
        assert_eq!(workspace_path("project", &root, &file), "project/README.md");
    }

    #[test]
    fn test_workspace_path_outside_root() {
        let root = PathBuf::from("/home/dev/project");
        let file = PathBuf::from("/home/dev/other/file.py");
        assert_eq!(
            workspace_path("project", &root, &file),
            "project/../other/file.py"
        );
    }

    #[test]
    fn test_workspace_path_root_itself() {
        let root = PathBuf::from("/home/dev/project");
        assert_eq!(workspace_path("project", &root, &root), "project");
    }

    #[test]
    fn test_file_record_wire_names() {
        let record = FileRecord {
            path: "project/a.py".to_string(),
            last_modified: Utc.with_ymd_and_hms(2024, 9, 27, 10, 30, 0).unwrap(),
            content: "a = 1\n".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["filePath"], "project/a.py");
        assert_eq!(json["lastModified"], "2024-09-27T10:30:00Z");
        assert_eq!(json["content"], "a = 1\n");
        assert!(json.get("path").is_none());
    }

    #[test]
    fn test_skipped_file_warning() {
        let skipped = SkippedFile {
            path: "/ws/secret.bin".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            skipped.warning(),
            "Failed to read file /ws/secret.bin: permission denied"
        );
    }
}
