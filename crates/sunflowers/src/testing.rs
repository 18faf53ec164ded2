//! Test doubles for the editor collaborators.

use std::sync::Mutex;

use crate::host::{ActiveDocument, EditorHost, Presenter, WorkspaceFolder};

pub struct FixedHost {
    pub workspace: Option<WorkspaceFolder>,
    pub document: Option<ActiveDocument>,
}

impl EditorHost for FixedHost {
    fn workspace(&self) -> Option<WorkspaceFolder> {
        self.workspace.clone()
    }

    fn active_document(&self) -> Option<ActiveDocument> {
        self.document.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Pending(String),
    Response(String),
    Warning(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<Shown>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn responses(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Response(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn pending(&self, text: &str) {
        self.shown.lock().unwrap().push(Shown::Pending(text.to_string()));
    }

    fn respond(&self, text: &str) {
        self.shown.lock().unwrap().push(Shown::Response(text.to_string()));
    }

    fn warn(&self, text: &str) {
        self.shown.lock().unwrap().push(Shown::Warning(text.to_string()));
    }
}
