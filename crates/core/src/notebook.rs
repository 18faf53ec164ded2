//! Jupyter notebook source extraction
//!
//! Notebooks are sent as the concatenated source of their code cells. Markdown
//! and raw cells never reach the model.

use serde::Deserialize;

/// File extension identifying notebook documents.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: CellSource,
}

/// nbformat allows a cell's source to be a single string or a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Lines(Vec::new())
    }
}

impl CellSource {
    fn joined(&self) -> String {
        match self {
            CellSource::Lines(lines) => lines.concat(),
            CellSource::Text(text) => text.clone(),
        }
    }
}

/// Whether `path` names a notebook file.
pub fn is_notebook_path(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(NOTEBOOK_EXTENSION))
}

/// Join the source of every code cell in `raw` with a newline between cells.
///
/// Returns the JSON parse error message when `raw` is not a notebook.
pub fn extract_code_cells(raw: &str) -> Result<String, String> {
    let notebook: Notebook = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    Ok(notebook
        .cells
        .iter()
        .filter(|cell| cell.cell_type == "code")
        .map(|cell| cell.source.joined())
        .collect::<Vec<_>>()
        .join("\n"))
}
