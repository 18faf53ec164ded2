//! Core library for sunflowers
//!
//! This crate implements the **Functional Core** of the sunflowers coding
//! assistant, following the Functional Core - Imperative Shell architectural
//! pattern.
//!
//! # Architecture Overview
//!
//! - **`sunflowers_core`** (this crate): data model and pure transformations, no network I/O
//! - **`sunflowers`**: workspace enumeration, HTTP calls and orchestration (the Imperative Shell)
//!
//! Everything the shell ships to the gateway is shaped here: file records and
//! snapshots, the batch plan for large projects, the gzip payload encoding,
//! notebook code extraction, generation requests in normal and advanced mode,
//! and the mapping from gateway failures to user-facing messages.
//!
//! # Module Organization
//!
//! - [`snapshot`]: `FileRecord`, `Snapshot` and workspace-relative path joining
//! - [`batch`]: batch planning, payload encoding and send outcome folding
//! - [`notebook`]: code-cell extraction from notebook documents
//! - [`assist`]: request building, result rendering and inline completion prompts
//! - [`session`]: session identifiers and gateway endpoint layout
//! - [`error`]: the error taxonomy and HTTP status classification
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use sunflowers_core::batch::{plan_batches, CHUNK_SIZE};
//!
//! let batches = plan_batches(&snapshot.records, CHUNK_SIZE);
//! for batch in batches {
//!     let body = sunflowers_core::batch::encode_payload(batch)?;
//!     // POST body to the store endpoint
//! }
//! ```

pub mod assist;
pub mod batch;
pub mod error;
pub mod notebook;
pub mod session;
pub mod snapshot;

pub use error::AssistError;
