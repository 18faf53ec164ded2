//! Batch planning and payload encoding for project uploads
//!
//! Small snapshots go up in a single request. Once a snapshot reaches
//! `BATCH_THRESHOLD` records it is cut into consecutive slices of
//! `CHUNK_SIZE` records, each sent as its own request.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::AssistError;
use crate::snapshot::FileRecord;

/// Maximum number of records in one batch once batching kicks in.
pub const CHUNK_SIZE: usize = 512;

/// Snapshots at or above this size are split into batches.
pub const BATCH_THRESHOLD: usize = 2 * CHUNK_SIZE;

/// Value of the `Content-Encoding` header sent with every payload.
pub const CONTENT_ENCODING: &str = "gzip";

/// Split `records` into the slices that will each become one request.
///
/// Below the threshold the whole snapshot is a single slice (even when it is
/// empty). At or above it, slices hold exactly `chunk_size` records except
/// possibly the last.
pub fn plan_batches(records: &[FileRecord], chunk_size: usize) -> Vec<&[FileRecord]> {
    let chunk_size = chunk_size.max(1);

    if records.len() < chunk_size.saturating_mul(2) {
        return vec![records];
    }

    records.chunks(chunk_size).collect()
}

/// Serialize records to JSON and gzip the result.
pub fn encode_payload(records: &[FileRecord]) -> Result<Vec<u8>, AssistError> {
    let json = serde_json::to_vec(records).map_err(|e| AssistError::Encode(e.to_string()))?;

    let mut encoder = GzEncoder::new(Vec::with_capacity(json.len() / 4), Compression::default());
    encoder
        .write_all(&json)
        .map_err(|e| AssistError::Encode(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| AssistError::Encode(e.to_string()))
}

/// Aggregate result of one multi-batch send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SendOutcome {
    pub batches: usize,
    pub failed: usize,
    pub records: usize,
}

impl SendOutcome {
    /// Fold per-batch results. `results` yields `(record_count, succeeded)`.
    pub fn fold<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        results
            .into_iter()
            .fold(SendOutcome::default(), |mut acc, (records, ok)| {
                acc.batches += 1;
                acc.records += records;
                if !ok {
                    acc.failed += 1;
                }
                acc
            })
    }

    /// True only when every batch succeeded.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Convert to the error callers propagate when any batch failed.
    pub fn into_result(self) -> Result<SendOutcome, AssistError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AssistError::Transmission {
                failed: self.failed,
                total: self.batches,
            })
        }
    }
}
