//! CSV file ledger
//!
//! Append-only CSV file with a `Timestamp,Amount,Category,Description`
//! header. The header is written once, when the file is new or empty.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

use super::sink::{rows_for, LedgerRow, LedgerSink};

/// Ledger sink backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
    timestamp_format: String,
}

impl CsvLedger {
    /// Create a ledger writing to `path`
    ///
    /// Nothing touches the filesystem until the first append.
    pub fn new(path: impl Into<PathBuf>, timestamp_format: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row, oldest first
    ///
    /// A ledger that has never been written to reads as empty.
    pub fn read_rows(&self) -> LedgerResult<Vec<LedgerRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            LedgerError::Csv(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut rows = Vec::new();
        for (idx, result) in reader.deserialize::<LedgerRow>().enumerate() {
            let row = result.map_err(|e| {
                LedgerError::Csv(format!(
                    "Failed to read {} row {}: {}",
                    self.path.display(),
                    idx + 1,
                    e
                ))
            })?;
            rows.push(row);
        }

        Ok(rows)
    }

    fn needs_header(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true)
    }
}

impl LedgerSink for CsvLedger {
    fn append_records(&self, records: &[ExpenseRecord]) -> LedgerResult<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        // Encode the whole batch before opening the file so a failure writes nothing
        let rows = rows_for(records, &self.timestamp_format)?;
        let write_header = self.needs_header();
        let batch = encode_rows(&rows, write_header)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LedgerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        file.write_all(&batch).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), rows = rows.len(), "appended ledger rows");
        Ok(rows.len())
    }
}

/// Serialize rows to CSV bytes, with the header line first when asked
fn encode_rows(rows: &[LedgerRow], with_header: bool) -> LedgerResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(Vec::new());

    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| LedgerError::Csv(format!("Failed to encode ledger rows: {}", e)))
}
