//! Ledger sink interface
//!
//! A sink durably stores parsed expense records. Rows follow the column
//! layout `Timestamp, Amount, Category, Description`; records without an
//! explicit date are stamped with the write time.

use std::fmt::Write as _;
use std::sync::RwLock;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;
use crate::parser::date::CANONICAL_DATE_FORMAT;

/// Destination for parsed expense records
///
/// Implementations take `&self` so a single sink, built once at startup, can
/// be shared by every caller.
pub trait LedgerSink {
    /// Append records in order, returning the number of rows written
    fn append_records(&self, records: &[ExpenseRecord]) -> LedgerResult<usize>;
}

/// One ledger row as written by a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl LedgerRow {
    /// Build a row from a record
    ///
    /// Dated records keep their date (`YYYY-MM-DD`); undated records get
    /// `now` rendered with `timestamp_format`.
    pub fn from_record(
        record: &ExpenseRecord,
        now: NaiveDateTime,
        timestamp_format: &str,
    ) -> LedgerResult<Self> {
        let timestamp = match record.date {
            Some(date) => date.format(CANONICAL_DATE_FORMAT).to_string(),
            None => format_timestamp(now, timestamp_format)?,
        };

        Ok(Self {
            timestamp,
            amount: record.amount.to_decimal_string(),
            category: record.category.clone(),
            description: record.description.clone(),
        })
    }
}

/// Convert a batch of records into rows sharing a single write time
pub fn rows_for(records: &[ExpenseRecord], timestamp_format: &str) -> LedgerResult<Vec<LedgerRow>> {
    let now = Local::now().naive_local();
    records
        .iter()
        .map(|record| LedgerRow::from_record(record, now, timestamp_format))
        .collect()
}

// `to_string()` on a chrono format panics on bad specifiers; `write!` reports them.
fn format_timestamp(now: NaiveDateTime, format: &str) -> LedgerResult<String> {
    let mut out = String::new();
    write!(out, "{}", now.format(format))
        .map_err(|_| LedgerError::Config(format!("Invalid timestamp format: '{}'", format)))?;
    Ok(out)
}

/// In-memory sink
///
/// Keeps rows for the lifetime of the value. Useful for library callers that
/// forward rows elsewhere, and for tests.
#[derive(Debug)]
pub struct MemoryLedger {
    rows: RwLock<Vec<LedgerRow>>,
    timestamp_format: String,
}

impl MemoryLedger {
    /// Create an empty in-memory ledger
    pub fn new(timestamp_format: impl Into<String>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Snapshot of all rows written so far
    pub fn rows(&self) -> LedgerResult<Vec<LedgerRow>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rows.clone())
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new("%Y-%m-%d %H:%M:%S")
    }
}

impl LedgerSink for MemoryLedger {
    fn append_records(&self, records: &[ExpenseRecord]) -> LedgerResult<usize> {
        let new_rows = rows_for(records, &self.timestamp_format)?;
        let count = new_rows.len();

        let mut rows = self
            .rows
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        rows.extend(new_rows);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_row_for_undated_record_uses_write_time() {
        let record = ExpenseRecord::new(Money::from_cents(1550), "coffee", "latte");
        let row = LedgerRow::from_record(&record, noon(), "%Y-%m-%d %H:%M:%S").unwrap();

        assert_eq!(row.timestamp, "2025-03-04 12:30:00");
        assert_eq!(row.amount, "15.50");
        assert_eq!(row.category, "coffee");
        assert_eq!(row.description, "latte");
    }

    #[test]
    fn test_row_for_dated_record_keeps_date() {
        let record = ExpenseRecord::dated(
            NaiveDate::from_ymd_opt(2025, 2, 12).unwrap(),
            Money::from_cents(1_044_000),
            "medicine",
            "vitamin D",
        );
        let row = LedgerRow::from_record(&record, noon(), "%Y-%m-%d %H:%M:%S").unwrap();

        assert_eq!(row.timestamp, "2025-02-12");
        assert_eq!(row.amount, "10440.00");
    }

    #[test]
    fn test_invalid_timestamp_format_is_an_error() {
        let record = ExpenseRecord::new(Money::from_cents(100), "food", "x");
        let result = LedgerRow::from_record(&record, noon(), "%Q");
        assert!(matches!(result, Err(LedgerError::Config(_))));
    }

    #[test]
    fn test_memory_ledger_appends_in_order() {
        let ledger = MemoryLedger::default();
        let records = vec![
            ExpenseRecord::new(Money::from_cents(100), "food", "bread"),
            ExpenseRecord::new(Money::from_cents(200), "food", "milk"),
        ];

        assert_eq!(ledger.append_records(&records).unwrap(), 2);
        assert_eq!(ledger.append_records(&[]).unwrap(), 0);

        let rows = ledger.rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "bread");
        assert_eq!(rows[1].description, "milk");
    }
}
