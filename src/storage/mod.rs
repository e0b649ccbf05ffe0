//! Storage layer for expense-ledger
//!
//! Ledger sinks that persist parsed expense records: an append-only CSV
//! file for the CLI, and an in-memory ledger for library callers and tests.

pub mod csv_ledger;
pub mod sink;

pub use csv_ledger::CsvLedger;
pub use sink::{LedgerRow, LedgerSink, MemoryLedger};
