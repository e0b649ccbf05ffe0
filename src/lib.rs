//! expense-ledger - line-oriented expense entry parsing
//!
//! Parses free-text expense entries, one per line, into structured records
//! and appends them to a ledger. Malformed lines are reported individually
//! and never stop the rest of a batch from being recorded.
//!
//! # Architecture
//!
//! - `parser`: the pure core (date recognition and entry parsing)
//! - `models`: expense records and money amounts
//! - `storage`: ledger sinks (CSV file, in-memory)
//! - `services`: intake (parse, persist, report)
//! - `display`: reply and listing formatting
//! - `cli`: command handlers for the `expense` binary
//! - `config`: paths and settings
//! - `error`: application error types
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use expense_ledger::parser::EntryParser;
//!
//! let outcome = EntryParser::new().parse("15.50 coffee latte\nabc food lunch");
//! assert_eq!(outcome.records.len(), 1);
//! assert_eq!(outcome.errors[0].line_number, 2);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
