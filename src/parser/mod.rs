//! Expense entry parsing
//!
//! The pure core of the crate: no I/O, no shared state. [`EntryParser`]
//! splits text into entries and validates them; [`DateRecognizer`] handles
//! the optional `DD/MM` prefix.

pub mod date;
pub mod entry;

pub use date::DateRecognizer;
pub use entry::{
    EntryParser, EntryShape, InvalidDatePolicy, ParseError, ParseErrorKind, ParseOutcome,
};
