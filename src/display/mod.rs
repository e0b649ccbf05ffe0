//! Display formatting
//!
//! Turns intake reports and ledger rows into terminal text.

pub mod ledger;
pub mod reply;

pub use ledger::format_ledger_table;
pub use reply::{format_intake_reply, format_record};
