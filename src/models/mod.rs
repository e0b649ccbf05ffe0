//! Core data models for expense-ledger
//!
//! This module contains the data structures produced by the entry parser:
//! expense records and the money amounts they carry.

pub mod expense;
pub mod money;

pub use expense::ExpenseRecord;
pub use money::{Money, MoneyParseError};
