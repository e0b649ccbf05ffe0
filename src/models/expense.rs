//! Expense record model
//!
//! The structured form of a single entry line. Records are produced by the
//! entry parser and handed straight to the caller; nothing here is mutated
//! after construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// One parsed expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date supplied in the entry, if any
    ///
    /// `None` for bare entries; the ledger sink stamps those at write time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Amount spent
    pub amount: Money,

    /// Single-token category label
    pub category: String,

    /// Free text, tokens joined by single spaces
    pub description: String,
}

impl ExpenseRecord {
    /// Create a record for a bare entry (no explicit date)
    pub fn new(amount: Money, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: None,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Create a record carrying an explicit date
    pub fn dated(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date),
            ..Self::new(amount, category, description)
        }
    }
}
