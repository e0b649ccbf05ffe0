//! Expense intake service
//!
//! Bridges raw entry text and the ledger: parse, persist what parsed, and
//! report everything back. A failing sink never hides the parse errors.

use tracing::{error, info, warn};

use crate::parser::{EntryParser, ParseOutcome};
use crate::storage::LedgerSink;

/// What happened on the persistence side of an intake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// Parsed only, nothing was written
    DryRun,
    /// No valid records, the sink was not called
    NothingToSave,
    /// This many rows were written
    Saved(usize),
    /// The sink failed; the message is for logs and diagnostics
    Failed(String),
}

/// Result of one intake call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeReport {
    pub outcome: ParseOutcome,
    pub save: SaveStatus,
}

impl IntakeReport {
    /// True when the sink was called and failed
    pub fn save_failed(&self) -> bool {
        matches!(self.save, SaveStatus::Failed(_))
    }
}

/// Service for turning entry text into ledger rows
pub struct ExpenseIntake<'a, S: LedgerSink> {
    parser: &'a EntryParser,
    sink: &'a S,
}

impl<'a, S: LedgerSink> ExpenseIntake<'a, S> {
    /// Create a new intake service
    pub fn new(parser: &'a EntryParser, sink: &'a S) -> Self {
        Self { parser, sink }
    }

    /// Parse without writing anything
    pub fn check(&self, text: &str) -> IntakeReport {
        let outcome = self.parse_logged(text);
        IntakeReport {
            outcome,
            save: SaveStatus::DryRun,
        }
    }

    /// Parse and append the valid records to the sink
    pub fn submit(&self, text: &str) -> IntakeReport {
        let outcome = self.parse_logged(text);

        if outcome.records.is_empty() {
            return IntakeReport {
                outcome,
                save: SaveStatus::NothingToSave,
            };
        }

        let save = match self.sink.append_records(&outcome.records) {
            Ok(count) => {
                info!(count, "recorded expenses");
                SaveStatus::Saved(count)
            }
            Err(e) => {
                error!(error = %e, "ledger update failed");
                SaveStatus::Failed(e.to_string())
            }
        };

        IntakeReport { outcome, save }
    }

    fn parse_logged(&self, text: &str) -> ParseOutcome {
        let outcome = self.parser.parse(text);
        if !outcome.is_clean() {
            warn!(
                lines = outcome.line_count(),
                rejected = outcome.errors.len(),
                accepted = outcome.records.len(),
                "some entries could not be parsed"
            );
        }
        outcome
    }
}
