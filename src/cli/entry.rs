//! Entry CLI commands
//!
//! `add` records expenses in the ledger; `check` parses the same input
//! without writing anything.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::reply::format_intake_reply;
use crate::error::{LedgerError, LedgerResult};
use crate::parser::EntryParser;
use crate::services::{ExpenseIntake, SaveStatus};
use crate::storage::LedgerSink;

/// Where the entry text comes from
#[derive(Args, Debug, Clone)]
pub struct EntryInput {
    /// Entry text, one expense per line (reads stdin when omitted)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read entries from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl EntryInput {
    /// Read the raw entry text from the argument, the file, or stdin
    pub fn read(&self) -> LedgerResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(path) = &self.file {
            return std::fs::read_to_string(path).map_err(|e| {
                LedgerError::Input(format!("Failed to read {}: {}", path.display(), e))
            });
        }

        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| LedgerError::Input(format!("Failed to read stdin: {}", e)))?;
        Ok(buffer)
    }
}

/// Handle the add command
///
/// Prints the reply even when the ledger write fails, then reports the
/// failure so the process exits non-zero.
pub fn handle_add_command<S: LedgerSink>(
    parser: &EntryParser,
    sink: &S,
    settings: &Settings,
    input: &EntryInput,
) -> LedgerResult<()> {
    let text = input.read()?;
    let report = ExpenseIntake::new(parser, sink).submit(&text);

    print!("{}", format_intake_reply(&report, &settings.currency_symbol));

    if let SaveStatus::Failed(message) = report.save {
        return Err(LedgerError::Storage(message));
    }

    Ok(())
}

/// Handle the check command
pub fn handle_check_command<S: LedgerSink>(
    parser: &EntryParser,
    sink: &S,
    settings: &Settings,
    input: &EntryInput,
) -> LedgerResult<()> {
    let text = input.read()?;
    let report = ExpenseIntake::new(parser, sink).check(&text);

    print!("{}", format_intake_reply(&report, &settings.currency_symbol));

    Ok(())
}
