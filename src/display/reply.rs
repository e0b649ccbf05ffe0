//! Reply formatting
//!
//! Renders an intake report as the text shown back to whoever submitted the
//! entries: what was recorded, what was rejected and why.

use crate::models::{ExpenseRecord, Money};
use crate::services::{IntakeReport, SaveStatus};

/// Usage hint appended whenever a line was rejected
pub const USAGE_HINT: &str =
    "Use: [DD/MM] <amount> <category> <description>\nExample: 15.50 food lunch with friends";

/// Format one record as a bullet line
pub fn format_record(record: &ExpenseRecord, currency_symbol: &str) -> String {
    let date = record
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "today".to_string());

    format!(
        "• {:10}  {:>12}  {}  {}",
        date,
        record.amount.format_with_symbol(currency_symbol),
        record.category,
        record.description
    )
}

/// Format the full reply for an intake report
pub fn format_intake_reply(report: &IntakeReport, currency_symbol: &str) -> String {
    let outcome = &report.outcome;
    if outcome.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    let count = outcome.records.len();

    let heading = match &report.save {
        SaveStatus::Saved(_) => Some("✅ Recorded"),
        SaveStatus::DryRun if count > 0 => Some("🔎 Parsed"),
        SaveStatus::Failed(_) => {
            output.push_str("❌ Failed to save expenses. Please try again later.\n");
            None
        }
        _ => None,
    };

    if let Some(heading) = heading {
        output.push_str(&format!("{} {} {}:\n", heading, count, plural(count, "expense")));
        for record in &outcome.records {
            output.push_str(&format_record(record, currency_symbol));
            output.push('\n');
        }
        if count > 1 {
            output.push_str(&format!(
                "Total: {}\n",
                format_total(outcome.total(), currency_symbol)
            ));
        }
    }

    if !outcome.errors.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        let rejected = outcome.errors.len();
        output.push_str(&format!(
            "❌ {} {} could not be parsed:\n",
            rejected,
            plural(rejected, "line")
        ));
        for error in &outcome.errors {
            output.push_str(&format!("• {}\n", error.message()));
        }
        output.push_str(USAGE_HINT);
        output.push('\n');
    }

    output
}

/// Render a checked total; `None` means the sum overflowed
pub fn format_total(total: Option<Money>, currency_symbol: &str) -> String {
    match total {
        Some(total) => total.format_with_symbol(currency_symbol),
        None => "too large to display".to_string(),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
