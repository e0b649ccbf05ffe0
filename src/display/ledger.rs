//! Ledger listing
//!
//! Renders stored ledger rows as a terminal table.

use tabled::{settings::Style, Table, Tabled};

use super::reply::format_total;
use crate::models::Money;
use crate::storage::LedgerRow;

#[derive(Tabled)]
struct LedgerLine {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format the most recent `limit` rows as a table, followed by a total
///
/// Row numbers refer to the position in the whole ledger.
pub fn format_ledger_table(rows: &[LedgerRow], limit: usize, currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let skip = rows.len().saturating_sub(limit);
    let shown = &rows[skip..];

    let lines: Vec<LedgerLine> = shown
        .iter()
        .enumerate()
        .map(|(i, row)| LedgerLine {
            index: skip + i + 1,
            timestamp: row.timestamp.clone(),
            amount: display_amount(&row.amount, currency_symbol),
            category: row.category.clone(),
            description: row.description.clone(),
        })
        .collect();

    let mut table = Table::new(lines);
    table.with(Style::rounded());

    let total = Money::checked_sum(
        shown
            .iter()
            .filter_map(|row| Money::parse(&row.amount).ok()),
    );

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!(
        "Showing {} of {} rows, total {}\n",
        shown.len(),
        rows.len(),
        format_total(total, currency_symbol)
    ));
    output
}

// Rows edited by hand may hold anything; show those verbatim.
fn display_amount(raw: &str, currency_symbol: &str) -> String {
    Money::parse(raw)
        .map(|m| m.format_with_symbol(currency_symbol))
        .unwrap_or_else(|_| raw.to_string())
}
