//! Entry parser
//!
//! Turns multi-line free text into expense records. Each non-empty line is
//! one entry in one of two shapes:
//!
//! - date-prefixed: `DD/MM AMOUNT CATEGORY DESCRIPTION...`
//! - bare: `AMOUNT CATEGORY DESCRIPTION...`
//!
//! A malformed line produces a [`ParseError`] and never stops the remaining
//! lines from being parsed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::date::DateRecognizer;
use crate::models::{ExpenseRecord, Money};

/// The two accepted entry layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// `DD/MM AMOUNT CATEGORY DESCRIPTION...`
    DatePrefixed,
    /// `AMOUNT CATEGORY DESCRIPTION...`
    Bare,
}

impl EntryShape {
    /// Minimum number of whitespace-separated components
    pub const fn required_components(&self) -> usize {
        match self {
            Self::DatePrefixed => 4,
            Self::Bare => 3,
        }
    }

    /// Human-readable component layout
    pub const fn layout(&self) -> &'static str {
        match self {
            Self::DatePrefixed => "DD/MM AMOUNT CATEGORY DESCRIPTION",
            Self::Bare => "AMOUNT CATEGORY DESCRIPTION",
        }
    }
}

impl fmt::Display for EntryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatePrefixed => write!(f, "date-prefixed"),
            Self::Bare => write!(f, "bare"),
        }
    }
}

/// Why a single entry line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line had no tokens
    #[error("Empty entry")]
    EmptyEntry,

    /// Fewer tokens than the shape requires
    #[error(
        "Expected at least {} components ({}), found {found}",
        .shape.required_components(),
        .shape.layout()
    )]
    InsufficientComponents { shape: EntryShape, found: usize },

    /// The amount token is not a usable number
    #[error("Invalid amount '{token}'")]
    InvalidAmount { token: String },

    /// The date token is not a real calendar date (strict policy only)
    #[error("Invalid date '{token}'")]
    InvalidDate { token: String },
}

/// A rejected entry, tagged with its 1-based line number
///
/// Line numbers count only non-empty lines, so they match what the user sees
/// when blank lines are ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Line {line_number}: {kind}")]
pub struct ParseError {
    pub line_number: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line_number: usize, kind: ParseErrorKind) -> Self {
        Self { line_number, kind }
    }

    /// The message shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// What to do with a `DD/MM` token that is not a real date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidDatePolicy {
    /// Record the entry under today's date
    #[default]
    FallbackToToday,
    /// Reject the entry with [`ParseErrorKind::InvalidDate`]
    Reject,
}

/// Records and errors from one parse call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub records: Vec<ExpenseRecord>,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    /// Number of non-empty lines examined
    pub fn line_count(&self) -> usize {
        self.records.len() + self.errors.len()
    }

    /// True when no line was rejected
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when there were no entries at all
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.errors.is_empty()
    }

    /// Sum of all parsed amounts, or `None` if it overflows
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.records.iter().map(|r| r.amount))
    }
}

/// Stateless parser for expense entry text
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryParser {
    dates: DateRecognizer,
    date_policy: InvalidDatePolicy,
}

impl EntryParser {
    /// Create a parser following the system clock with the fallback date policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific date recognizer (e.g. one pinned to a fixed today)
    pub fn with_dates(mut self, dates: DateRecognizer) -> Self {
        self.dates = dates;
        self
    }

    /// Set how unusable `DD/MM` tokens are handled
    pub fn with_date_policy(mut self, policy: InvalidDatePolicy) -> Self {
        self.date_policy = policy;
        self
    }

    /// Parse every non-empty line of `text`
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        let lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        for (idx, line) in lines.enumerate() {
            let line_number = idx + 1;
            match self.parse_line(line) {
                Ok(record) => outcome.records.push(record),
                Err(kind) => {
                    debug!(line_number, error = %kind, "rejected entry");
                    outcome.errors.push(ParseError::new(line_number, kind));
                }
            }
        }

        outcome
    }

    /// Parse a single trimmed entry line
    pub fn parse_line(&self, line: &str) -> Result<ExpenseRecord, ParseErrorKind> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let Some(first) = tokens.first() else {
            return Err(ParseErrorKind::EmptyEntry);
        };

        let shape = if self.dates.is_date_token(first) {
            EntryShape::DatePrefixed
        } else {
            EntryShape::Bare
        };
        trace!(%shape, tokens = tokens.len(), "dispatching entry");

        if tokens.len() < shape.required_components() {
            return Err(ParseErrorKind::InsufficientComponents {
                shape,
                found: tokens.len(),
            });
        }

        match shape {
            EntryShape::DatePrefixed => {
                let date = match self.date_policy {
                    InvalidDatePolicy::FallbackToToday => self.dates.normalize(tokens[0]),
                    InvalidDatePolicy::Reject => {
                        self.dates.try_parse(tokens[0]).ok_or_else(|| {
                            ParseErrorKind::InvalidDate {
                                token: tokens[0].to_string(),
                            }
                        })?
                    }
                };
                let amount = parse_amount(tokens[1])?;
                Ok(ExpenseRecord::dated(
                    date,
                    amount,
                    tokens[2],
                    tokens[3..].join(" "),
                ))
            }
            EntryShape::Bare => {
                let amount = parse_amount(tokens[0])?;
                Ok(ExpenseRecord::new(amount, tokens[1], tokens[2..].join(" ")))
            }
        }
    }
}

fn parse_amount(token: &str) -> Result<Money, ParseErrorKind> {
    Money::parse(token).map_err(|_| ParseErrorKind::InvalidAmount {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local, NaiveDate};

    fn parser() -> EntryParser {
        EntryParser::new().with_dates(DateRecognizer::with_today(
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        ))
    }

    #[test]
    fn test_empty_input() {
        assert!(parser().parse("").is_empty());
        assert!(parser().parse("   \n  \n").is_empty());
    }

    #[test]
    fn test_bare_entry() {
        let outcome = parser().parse("15.50 coffee latte");
        assert!(outcome.is_clean());
        assert_eq!(
            outcome.records,
            vec![ExpenseRecord::new(Money::from_cents(1550), "coffee", "latte")]
        );
    }

    #[test]
    fn test_date_prefixed_entry() {
        let outcome = parser().parse("12/2 10440 medicine vitamin D");
        assert!(outcome.is_clean());
        assert_eq!(
            outcome.records,
            vec![ExpenseRecord::dated(
                NaiveDate::from_ymd_opt(2025, 2, 12).unwrap(),
                Money::from_cents(1_044_000),
                "medicine",
                "vitamin D"
            )]
        );
    }

    #[test]
    fn test_date_prefixed_entry_with_system_clock() {
        let outcome = EntryParser::new().parse("12/2 10440 medicine vitamin D");
        let date = outcome.records[0].date.unwrap();
        assert_eq!(date.year(), Local::now().year());
        assert_eq!((date.month(), date.day()), (2, 12));
    }

    #[test]
    fn test_invalid_amount_names_token() {
        let outcome = parser().parse("abc food lunch");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line_number, 1);
        assert_eq!(
            outcome.errors[0].kind,
            ParseErrorKind::InvalidAmount {
                token: "abc".into()
            }
        );
        assert!(outcome.errors[0].message().contains("'abc'"));
        assert!(outcome.errors[0].message().starts_with("Line 1:"));
    }

    #[test]
    fn test_mixed_batch_keeps_going() {
        let outcome = parser().parse("15.50 coffee latte\nabc food lunch\n20 transport taxi");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].category, "coffee");
        assert_eq!(outcome.records[1].category, "transport");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line_number, 2);
    }

    #[test]
    fn test_line_numbers_skip_blank_lines() {
        let outcome = parser().parse("\n15 food x\n\n   \nnope food y\n");
        assert_eq!(outcome.line_count(), 2);
        assert_eq!(outcome.errors[0].line_number, 2);
    }

    #[test]
    fn test_insufficient_components_bare() {
        let outcome = parser().parse("15.50 coffee");
        assert_eq!(
            outcome.errors[0].kind,
            ParseErrorKind::InsufficientComponents {
                shape: EntryShape::Bare,
                found: 2
            }
        );
        assert_eq!(
            outcome.errors[0].message(),
            "Line 1: Expected at least 3 components (AMOUNT CATEGORY DESCRIPTION), found 2"
        );
    }

    #[test]
    fn test_insufficient_components_date_prefixed() {
        let outcome = parser().parse("12/2 15 coffee");
        assert_eq!(
            outcome.errors[0].kind,
            ParseErrorKind::InsufficientComponents {
                shape: EntryShape::DatePrefixed,
                found: 3
            }
        );
        assert!(outcome.errors[0].message().contains("at least 4"));
    }

    #[test]
    fn test_date_prefixed_invalid_amount() {
        let outcome = parser().parse("12/2 ten food lunch");
        assert!(outcome.records.is_empty());
        assert_eq!(
            outcome.errors[0].kind,
            ParseErrorKind::InvalidAmount {
                token: "ten".into()
            }
        );
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let outcome = parser().parse("inf food lunch\nNaN food dinner");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 2);
    }

    #[test]
    fn test_description_whitespace_is_collapsed() {
        let outcome = parser().parse("  7   food   lunch \t with   friends  ");
        assert_eq!(outcome.records[0].description, "lunch with friends");
    }

    #[test]
    fn test_invalid_date_falls_back_to_today() {
        let outcome = parser().parse("99/99 10 food lunch");
        assert!(outcome.is_clean());
        assert_eq!(
            outcome.records[0].date,
            NaiveDate::from_ymd_opt(2025, 6, 30)
        );
    }

    #[test]
    fn test_invalid_date_rejected_under_strict_policy() {
        let strict = parser().with_date_policy(InvalidDatePolicy::Reject);
        let outcome = strict.parse("31/2 10 food x\n12/2 10 food y");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(
            outcome.errors,
            vec![ParseError::new(
                1,
                ParseErrorKind::InvalidDate {
                    token: "31/2".into()
                }
            )]
        );
    }

    #[test]
    fn test_parse_line_empty() {
        assert_eq!(parser().parse_line("   "), Err(ParseErrorKind::EmptyEntry));
    }

    #[test]
    fn test_counts_add_up() {
        let text = "1 a b\nx\n2 a b\n12/2 3 a b\n12/2 x\n\n4 a";
        let outcome = parser().parse(text);
        assert_eq!(outcome.line_count(), 6);
        assert_eq!(outcome.records.len(), 3);
        assert_eq!(outcome.errors.len(), 3);
        assert_eq!(outcome.total(), Some(Money::from_cents(600)));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let outcome = parser().parse("9e16 food a\n9e16 food b");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.total(), None);
    }

    #[test]
    fn test_sub_cent_amount_rejected() {
        let outcome = parser().parse("0.004 food x\n1.005 food y\n2.675 food z\n2.67 food w");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].amount, Money::from_cents(267));
        assert_eq!(
            outcome.errors[0].kind,
            ParseErrorKind::InvalidAmount {
                token: "0.004".into()
            }
        );
        assert_eq!(outcome.errors.len(), 3);
    }
}
