//! Short-form date recognition
//!
//! Entries may start with a `DD/MM` token. This module decides whether a
//! token has that shape and turns it into a calendar date in the current
//! year. Unusable dates fall back to "today" by default; callers that want
//! to surface them instead use [`DateRecognizer::try_parse`].

use chrono::{Datelike, Local, NaiveDate};

/// Canonical calendar date format
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Recognizes and normalizes entry dates
///
/// "Today" is read from the local clock on every call unless the recognizer
/// was pinned with [`DateRecognizer::with_today`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRecognizer {
    today: Option<NaiveDate>,
}

impl DateRecognizer {
    /// Create a recognizer that follows the system clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recognizer with a fixed notion of "today"
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    /// The date used as the fallback and as the source of the current year
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Check whether a token has the `DD/MM` shape
    ///
    /// Both components must be non-empty runs of ASCII digits. Ranges are not
    /// checked here; `99/99` is a date token that later normalizes to today.
    pub fn is_date_token(&self, token: &str) -> bool {
        split_day_month(token).is_some()
    }

    /// Parse a token into a date, reporting failure instead of defaulting
    ///
    /// Accepts canonical `YYYY-MM-DD` unchanged, or `DD/MM` in the current
    /// year. Returns `None` for anything else, including out-of-range days
    /// and months.
    pub fn try_parse(&self, token: &str) -> Option<NaiveDate> {
        let token = token.trim();

        if let Ok(date) = NaiveDate::parse_from_str(token, CANONICAL_DATE_FORMAT) {
            return Some(date);
        }

        let (day, month) = split_day_month(token)?;
        NaiveDate::from_ymd_opt(self.today().year(), month, day)
    }

    /// Parse a token into a date, falling back to today on any failure
    pub fn normalize(&self, token: &str) -> NaiveDate {
        self.try_parse(token).unwrap_or_else(|| self.today())
    }
}

/// Split a `DD/MM` token into its numeric (day, month) components
fn split_day_month(token: &str) -> Option<(u32, u32)> {
    let (day, month) = token.split_once('/')?;
    Some((parse_component(day)?, parse_component(month)?))
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
