//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so that ledger rows and totals
//! never accumulate floating-point drift. Parsing is lenient about notation
//! and exact about the value: nothing is rounded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1550); // 15.50
    /// assert_eq!(amount.to_decimal_string(), "15.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a single entry token
    ///
    /// Accepts plain and exponent notation ("15.50", "10440", "-3", ".5",
    /// "1e3", "+2") and converts it to cents exactly. Amounts with a
    /// non-zero digit below the cent are rejected rather than rounded, as
    /// are "inf"/"NaN" and values that do not fit in i64 cents.
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// assert_eq!(Money::parse("15.50").unwrap().cents(), 1550);
    /// assert!(Money::parse("1.005").is_err());
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let lowered = body.to_ascii_lowercase();
        if matches!(lowered.as_str(), "inf" | "infinity" | "nan") {
            return Err(MoneyParseError::NotFinite(s.to_string()));
        }

        // Split off an exponent: "1.5e3" -> ("1.5", 3)
        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(pos) => {
                let exp: i64 = body[pos + 1..].parse().map_err(|_| invalid())?;
                (&body[..pos], exp)
            }
            None => (body, 0),
        };

        let (whole, fraction) = match mantissa.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (mantissa, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // All significant digits, and the power of ten that turns them into cents
        let digits = format!("{}{}", whole, fraction);
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self::zero());
        }
        let significant = digits.trim_end_matches('0');
        let trailing_zeros = (digits.len() - significant.len()) as i64;
        let shift = exponent
            .saturating_add(2)
            .saturating_sub(fraction.len() as i64)
            .saturating_add(trailing_zeros);

        if shift < 0 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());
        let base: i64 = significant.parse().map_err(|_| out_of_range())?;
        let scale = u32::try_from(shift)
            .ok()
            .and_then(|shift| 10i64.checked_pow(shift))
            .ok_or_else(out_of_range)?;
        let cents = base.checked_mul(scale).ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Add two amounts, or `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Sum amounts, or `None` if the total does not fit in i64 cents
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(m))
    }

    /// Format as a plain decimal without currency symbol ("15.50", "-3.00")
    ///
    /// This is the representation written to ledger rows.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Not a number at all
    InvalidFormat(String),
    /// Parsed, but infinite or NaN
    NotFinite(String),
    /// Too large to represent in cents
    OutOfRange(String),
    /// Has a non-zero digit below the cent
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount is not a finite number: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount is out of range: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
