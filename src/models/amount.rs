//! Amount type for petty-cash line items
//!
//! Petty cash is counted in whole currency units, so amounts are stored as a
//! signed `i64`. Negative amounts are expenditures, positive amounts are
//! top-ups. Provides parsing, thousands-separated formatting and overflow-checked
//! totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A signed amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from whole units
    ///
    /// # Examples
    /// ```
    /// use pettycash::models::Amount;
    /// let lunch = Amount::new(-120);
    /// assert!(lunch.is_negative());
    /// ```
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw value in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value, saturating at `i64::MAX`
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, `None` when the total does not fit in an `i64`
    ///
    /// Partial sums are kept in `i128`, so only the final total has to be in
    /// range.
    ///
    /// # Examples
    /// ```
    /// use pettycash::models::Amount;
    /// let total = Amount::checked_sum([Amount::new(-100), Amount::new(-70)]);
    /// assert_eq!(total, Some(Amount::new(-170)));
    /// ```
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Amount>,
    {
        let total: i128 = amounts.into_iter().map(|a| i128::from(a.0)).sum();
        i64::try_from(total).ok().map(Self)
    }

    /// Parse an amount from user input
    ///
    /// Accepts an optional sign, an optional `$` or `NT$` prefix and `,`
    /// group separators: `"-1,200"`, `"NT$300"`, `"+50"`, `"0"`.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest
            .strip_prefix("NT$")
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest)
            .trim_start();

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        let value: i64 = digits
            .parse()
            .map_err(|_| AmountParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with thousands separators, e.g. `-1,200`
    pub fn format_grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if self.is_negative() {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Format with a currency symbol, e.g. `NT$ -1,200`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.format_grouped()
        } else {
            format!("{} {}", symbol, self.format_grouped())
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_grouped())
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl From<i32> for Amount {
    fn from(units: i32) -> Self {
        Self(i64::from(units))
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

/// How the sign of an entered amount is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignPolicy {
    /// Keep the sign the operator typed
    #[default]
    AsEntered,
    /// Store as an expenditure (always negative or zero)
    Expense,
    /// Store as a top-up (always positive or zero)
    Income,
}

impl SignPolicy {
    /// Apply the policy to an entered amount
    pub fn apply(&self, amount: Amount) -> Amount {
        match self {
            SignPolicy::AsEntered => amount,
            SignPolicy::Expense => -amount.abs(),
            SignPolicy::Income => amount.abs(),
        }
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: '{}'", s),
            AmountParseError::OutOfRange(s) => write!(f, "Amount out of range: '{}'", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
