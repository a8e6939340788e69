//! Money type for storefront prices.
//!
//! Amounts are held in minor units (cents) as integers. The search API is
//! inconsistent about units: most prices arrive in minor units, but small
//! legacy prices arrive already in major units. [`Money::from_wire_price`]
//! applies the storefront heuristic to tell them apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minor units per major unit for every supported currency.
const MINOR_PER_MAJOR: i64 = 100;

/// Wire prices at or above this value are treated as minor units.
pub const MINOR_UNIT_THRESHOLD: i64 = 100;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Colombian peso, the storefront's display currency.
    #[default]
    COP,
    USD,
}

impl Currency {
    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP | Currency::USD => "$",
        }
    }

    /// Number of fraction digits shown when displaying an amount.
    pub fn display_decimals(&self) -> u32 {
        match self {
            Currency::COP => 0,
            Currency::USD => 2,
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Currency::COP => '.',
            Currency::USD => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Currency::COP => ',',
            Currency::USD => '.',
        }
    }
}

/// A monetary value with currency, stored in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in minor units.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units.
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(MINOR_PER_MAJOR), currency)
    }

    /// Interpret a raw price as sent by the search API.
    ///
    /// Values `>= 100` are minor units; smaller values are whole major units.
    ///
    /// ```
    /// use pulga_catalog::money::{Currency, Money};
    /// assert_eq!(Money::from_wire_price(15000, Currency::COP).display(), "$150");
    /// assert_eq!(Money::from_wire_price(50, Currency::COP).display(), "$50");
    /// ```
    pub fn from_wire_price(raw: i64, currency: Currency) -> Self {
        if raw >= MINOR_UNIT_THRESHOLD {
            Self::new(raw, currency)
        } else {
            Self::from_major(raw, currency)
        }
    }

    /// Format as a display string (e.g., "$1.250").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "1.250").
    pub fn display_amount(&self) -> String {
        let decimals = self.currency.display_decimals();
        let scale = 10_u64.pow(decimals);
        // Round half away from zero to the displayed precision.
        let divisor = MINOR_PER_MAJOR as u64 / scale;
        let magnitude = self.amount_minor.unsigned_abs();
        let rounded = magnitude.saturating_add(divisor / 2) / divisor;

        let whole = group_digits(rounded / scale, self.currency.group_separator());
        let sign = if self.amount_minor < 0 && rounded != 0 { "-" } else { "" };

        if decimals == 0 {
            format!("{}{}", sign, whole)
        } else {
            format!(
                "{}{}{}{:0width$}",
                sign,
                whole,
                self.currency.decimal_separator(),
                rounded % scale,
                width = decimals as usize
            )
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a raw API price for display in the storefront currency.
pub fn format_price(raw: i64) -> String {
    Money::from_wire_price(raw, Currency::COP).display()
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
