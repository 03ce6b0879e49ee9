//! Money type for representing prices.
//!
//! Amounts are integer minor units (paise for INR). Display strings are
//! produced from the number and never parsed back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Number of minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units.
    ///
    /// ```
    /// use rewear_commerce::money::{Currency, Money};
    /// let price = Money::from_major(1499, Currency::INR);
    /// assert_eq!(price.amount_minor, 149_900);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Whole major units, truncated toward zero.
    pub fn major(&self) -> i64 {
        self.amount_minor / self.currency.minor_per_major()
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }

    /// Add another amount of the same currency, clamping at the bounds.
    /// The other amount's currency is assumed to match.
    pub fn saturating_add(&self, other: &Money) -> Money {
        debug_assert_eq!(self.currency, other.currency);
        Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        )
    }

    /// `percent`% of this amount, rounded half away from zero to whole
    /// major units.
    ///
    /// ```
    /// use rewear_commerce::money::{Currency, Money};
    /// let tax = Money::from_major(2398, Currency::INR).percent_of_major(18);
    /// assert_eq!(tax, Some(Money::from_major(432, Currency::INR)));
    /// ```
    pub fn percent_of_major(&self, percent: u32) -> Option<Money> {
        let unit = self.currency.minor_per_major();
        let numerator = self.amount_minor.checked_mul(i64::from(percent))?;
        let denominator = 100 * unit;
        let half = denominator / 2;
        let major = if numerator >= 0 {
            numerator.checked_add(half)? / denominator
        } else {
            numerator.checked_sub(half)? / denominator
        };
        major
            .checked_mul(unit)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Format as a display string, e.g. "₹1,499" or "₹1,499.50".
    ///
    /// The fractional part is shown only when it is non-zero.
    pub fn display(&self) -> String {
        format!("{}{}", self.sign(), self.currency.symbol()) + &self.display_amount()
    }

    /// Format without symbol, e.g. "1,499".
    pub fn display_amount(&self) -> String {
        let unit = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_minor.unsigned_abs();
        let grouped = group_thousands(abs / unit);
        match abs % unit {
            0 => grouped,
            fraction => format!("{grouped}.{fraction:02}"),
        }
    }

    fn sign(&self) -> &'static str {
        if self.amount_minor < 0 {
            "-"
        } else {
            ""
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(899, Currency::INR);
        assert_eq!(m.amount_minor, 89_900);
        assert_eq!(m.major(), 899);
    }

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::from_major(1499, Currency::INR).display(), "\u{20b9}1,499");
        assert_eq!(Money::from_major(599, Currency::INR).display(), "\u{20b9}599");
        assert_eq!(
            Money::from_major(1_234_567, Currency::INR).display_amount(),
            "1,234,567"
        );
    }

    #[test]
    fn test_money_display_fraction() {
        let m = Money::new(149_950, Currency::INR);
        assert_eq!(m.display(), "\u{20b9}1,499.50");
        let m = Money::new(-4_999, Currency::USD);
        assert_eq!(m.display(), "-$49.99");
    }

    #[test]
    fn test_saturating_arithmetic() {
        let m = Money::new(i64::MAX, Currency::INR);
        assert_eq!(m.saturating_multiply(2).amount_minor, i64::MAX);
        assert_eq!((m + Money::from_major(1, Currency::INR)).amount_minor, i64::MAX);
    }

    #[test]
    fn test_percent_rounds_to_whole_units() {
        // 18% of 1499 = 269.82
        let tax = Money::from_major(1499, Currency::INR).percent_of_major(18).unwrap();
        assert_eq!(tax, Money::from_major(270, Currency::INR));

        // 18% of 25 = 4.5, rounds up
        let tax = Money::from_major(25, Currency::INR).percent_of_major(18).unwrap();
        assert_eq!(tax, Money::from_major(5, Currency::INR));

        let tax = Money::zero(Currency::INR).percent_of_major(18).unwrap();
        assert!(tax.is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
