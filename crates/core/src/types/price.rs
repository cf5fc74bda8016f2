//! Price labels and display totals.
//!
//! Product cards carry their price as free display text (e.g. `"PKR 250"`,
//! `"Rs. 1,200 only"`). The cart keeps that text verbatim and only extracts
//! a number when a total is computed: the amount of a label is the first run
//! of ASCII digits found in it.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Regex for the first run of decimal digits in a price label.
static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid regex"));

/// Price text as shown on a product card.
///
/// Accepted as-is: missing or garbled labels are not an error, they simply
/// have no [`amount`](Self::amount).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PriceLabel(String);

impl PriceLabel {
    /// Wrap display text as a price label.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric amount of the label: its first run of digits.
    ///
    /// `"PKR 1,250"` yields `1` (the comma ends the run), `"Free"` yields
    /// `None`. Runs too long to represent are treated as having no amount.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        let digits = DIGIT_RUN_RE.find(&self.0)?;
        digits.as_str().parse::<Decimal>().ok()
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PriceLabel {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PriceLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A computed price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// Currency the amount is expressed in.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display with grouped thousands (e.g. `"PKR 12,500"`).
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            self.currency_code.code(),
            group_thousands(self.amount)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Currency codes a total can be labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    PKR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// ISO 4217 code used as the display prefix.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PKR => "PKR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PKR" => Ok(Self::PKR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

/// Format the integer part of an amount with `,` thousands separators.
///
/// Fractional digits, if any, are kept after a `.`.
fn group_thousands(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.to_string();
    let (sign, unsigned) = text
        .strip_prefix('-')
        .map_or(("", text.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_first_digit_run() {
        assert_eq!(PriceLabel::new("PKR 250").amount(), Some(Decimal::from(250)));
        assert_eq!(PriceLabel::new("Rs.99 / 2 pcs").amount(), Some(Decimal::from(99)));
        assert_eq!(PriceLabel::new("PKR 1,250").amount(), Some(Decimal::from(1)));
    }

    #[test]
    fn test_amount_without_digits() {
        assert_eq!(PriceLabel::new("Free").amount(), None);
        assert_eq!(PriceLabel::new("").amount(), None);
    }

    #[test]
    fn test_amount_overlong_run() {
        let label = PriceLabel::new("9".repeat(40));
        assert_eq!(label.amount(), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(Decimal::from(0)), "0");
        assert_eq!(group_thousands(Decimal::from(600)), "600");
        assert_eq!(group_thousands(Decimal::from(1000)), "1,000");
        assert_eq!(group_thousands(Decimal::from(1_234_567)), "1,234,567");
        assert_eq!(group_thousands(Decimal::new(123_450, 2)), "1,234.5");
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(Decimal::from(12_500), CurrencyCode::PKR);
        assert_eq!(price.display(), "PKR 12,500");
        assert_eq!(price.to_string(), "PKR 12,500");
        assert_eq!(
            Price::new(Decimal::ZERO, CurrencyCode::USD).display(),
            "USD 0"
        );
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("pkr".parse::<CurrencyCode>().unwrap(), CurrencyCode::PKR);
        assert_eq!(" USD ".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_label_serde_transparent() {
        let label = PriceLabel::new("PKR 250");
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"PKR 250\"");
    }
}
