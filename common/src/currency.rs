use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies. Prices are stored as plain decimal amounts;
/// the currency is a display-time choice, not part of the product record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Eur => write!(f, "EUR"),
            Currency::Gbp => write!(f, "GBP"),
        }
    }
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Eur, Currency::Gbp]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
        }
    }
}

/// Format an amount for display in the given currency: currency symbol,
/// thousands grouping, always exactly two fraction digits.
///
/// `format_price(1499.5, &Currency::Usd)` gives `"$1,499.50"`.
pub fn format_price(amount: f64, currency: &Currency) -> String {
    // Amounts are non-negative by dataset invariant; the cast saturates at
    // zero for anything below it.
    let cents = (amount * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    format!("{}{}.{:02}", currency.symbol(), whole, cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_fraction_digits() {
        assert_eq!(format_price(49.99, &Currency::Usd), "$49.99");
        assert_eq!(format_price(5.0, &Currency::Usd), "$5.00");
        assert_eq!(format_price(0.0, &Currency::Usd), "$0.00");
    }

    #[test]
    fn formats_currency_symbols() {
        assert_eq!(format_price(199.99, &Currency::Eur), "€199.99");
        assert_eq!(format_price(199.99, &Currency::Gbp), "£199.99");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(1234.5, &Currency::Usd), "$1,234.50");
        assert_eq!(format_price(1234567.89, &Currency::Usd), "$1,234,567.89");
        assert_eq!(format_price(999.99, &Currency::Usd), "$999.99");
    }

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(format_price(29.989, &Currency::Usd), "$29.99");
        assert_eq!(format_price(29.994, &Currency::Usd), "$29.99");
    }

    #[test]
    fn currency_labels_cover_all() {
        for currency in Currency::all() {
            assert!(!currency.label().is_empty());
            assert!(!currency.symbol().is_empty());
        }
    }
}
