//! Indian numbering system formatting for amounts and chart axes
//!
//! Amounts at or above one lakh are abbreviated by magnitude tier
//! (L, Cr, Arab, Kharab) with two decimals; smaller amounts are printed in
//! full with Indian digit grouping (`12,34,567`). Every function returns a
//! renderable string for any input, including `NaN`, `None` and infinities.

use serde::{Deserialize, Serialize};

/// Magnitude tiers used by currency formatting, largest first
const CURRENCY_TIERS: [(f64, &str); 4] = [
    (1e12, "Kharab"),
    (1e9, "Arab"),
    (1e7, "Cr"),
    (1e5, "L"),
];

/// Chart axis tiers with their short labels and decimals, largest first
const AXIS_TIERS: [(f64, &str, usize); 5] = [
    (1e12, "Kh", 1),
    (1e9, "Ar", 1),
    (1e7, "Cr", 1),
    (1e5, "L", 1),
    (1e3, "K", 0),
];

/// Symbols emitted by the formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Prefix for currency amounts
    pub currency_symbol: String,
    /// Glyph printed for infinite values
    pub infinity_glyph: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            infinity_glyph: "∞".to_string(),
        }
    }
}

/// Formatter bound to a [`FormatConfig`]
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format an amount as currency, abbreviating from one lakh upwards
    pub fn currency(&self, amount: impl Into<Option<f64>>, decimals: usize) -> String {
        let symbol = &self.config.currency_symbol;
        let amount = match amount.into() {
            Some(value) if !value.is_nan() => value,
            _ => return format!("{}0", symbol),
        };

        if amount.is_infinite() {
            return format!("{}{}", symbol, self.config.infinity_glyph);
        }

        for (threshold, label) in CURRENCY_TIERS {
            if amount.abs() >= threshold {
                return format!("{}{:.2} {}", symbol, amount / threshold, label);
            }
        }

        let (negative, digits) = group_indian(amount, decimals);
        if negative {
            format!("-{}{}", symbol, digits)
        } else {
            format!("{}{}", symbol, digits)
        }
    }

    /// Format a plain number with Indian digit grouping and no abbreviation
    pub fn number(&self, amount: impl Into<Option<f64>>, decimals: usize) -> String {
        let amount = match amount.into() {
            Some(value) if !value.is_nan() => value,
            _ => return "0".to_string(),
        };

        if amount.is_infinite() {
            return self.config.infinity_glyph.clone();
        }

        let (negative, digits) = group_indian(amount, decimals);
        if negative {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Abbreviate a number from one thousand upwards, without a currency symbol
    pub fn large_number(&self, amount: impl Into<Option<f64>>) -> String {
        let amount = match amount.into() {
            Some(value) if value.is_finite() => value,
            _ => return "0".to_string(),
        };

        for (threshold, label) in CURRENCY_TIERS {
            if amount.abs() >= threshold {
                return format!("{:.2} {}", amount / threshold, label);
            }
        }

        if amount.abs() >= 1e3 {
            return format!("{:.2} K", amount / 1e3);
        }

        format!("{:.0}", amount)
    }

    /// Short currency label for chart axes (`₹1.5Cr`, `₹12K`)
    pub fn compact(&self, amount: impl Into<Option<f64>>) -> String {
        let symbol = &self.config.currency_symbol;
        let amount = match amount.into() {
            Some(value) if value.is_finite() => value,
            _ => return format!("{}0", symbol),
        };

        for (threshold, label, decimals) in AXIS_TIERS {
            if amount >= threshold {
                return format!("{}{:.*}{}", symbol, decimals, amount / threshold, label);
            }
        }

        format!("{}{}", symbol, amount)
    }

    /// Format a percentage value (`12.5` -> `"12.5%"`)
    pub fn percent(&self, value: impl Into<Option<f64>>, decimals: usize) -> String {
        match value.into() {
            Some(value) if value.is_nan() => "0%".to_string(),
            Some(value) if value.is_infinite() => format!("{}%", self.config.infinity_glyph),
            Some(value) => format!("{:.*}%", decimals, value),
            None => "0%".to_string(),
        }
    }

    /// Parse a formatted currency string back into a number, `0.0` on failure
    pub fn parse_currency(&self, text: &str) -> f64 {
        let cleaned: String = text
            .replace(self.config.currency_symbol.as_str(), "")
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }
}

/// Render `|amount|` with `decimals` places and Indian grouping
///
/// Returns whether the rendered value is negative; a value that rounds to
/// zero is never reported as negative.
fn group_indian(amount: f64, decimals: usize) -> (bool, String) {
    let rendered = format!("{:.*}", decimals, amount.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + rendered.len() / 2);
    if integer.len() <= 3 {
        grouped.push_str(integer);
    } else {
        let (head, tail) = integer.split_at(integer.len() - 3);
        for (i, digit) in head.chars().enumerate() {
            if i > 0 && (head.len() - i) % 2 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        grouped.push(',');
        grouped.push_str(tail);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    (amount < 0.0 && !is_zero, grouped)
}

/// Format an amount as currency with the default symbols
pub fn format_currency(amount: impl Into<Option<f64>>, decimals: usize) -> String {
    Formatter::default().currency(amount, decimals)
}

/// Format a number with Indian grouping with the default symbols
pub fn format_number(amount: impl Into<Option<f64>>, decimals: usize) -> String {
    Formatter::default().number(amount, decimals)
}

/// Abbreviate a number by magnitude tier (`1.50 L`, `2.00 Cr`)
pub fn format_large_number(amount: impl Into<Option<f64>>) -> String {
    Formatter::default().large_number(amount)
}

/// Short chart axis label with the default currency symbol
pub fn format_compact(amount: impl Into<Option<f64>>) -> String {
    Formatter::default().compact(amount)
}

/// Format a percentage with the given decimals
pub fn format_percent(value: impl Into<Option<f64>>, decimals: usize) -> String {
    Formatter::default().percent(value, decimals)
}

/// Parse a `₹`-prefixed, comma-grouped string
pub fn parse_currency(text: &str) -> f64 {
    Formatter::default().parse_currency(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_below_lakh_uses_indian_grouping() {
        assert_eq!(format_currency(0.0, 0), "₹0");
        assert_eq!(format_currency(999.0, 0), "₹999");
        assert_eq!(format_currency(1234.0, 0), "₹1,234");
        assert_eq!(format_currency(99_999.0, 0), "₹99,999");
        assert_eq!(format_currency(1234.5, 2), "₹1,234.50");
        assert_eq!(format_currency(-4500.0, 0), "-₹4,500");
    }

    #[test]
    fn test_currency_tiers() {
        assert_eq!(format_currency(100_000.0, 0), "₹1.00 L");
        assert_eq!(format_currency(2_550_000.0, 0), "₹25.50 L");
        assert_eq!(format_currency(11_616_953.82, 0), "₹1.16 Cr");
        assert_eq!(format_currency(3.5e9, 0), "₹3.50 Arab");
        assert_eq!(format_currency(1.2e13, 0), "₹12.00 Kharab");
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN, 0), "₹0");
        assert_eq!(format_currency(None, 2), "₹0");
        assert_eq!(format_currency(f64::INFINITY, 0), "₹∞");
        assert_eq!(format_currency(f64::NEG_INFINITY, 0), "₹∞");
    }

    #[test]
    fn test_number_grouping() {
        assert_eq!(format_number(1_234_567.0, 0), "12,34,567");
        assert_eq!(format_number(123_456_789.0, 0), "12,34,56,789");
        assert_eq!(format_number(1000.0, 2), "1,000.00");
        assert_eq!(format_number(f64::NAN, 0), "0");
        assert_eq!(format_number(f64::INFINITY, 0), "∞");
        assert_eq!(format_number(-0.2, 0), "0");
    }

    #[test]
    fn test_large_number() {
        assert_eq!(format_large_number(950.0), "950");
        assert_eq!(format_large_number(1500.0), "1.50 K");
        assert_eq!(format_large_number(250_000.0), "2.50 L");
        assert_eq!(format_large_number(f64::INFINITY), "0");
    }

    #[test]
    fn test_compact_axis_labels() {
        assert_eq!(format_compact(500.0), "₹500");
        assert_eq!(format_compact(12_400.0), "₹12K");
        assert_eq!(format_compact(450_000.0), "₹4.5L");
        assert_eq!(format_compact(35_000_000.0), "₹3.5Cr");
        assert_eq!(format_compact(2e9), "₹2.0Ar");
        assert_eq!(format_compact(1.5e12), "₹1.5Kh");
        assert_eq!(format_compact(f64::NAN), "₹0");
    }

    #[test]
    fn test_percent_and_parse() {
        assert_eq!(format_percent(12.345, 1), "12.3%");
        assert_eq!(format_percent(f64::NAN, 1), "0%");
        assert_eq!(parse_currency("₹1,23,456"), 123_456.0);
        assert_eq!(parse_currency("abc"), 0.0);
    }

    #[test]
    fn test_custom_symbol() {
        let formatter = Formatter::new(FormatConfig {
            currency_symbol: "Rs.".to_string(),
            infinity_glyph: "inf".to_string(),
        });
        assert_eq!(formatter.currency(1234.0, 0), "Rs.1,234");
        assert_eq!(formatter.currency(f64::INFINITY, 0), "Rs.inf");
        assert_eq!(formatter.parse_currency("Rs.1,234"), 1234.0);
    }
}
