//! Formats raw monetary totals for display in the active currency.

use std::fmt;

use crate::currency::Currency;

/// A monetary value prepared for display in a specific currency.
///
/// Internally the amount is held as a signed 64-bit integer in the
/// currency's smallest unit (e.g., cents for EUR) so that formatting
/// never goes through floating-point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAmount {
    minor_units: i64,
    currency: Currency,
}

impl DisplayAmount {
    /// Creates a `DisplayAmount` from a raw float total, as stored in an
    /// order record.
    ///
    /// The float is converted to an integer representation by rounding to
    /// the nearest minor unit for the currency's number of decimal places.
    pub fn from_float(value: f64, currency: Currency) -> Self {
        let multiplier = 10_f64.powi(currency.decimals() as i32);
        let minor_units = (value * multiplier).round() as i64;
        Self {
            minor_units,
            currency,
        }
    }

    /// Creates a `DisplayAmount` directly from the currency's smallest unit.
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Returns the currency of the amount.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit.
    pub fn as_minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Formats the amount with its currency symbol (e.g., "€25.50").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }

    /// Formats the amount with its currency code (e.g., "25.50 EUR").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Formats the amount as a plain numeric string (e.g., "25.50"), padded to
/// the currency's number of decimal places.
impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.minor_units);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let major_units = self.minor_units / divisor;
        let minor_units = self.minor_units.abs() % divisor;

        write!(
            f,
            "{}.{:0width$}",
            major_units,
            minor_units,
            width = decimals
        )
    }
}

/// Formats a raw order total for display in the given currency.
///
/// This is the single formatting entry point the order screen uses; the
/// stored total itself is never modified.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    DisplayAmount::from_float(amount, currency).to_string_with_symbol()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimal_currencies_with_symbol() {
        assert_eq!(format_currency(25.5, Currency::EUR), "€25.50");
        assert_eq!(format_currency(10.0, Currency::USD), "$10.00");
        assert_eq!(format_currency(0.99, Currency::GBP), "£0.99");
    }

    #[test]
    fn formats_zero_decimal_currencies_without_fraction() {
        assert_eq!(format_currency(1500.0, Currency::JPY), "¥1500");
    }

    #[test]
    fn rounds_to_the_nearest_minor_unit() {
        assert_eq!(DisplayAmount::from_float(19.999, Currency::EUR).as_minor_units(), 2000);
        assert_eq!(DisplayAmount::from_float(19.994, Currency::EUR).as_minor_units(), 1999);
    }

    #[test]
    fn same_total_changes_only_the_string_across_currencies() {
        let total = 25.5;
        let eur = format_currency(total, Currency::EUR);
        let usd = format_currency(total, Currency::USD);
        assert_ne!(eur, usd);
        // the raw total is untouched by formatting
        assert_eq!(DisplayAmount::from_float(total, Currency::EUR).as_minor_units(), 2550);
        assert_eq!(DisplayAmount::from_float(total, Currency::USD).as_minor_units(), 2550);
    }

    #[test]
    fn pads_fractional_part_with_zeros() {
        assert_eq!(DisplayAmount::from_minor(5, Currency::EUR).to_string(), "0.05");
        assert_eq!(DisplayAmount::from_minor(2550, Currency::EUR).to_string_with_code(), "25.50 EUR");
    }
}
