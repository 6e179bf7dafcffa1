//! Defines the display currencies supported by the shop.

use serde::Deserialize;
use serde::Serialize;

/// A display currency, with its code, symbol, and formatting rules.
///
/// The shop prices everything in a base amount and formats it for the
/// currently selected currency at render time.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    EUR, // Euro
    USD, // United States Dollar
    GBP, // Great British Pound
    JPY, // Japanese Yen
}

impl Currency {
    /// Returns the number of decimal digits used by the currency.
    ///
    /// EUR, USD and GBP use 2 decimal places; JPY uses 0.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '€').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::USD => "$",
            Self::GBP => "£",
            Self::JPY => "¥",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "EUR").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EUR => "Euro",
            Self::USD => "United States Dollar",
            Self::GBP => "Great British Pound",
            Self::JPY => "Japanese Yen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn code_round_trips_through_from_str() {
        for currency in [Currency::EUR, Currency::USD, Currency::GBP, Currency::JPY] {
            assert_eq!(Currency::from_str(currency.code()).unwrap(), currency);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(Currency::from_str("eur").unwrap(), Currency::EUR);
        assert_eq!(Currency::from_str("Usd").unwrap(), Currency::USD);
    }

    #[test]
    fn default_is_euro() {
        assert_eq!(Currency::default(), Currency::EUR);
    }
}
