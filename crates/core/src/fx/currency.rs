//! Supported currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fx_errors::FxError;

/// A currency supported by the application.
///
/// The set is closed: every rate table and every conversion deals only in
/// these codes. `UYU` is the fixed pivot all stored rates are expressed
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Uyu,
    Usd,
    Eur,
}

impl Currency {
    /// The fixed pivot currency. Stored rates are never rewritten when the
    /// base currency changes; they always stay relative to this pivot.
    pub const PIVOT: Currency = Currency::Uyu;

    /// Number of supported currencies.
    pub const COUNT: usize = 3;

    pub fn all() -> [Currency; Self::COUNT] {
        [Currency::Uyu, Currency::Usd, Currency::Eur]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Uyu => "UYU",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Uyu => "$U",
            Currency::Usd => "US$",
            Currency::Eur => "€",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Uyu => "Uruguayan Peso",
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = FxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UYU" => Ok(Currency::Uyu),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(FxError::UnsupportedCurrency(other.to_string())),
        }
    }
}
