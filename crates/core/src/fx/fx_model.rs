//! Exchange-rate settings and the pivot-relative rate table.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::currency::Currency;
use super::currency_converter::CurrencyConverter;
use super::fx_errors::FxError;
use crate::constants::RATE_REFRESH_INTERVAL_HOURS;

/// Pivot-relative exchange rates.
///
/// For each currency the table stores how many pivot units one unit of that
/// currency is worth; the pivot entry is always exactly 1. Because the table
/// is never expressed relative to the base currency, changing the base does
/// not rewrite it — display paths derive a base-relative rate on the fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<Currency, Decimal>,
}

impl RateTable {
    pub fn new(rates: BTreeMap<Currency, Decimal>) -> Result<Self, FxError> {
        let table = RateTable { rates };
        table.validate()?;
        Ok(table)
    }

    /// Checks that the table is complete, strictly positive, and carries
    /// exactly 1 for the pivot. A table failing this check is a
    /// configuration defect and must not be used for conversion.
    pub fn validate(&self) -> Result<(), FxError> {
        for currency in Currency::all() {
            match self.rates.get(&currency) {
                None => {
                    return Err(FxError::RateNotFound(format!(
                        "no rate configured for {}",
                        currency
                    )))
                }
                Some(rate) if *rate <= Decimal::ZERO => {
                    return Err(FxError::InvalidRate(format!(
                        "rate for {} must be strictly positive, got {}",
                        currency, rate
                    )))
                }
                Some(_) => {}
            }
        }
        if self.rates.get(&Currency::PIVOT) != Some(&Decimal::ONE) {
            return Err(FxError::InvalidRate(format!(
                "pivot rate for {} must be exactly 1",
                Currency::PIVOT
            )));
        }
        Ok(())
    }

    pub fn get(&self, currency: Currency) -> Option<Decimal> {
        self.rates.get(&currency).copied()
    }

    pub fn set(&mut self, currency: Currency, rate: Decimal) {
        self.rates.insert(currency, rate);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, Decimal)> + '_ {
        self.rates.iter().map(|(currency, rate)| (*currency, *rate))
    }
}

/// Mutable exchange-rate configuration for one user.
///
/// `rates` stays pivot-relative at all times; `base_currency` only selects
/// the currency transactions are normalized into at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateSettings {
    pub base_currency: Currency,
    pub rates: RateTable,
    pub last_updated: DateTime<Utc>,
}

impl Default for ExchangeRateSettings {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(Currency::Uyu, Decimal::ONE);
        rates.insert(Currency::Usd, dec!(42.5));
        rates.insert(Currency::Eur, dec!(46.8));
        ExchangeRateSettings {
            base_currency: Currency::PIVOT,
            rates: RateTable { rates },
            // Epoch timestamp marks the seed table as immediately stale.
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl ExchangeRateSettings {
    /// True once the table has not been updated for the refresh interval.
    pub fn should_refresh(&self, now: DateTime<Utc>) -> bool {
        now - self.last_updated >= Duration::hours(RATE_REFRESH_INTERVAL_HOURS)
    }

    /// Rate of one unit of `currency` expressed in the current base
    /// currency, derived through the pivot. Display and edit paths use
    /// this; the stored table is never rewritten.
    pub fn rate_relative_to_base(&self, currency: Currency) -> Result<Decimal, FxError> {
        let converter = CurrencyConverter::new(&self.rates)?;
        Ok(converter.get_exchange_rate(currency, self.base_currency))
    }
}
