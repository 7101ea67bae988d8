//! Pivot-mediated currency conversion.

use rust_decimal::Decimal;

use super::currency::Currency;
use super::fx_errors::FxError;
use super::fx_model::RateTable;

/// Converts amounts between supported currencies through the fixed pivot.
///
/// Construction validates the rate table, so conversion itself cannot fail:
/// `from -> pivot` multiplies by the stored rate, `pivot -> to` divides by
/// it. A conversion error is therefore always an upstream configuration
/// problem, surfaced at construction time.
pub struct CurrencyConverter {
    rates: [Decimal; Currency::COUNT],
}

impl CurrencyConverter {
    pub fn new(table: &RateTable) -> Result<Self, FxError> {
        table.validate()?;
        let mut rates = [Decimal::ONE; Currency::COUNT];
        for currency in Currency::all() {
            if let Some(rate) = table.get(currency) {
                rates[currency.index()] = rate;
            }
        }
        Ok(CurrencyConverter { rates })
    }

    fn rate(&self, currency: Currency) -> Decimal {
        self.rates[currency.index()]
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Same-currency conversion returns the amount untouched, before any
    /// arithmetic, so repeated round-trips cannot drift.
    pub fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Decimal {
        if from == to {
            return amount;
        }
        let in_pivot = if from == Currency::PIVOT {
            amount
        } else {
            amount * self.rate(from)
        };
        if to == Currency::PIVOT {
            in_pivot
        } else {
            in_pivot / self.rate(to)
        }
    }

    /// The value of one unit of `from` expressed in `to`.
    pub fn get_exchange_rate(&self, from: Currency, to: Currency) -> Decimal {
        self.convert(Decimal::ONE, from, to)
    }
}
