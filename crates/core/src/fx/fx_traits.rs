use super::currency::Currency;
use super::fx_model::{ExchangeRateSettings, RateTable};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Trait defining the contract for FX settings persistence.
#[async_trait]
pub trait FxRepositoryTrait: Send + Sync {
    /// Loads the stored settings, falling back to the seeded defaults when
    /// nothing has been written yet.
    fn get_settings(&self) -> Result<ExchangeRateSettings>;
    async fn save_settings(&self, settings: &ExchangeRateSettings) -> Result<()>;
}

/// External collaborator supplying a full replacement rate table.
///
/// A failed fetch is reported as an error and treated by the service as
/// "no update available" — never as a fatal condition.
#[async_trait]
pub trait RateProviderTrait: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable>;
}

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<ExchangeRateSettings>;
    fn base_currency(&self) -> Result<Currency>;
    fn get_exchange_rate(&self, from: Currency, to: Currency) -> Result<Decimal>;
    fn convert_currency(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal>;
    /// Converts into the current base currency, returning the amount
    /// together with the base it was normalized into.
    fn convert_to_base(&self, amount: Decimal, from: Currency) -> Result<(Decimal, Currency)>;
    async fn set_base_currency(&self, base_currency: Currency) -> Result<ExchangeRateSettings>;
    async fn update_rate(&self, currency: Currency, rate: Decimal) -> Result<ExchangeRateSettings>;
    async fn refresh_rates(&self, now: DateTime<Utc>) -> Result<ExchangeRateSettings>;
}
