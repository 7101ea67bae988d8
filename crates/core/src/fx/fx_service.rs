use super::currency::Currency;
use super::currency_converter::CurrencyConverter;
use super::fx_errors::FxError;
use super::fx_model::ExchangeRateSettings;
use super::fx_traits::{FxRepositoryTrait, FxServiceTrait, RateProviderTrait};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Clone)]
pub struct FxService {
    repository: Arc<dyn FxRepositoryTrait>,
    provider: Arc<dyn RateProviderTrait>,
}

impl FxService {
    pub fn new(repository: Arc<dyn FxRepositoryTrait>, provider: Arc<dyn RateProviderTrait>) -> Self {
        Self {
            repository,
            provider,
        }
    }

    fn converter(&self) -> Result<(CurrencyConverter, ExchangeRateSettings)> {
        let settings = self.repository.get_settings()?;
        let converter = CurrencyConverter::new(&settings.rates)?;
        Ok((converter, settings))
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    fn get_settings(&self) -> Result<ExchangeRateSettings> {
        self.repository.get_settings()
    }

    fn base_currency(&self) -> Result<Currency> {
        Ok(self.repository.get_settings()?.base_currency)
    }

    fn get_exchange_rate(&self, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        let (converter, _) = self.converter()?;
        Ok(converter.get_exchange_rate(from, to))
    }

    fn convert_currency(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(amount);
        }
        let (converter, _) = self.converter()?;
        Ok(converter.convert(amount, from, to))
    }

    fn convert_to_base(&self, amount: Decimal, from: Currency) -> Result<(Decimal, Currency)> {
        let (converter, settings) = self.converter()?;
        Ok((
            converter.convert(amount, from, settings.base_currency),
            settings.base_currency,
        ))
    }

    async fn set_base_currency(&self, base_currency: Currency) -> Result<ExchangeRateSettings> {
        let mut settings = self.repository.get_settings()?;
        log::debug!(
            "changing base currency from {} to {}",
            settings.base_currency,
            base_currency
        );
        // Rates stay pivot-relative; only the base selector changes.
        settings.base_currency = base_currency;
        self.repository.save_settings(&settings).await?;
        Ok(settings)
    }

    async fn update_rate(&self, currency: Currency, rate: Decimal) -> Result<ExchangeRateSettings> {
        if currency == Currency::PIVOT {
            return Err(FxError::InvalidRate(format!(
                "pivot rate for {} is fixed at 1",
                Currency::PIVOT
            ))
            .into());
        }
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "rate for {} must be strictly positive, got {}",
                currency, rate
            ))
            .into());
        }

        let mut settings = self.repository.get_settings()?;
        settings.rates.set(currency, rate);
        settings.rates.validate()?;
        self.repository.save_settings(&settings).await?;
        Ok(settings)
    }

    async fn refresh_rates(&self, now: DateTime<Utc>) -> Result<ExchangeRateSettings> {
        let mut settings = self.repository.get_settings()?;
        if !settings.should_refresh(now) {
            return Ok(settings);
        }

        match self.provider.fetch_rates().await {
            Ok(table) => {
                settings.rates = table;
                settings.last_updated = now;
                self.repository.save_settings(&settings).await?;
                log::debug!("exchange rates refreshed at {}", now);
                Ok(settings)
            }
            Err(e) => {
                // A failed refresh is never fatal; the previous table stays
                // in effect until the next attempt.
                log::warn!("rate refresh failed, keeping previous table: {}", e);
                Ok(settings)
            }
        }
    }
}
