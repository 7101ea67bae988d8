//! HTTP rate-refresh client.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::currency::Currency;
use super::fx_errors::FxError;
use super::fx_model::RateTable;
use super::fx_traits::RateProviderTrait;
use crate::constants::RATE_DECIMAL_PRECISION;
use crate::errors::Result;

const DEFAULT_ENDPOINT: &str = "https://open.er-api.com/v6/latest/UYU";

/// Response shape shared by the open exchange-rate APIs: a map of currency
/// code to the amount of that currency one pivot unit buys.
#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, Decimal>,
}

pub struct HttpRateProvider {
    client: Client,
    endpoint: String,
}

impl HttpRateProvider {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        HttpRateProvider {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProviderTrait for HttpRateProvider {
    async fn fetch_rates(&self) -> Result<RateTable> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FxError::FetchFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| FxError::FetchFailed(e.to_string()))?;

        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| FxError::FetchFailed(e.to_string()))?;

        let mut rates = BTreeMap::new();
        rates.insert(Currency::PIVOT, Decimal::ONE);
        for currency in Currency::all() {
            if currency == Currency::PIVOT {
                continue;
            }
            match body.rates.get(currency.as_str()) {
                Some(per_pivot) if *per_pivot > Decimal::ZERO => {
                    // The provider quotes units of `currency` per pivot;
                    // the stored table is pivot units per one `currency`.
                    let rate = (Decimal::ONE / *per_pivot).round_dp(RATE_DECIMAL_PRECISION);
                    rates.insert(currency, rate);
                }
                _ => {
                    return Err(FxError::FetchFailed(format!(
                        "provider response has no usable rate for {}",
                        currency
                    ))
                    .into())
                }
            }
        }

        Ok(RateTable::new(rates)?)
    }
}
