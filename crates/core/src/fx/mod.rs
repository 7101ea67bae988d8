//! FX module - currencies, exchange-rate settings, conversion, refresh.

mod currency;
mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;
mod rate_provider;


pub use currency::Currency;
pub use currency_converter::CurrencyConverter;
pub use fx_errors::FxError;
pub use fx_model::{ExchangeRateSettings, RateTable};
pub use fx_service::FxService;
pub use fx_traits::{FxRepositoryTrait, FxServiceTrait, RateProviderTrait};
pub use rate_provider::HttpRateProvider;
