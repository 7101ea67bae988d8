use taskbalance_core::errors::Result;
use taskbalance_core::fx::{ExchangeRateSettings, FxRepositoryTrait};

use crate::store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct FxRepository {
    store: Arc<JsonStore>,
    user_id: String,
}

impl FxRepository {
    pub fn new(store: Arc<JsonStore>, user_id: impl Into<String>) -> Self {
        FxRepository {
            store,
            user_id: user_id.into(),
        }
    }

    fn settings_key(&self) -> String {
        format!("exchange_rate_settings_{}", self.user_id)
    }
}

#[async_trait]
impl FxRepositoryTrait for FxRepository {
    fn get_settings(&self) -> Result<ExchangeRateSettings> {
        Ok(self
            .store
            .load(&self.settings_key())?
            .unwrap_or_default())
    }

    async fn save_settings(&self, settings: &ExchangeRateSettings) -> Result<()> {
        self.store.save(&self.settings_key(), settings)
    }
}
