//! Service wiring.
//!
//! Builds every service once at process start and hands them out as shared
//! trait objects, so callers receive their collaborators explicitly instead
//! of reaching for module-level singletons.

use std::sync::Arc;

use crate::fx::{FxRepositoryTrait, FxService, FxServiceTrait, RateProviderTrait};
use crate::goals::{GoalRepositoryTrait, GoalService, GoalServiceTrait};
use crate::household::{
    HouseholdBackendTrait, HouseholdMemberProviderTrait, HouseholdRepositoryTrait,
    HouseholdService, HouseholdServiceTrait,
};
use crate::transactions::{
    TransactionRepositoryTrait, TransactionService, TransactionServiceTrait,
};

pub struct ServiceContext {
    pub fx_service: Arc<dyn FxServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub household_service: Arc<dyn HouseholdServiceTrait>,
}

impl ServiceContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        fx_repository: Arc<dyn FxRepositoryTrait>,
        rate_provider: Arc<dyn RateProviderTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        household_repository: Arc<dyn HouseholdRepositoryTrait>,
        member_provider: Arc<dyn HouseholdMemberProviderTrait>,
        household_backend: Arc<dyn HouseholdBackendTrait>,
    ) -> Self {
        let fx_service: Arc<dyn FxServiceTrait> =
            Arc::new(FxService::new(fx_repository, rate_provider));
        let transaction_service: Arc<dyn TransactionServiceTrait> = Arc::new(
            TransactionService::new(transaction_repository.clone(), fx_service.clone()),
        );
        let goal_service: Arc<dyn GoalServiceTrait> =
            Arc::new(GoalService::new(goal_repository, fx_service.clone()));
        let household_service: Arc<dyn HouseholdServiceTrait> = Arc::new(HouseholdService::new(
            household_repository,
            member_provider,
            household_backend,
            transaction_repository,
        ));

        ServiceContext {
            fx_service,
            transaction_service,
            goal_service,
            household_service,
        }
    }
}
