use super::household_errors::HouseholdError;
use super::household_model::{
    Household, HouseholdFinancialSummary, HouseholdInvitation, HouseholdMember, InvitationStatus,
    MemberContribution,
};
use super::household_traits::{
    HouseholdBackendTrait, HouseholdMemberProviderTrait, HouseholdRepositoryTrait,
    HouseholdServiceTrait,
};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, INVITATION_EXPIRY_DAYS};
use crate::errors::Result;
use crate::transactions::{LedgerScope, TransactionRepositoryTrait, TransactionType};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Backend stand-in for fully local installs; every call reports the
/// backend as unreachable so household creation takes the local fallback
/// path.
pub struct NoRemoteBackend;

#[async_trait]
impl HouseholdBackendTrait for NoRemoteBackend {
    async fn create_household(&self, _name: &str, _owner: &HouseholdMember) -> Result<Household> {
        Err(HouseholdError::BackendUnavailable("no remote backend configured".to_string()).into())
    }
}

pub struct HouseholdService {
    repository: Arc<dyn HouseholdRepositoryTrait>,
    member_provider: Arc<dyn HouseholdMemberProviderTrait>,
    backend: Arc<dyn HouseholdBackendTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl HouseholdService {
    pub fn new(
        repository: Arc<dyn HouseholdRepositoryTrait>,
        member_provider: Arc<dyn HouseholdMemberProviderTrait>,
        backend: Arc<dyn HouseholdBackendTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        HouseholdService {
            repository,
            member_provider,
            backend,
            transaction_repository,
        }
    }
}

#[async_trait]
impl HouseholdServiceTrait for HouseholdService {
    fn get_household(&self, household_id: &str) -> Result<Option<Household>> {
        self.repository.load_household(household_id)
    }

    fn financial_summary(
        &self,
        household_id: &str,
        today: NaiveDate,
    ) -> Result<HouseholdFinancialSummary> {
        let members = self.member_provider.members(household_id)?;
        let scope = LedgerScope::Household {
            household_id: household_id.to_string(),
        };
        let ledger = self.transaction_repository.load(&scope)?;

        let month = today.month();
        let year = today.year();

        let mut member_contributions: Vec<MemberContribution> = members
            .iter()
            .map(|member| {
                let mut income = Decimal::zero();
                let mut expenses = Decimal::zero();
                for transaction in ledger
                    .iter()
                    .filter(|t| t.owner_user_id == member.user_id)
                    .filter(|t| t.date.month() == month && t.date.year() == year)
                {
                    match transaction.transaction_type {
                        TransactionType::Income => income += transaction.normalized_amount,
                        TransactionType::Expense => expenses += transaction.normalized_amount,
                    }
                }
                MemberContribution {
                    user_id: member.user_id.clone(),
                    income,
                    expenses,
                    balance: income - expenses,
                    percentage: Decimal::zero(),
                }
            })
            .collect();

        let total_income: Decimal = member_contributions
            .iter()
            .fold(Decimal::zero(), |acc, c| acc + c.income);
        let total_expenses: Decimal = member_contributions
            .iter()
            .fold(Decimal::zero(), |acc, c| acc + c.expenses);

        for contribution in &mut member_contributions {
            contribution.percentage = if total_income.is_zero() {
                Decimal::zero()
            } else {
                (contribution.income / total_income * Decimal::ONE_HUNDRED)
                    .round_dp(DISPLAY_DECIMAL_PRECISION)
            };
        }

        let mut annual_income = Decimal::zero();
        let mut annual_expenses = Decimal::zero();
        for transaction in ledger.iter().filter(|t| t.date.year() == year) {
            match transaction.transaction_type {
                TransactionType::Income => annual_income += transaction.normalized_amount,
                TransactionType::Expense => annual_expenses += transaction.normalized_amount,
            }
        }

        Ok(HouseholdFinancialSummary {
            total_income: total_income.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_expenses: total_expenses.round_dp(DISPLAY_DECIMAL_PRECISION),
            monthly_savings: (total_income - total_expenses).round_dp(DISPLAY_DECIMAL_PRECISION),
            annual_savings: (annual_income - annual_expenses).round_dp(DISPLAY_DECIMAL_PRECISION),
            member_contributions,
        })
    }

    fn list_invitations(&self, household_id: &str) -> Result<Vec<HouseholdInvitation>> {
        // Expired invitations are included: expiry is display information,
        // not an enforced transition.
        self.repository.load_invitations(household_id)
    }

    async fn create_household(&self, name: &str, owner: HouseholdMember) -> Result<Household> {
        let household = match self.backend.create_household(name, &owner).await {
            Ok(household) => household,
            Err(e) => {
                warn!("household backend unavailable, creating local record: {}", e);
                Household {
                    id: Uuid::new_v4().to_string(),
                    name: name.to_string(),
                    owner_user_id: owner.user_id.clone(),
                    members: vec![owner],
                    is_local_fallback: true,
                    created_at: Utc::now(),
                }
            }
        };
        self.repository.save_household(&household).await?;
        Ok(household)
    }

    async fn invite_member(
        &self,
        household_id: &str,
        invited_email: &str,
        now: DateTime<Utc>,
    ) -> Result<HouseholdInvitation> {
        if self.repository.load_household(household_id)?.is_none() {
            return Err(HouseholdError::NotFound(household_id.to_string()).into());
        }

        let invitation = HouseholdInvitation {
            id: Uuid::new_v4().to_string(),
            household_id: household_id.to_string(),
            invited_email: invited_email.to_string(),
            status: InvitationStatus::Pending,
            created_at: now,
            expires_at: now + Duration::days(INVITATION_EXPIRY_DAYS),
        };
        debug!("inviting {} to household {}", invited_email, household_id);
        self.repository.save_invitation(&invitation).await?;
        Ok(invitation)
    }

    async fn respond_to_invitation(
        &self,
        household_id: &str,
        invitation_id: &str,
        accept: bool,
    ) -> Result<HouseholdInvitation> {
        let mut invitation = self
            .repository
            .load_invitations(household_id)?
            .into_iter()
            .find(|i| i.id == invitation_id)
            .ok_or_else(|| HouseholdError::InvitationNotFound(invitation_id.to_string()))?;

        if accept {
            invitation.accept()?;
        } else {
            invitation.reject()?;
        }

        self.repository.save_invitation(&invitation).await?;
        Ok(invitation)
    }
}
