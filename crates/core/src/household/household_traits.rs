use super::household_model::{
    Household, HouseholdFinancialSummary, HouseholdInvitation, HouseholdMember,
};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Trait for household and invitation persistence.
#[async_trait]
pub trait HouseholdRepositoryTrait: Send + Sync {
    fn load_household(&self, household_id: &str) -> Result<Option<Household>>;
    async fn save_household(&self, household: &Household) -> Result<()>;
    fn load_invitations(&self, household_id: &str) -> Result<Vec<HouseholdInvitation>>;
    /// Inserts or replaces the invitation by id.
    async fn save_invitation(&self, invitation: &HouseholdInvitation) -> Result<()>;
}

/// Collaborator supplying household membership. The summary aggregates
/// exactly the members this provider returns.
pub trait HouseholdMemberProviderTrait: Send + Sync {
    fn members(&self, household_id: &str) -> Result<Vec<HouseholdMember>>;
}

/// Remote backend collaborator for household creation.
#[async_trait]
pub trait HouseholdBackendTrait: Send + Sync {
    async fn create_household(&self, name: &str, owner: &HouseholdMember) -> Result<Household>;
}

/// Trait for household service operations.
#[async_trait]
pub trait HouseholdServiceTrait: Send + Sync {
    fn get_household(&self, household_id: &str) -> Result<Option<Household>>;
    /// Month/year are taken from the caller-supplied `today`, not from
    /// transaction creation time.
    fn financial_summary(
        &self,
        household_id: &str,
        today: NaiveDate,
    ) -> Result<HouseholdFinancialSummary>;
    fn list_invitations(&self, household_id: &str) -> Result<Vec<HouseholdInvitation>>;
    async fn create_household(&self, name: &str, owner: HouseholdMember) -> Result<Household>;
    async fn invite_member(
        &self,
        household_id: &str,
        invited_email: &str,
        now: DateTime<Utc>,
    ) -> Result<HouseholdInvitation>;
    async fn respond_to_invitation(
        &self,
        household_id: &str,
        invitation_id: &str,
        accept: bool,
    ) -> Result<HouseholdInvitation>;
}
