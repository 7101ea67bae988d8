//! Household module - member aggregation and invitations.

mod household_errors;
mod household_model;
mod household_service;
mod household_traits;

#[cfg(test)]
mod household_service_tests;

pub use household_errors::HouseholdError;
pub use household_model::{
    Household, HouseholdFinancialSummary, HouseholdInvitation, HouseholdMember, InvitationStatus,
    MemberContribution,
};
pub use household_service::{HouseholdService, NoRemoteBackend};
pub use household_traits::{
    HouseholdBackendTrait, HouseholdMemberProviderTrait, HouseholdRepositoryTrait,
    HouseholdServiceTrait,
};
