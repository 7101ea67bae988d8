//! Household domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::household_errors::HouseholdError;

/// A household record.
///
/// `is_local_fallback` marks records synthesized on this device because the
/// remote backend was unreachable at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub id: String,
    pub name: String,
    pub owner_user_id: String,
    pub members: Vec<HouseholdMember>,
    pub is_local_fallback: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdMember {
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// An invitation to join a household.
///
/// The status transition is one-shot: once accepted or rejected it is
/// terminal. The expiry timestamp is informational only — expired but
/// unactioned invitations remain visible and actionable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdInvitation {
    pub id: String,
    pub household_id: String,
    pub invited_email: String,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl HouseholdInvitation {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn accept(&mut self) -> Result<(), HouseholdError> {
        self.transition(InvitationStatus::Accepted)
    }

    pub fn reject(&mut self) -> Result<(), HouseholdError> {
        self.transition(InvitationStatus::Rejected)
    }

    fn transition(&mut self, to: InvitationStatus) -> Result<(), HouseholdError> {
        if self.status != InvitationStatus::Pending {
            return Err(HouseholdError::InvitationAlreadyActioned(self.id.clone()));
        }
        self.status = to;
        Ok(())
    }
}

/// One member's share of the household month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberContribution {
    pub user_id: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub percentage: Decimal,
}

/// Derived snapshot of a household's finances.
///
/// Never stored; recomputed from the household ledger on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdFinancialSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub monthly_savings: Decimal,
    pub annual_savings: Decimal,
    pub member_contributions: Vec<MemberContribution>,
}
