use taskbalance_core::errors::Result;
use taskbalance_core::household::{
    Household, HouseholdInvitation, HouseholdMember, HouseholdMemberProviderTrait,
    HouseholdRepositoryTrait,
};

use crate::store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct HouseholdRepository {
    store: Arc<JsonStore>,
}

impl HouseholdRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        HouseholdRepository { store }
    }

    fn household_key(household_id: &str) -> String {
        format!("household_{household_id}")
    }

    fn invitations_key(household_id: &str) -> String {
        format!("household_invitations_{household_id}")
    }
}

#[async_trait]
impl HouseholdRepositoryTrait for HouseholdRepository {
    fn load_household(&self, household_id: &str) -> Result<Option<Household>> {
        self.store.load(&Self::household_key(household_id))
    }

    async fn save_household(&self, household: &Household) -> Result<()> {
        self.store
            .save(&Self::household_key(&household.id), household)
    }

    fn load_invitations(&self, household_id: &str) -> Result<Vec<HouseholdInvitation>> {
        Ok(self
            .store
            .load(&Self::invitations_key(household_id))?
            .unwrap_or_default())
    }

    async fn save_invitation(&self, invitation: &HouseholdInvitation) -> Result<()> {
        let mut invitations = self.load_invitations(&invitation.household_id)?;
        match invitations.iter_mut().find(|i| i.id == invitation.id) {
            Some(existing) => *existing = invitation.clone(),
            None => invitations.push(invitation.clone()),
        }
        self.store
            .save(&Self::invitations_key(&invitation.household_id), &invitations)
    }
}

/// The stored household record doubles as the membership source: the
/// member collaborator is satisfied straight from the persisted document.
impl HouseholdMemberProviderTrait for HouseholdRepository {
    fn members(&self, household_id: &str) -> Result<Vec<HouseholdMember>> {
        Ok(self
            .load_household(household_id)?
            .map(|household| household.members)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use taskbalance_core::household::InvitationStatus;

    fn repository() -> (HouseholdRepository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::new(dir.path()).unwrap());
        (HouseholdRepository::new(store), dir)
    }

    fn household(id: &str) -> Household {
        Household {
            id: id.to_string(),
            name: "Casa".to_string(),
            owner_user_id: "user-1".to_string(),
            members: vec![HouseholdMember {
                user_id: "user-1".to_string(),
                name: "Ana".to_string(),
            }],
            is_local_fallback: false,
            created_at: Utc::now(),
        }
    }

    fn invitation(id: &str, household_id: &str) -> HouseholdInvitation {
        let now = Utc::now();
        HouseholdInvitation {
            id: id.to_string(),
            household_id: household_id.to_string(),
            invited_email: "carla@example.com".to_string(),
            status: InvitationStatus::Pending,
            created_at: now,
            expires_at: now + Duration::days(7),
        }
    }

    #[tokio::test]
    async fn households_round_trip_and_expose_members() {
        let (repository, _dir) = repository();

        assert!(repository.load_household("household-1").unwrap().is_none());
        repository
            .save_household(&household("household-1"))
            .await
            .unwrap();

        let loaded = repository.load_household("household-1").unwrap().unwrap();
        assert_eq!(loaded.name, "Casa");

        let members = repository.members("household-1").unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].user_id, "user-1");
        assert!(repository.members("missing").unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_invitation_upserts_by_id() {
        let (repository, _dir) = repository();

        repository
            .save_invitation(&invitation("inv-1", "household-1"))
            .await
            .unwrap();

        let mut accepted = invitation("inv-1", "household-1");
        accepted.status = InvitationStatus::Accepted;
        repository.save_invitation(&accepted).await.unwrap();

        let invitations = repository.load_invitations("household-1").unwrap();
        assert_eq!(invitations.len(), 1);
        assert_eq!(invitations[0].status, InvitationStatus::Accepted);
    }
}
