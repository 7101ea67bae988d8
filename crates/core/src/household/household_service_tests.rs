#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::fx::Currency;
    use crate::household::{
        Household, HouseholdBackendTrait, HouseholdError, HouseholdInvitation, HouseholdMember,
        HouseholdMemberProviderTrait, HouseholdRepositoryTrait, HouseholdService,
        HouseholdServiceTrait, InvitationStatus, NoRemoteBackend,
    };
    use crate::transactions::{
        LedgerScope, Transaction, TransactionRepositoryTrait, TransactionType,
    };
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    const HOUSEHOLD_ID: &str = "household-1";

    // --- Mock HouseholdRepository ---
    struct MockHouseholdRepository {
        household: Mutex<Option<Household>>,
        invitations: Mutex<Vec<HouseholdInvitation>>,
    }

    impl MockHouseholdRepository {
        fn new(household: Option<Household>) -> Self {
            Self {
                household: Mutex::new(household),
                invitations: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HouseholdRepositoryTrait for MockHouseholdRepository {
        fn load_household(&self, household_id: &str) -> Result<Option<Household>> {
            Ok(self
                .household
                .lock()
                .unwrap()
                .clone()
                .filter(|h| h.id == household_id))
        }

        async fn save_household(&self, household: &Household) -> Result<()> {
            *self.household.lock().unwrap() = Some(household.clone());
            Ok(())
        }

        fn load_invitations(&self, household_id: &str) -> Result<Vec<HouseholdInvitation>> {
            Ok(self
                .invitations
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.household_id == household_id)
                .cloned()
                .collect())
        }

        async fn save_invitation(&self, invitation: &HouseholdInvitation) -> Result<()> {
            let mut invitations = self.invitations.lock().unwrap();
            match invitations.iter_mut().find(|i| i.id == invitation.id) {
                Some(existing) => *existing = invitation.clone(),
                None => invitations.push(invitation.clone()),
            }
            Ok(())
        }
    }

    // --- Mock member provider ---
    struct MockMemberProvider {
        members: Vec<HouseholdMember>,
    }

    impl HouseholdMemberProviderTrait for MockMemberProvider {
        fn members(&self, _household_id: &str) -> Result<Vec<HouseholdMember>> {
            Ok(self.members.clone())
        }
    }

    // --- Mock remote backend ---
    struct MockBackend;

    #[async_trait]
    impl HouseholdBackendTrait for MockBackend {
        async fn create_household(
            &self,
            name: &str,
            owner: &HouseholdMember,
        ) -> Result<Household> {
            Ok(Household {
                id: "remote-1".to_string(),
                name: name.to_string(),
                owner_user_id: owner.user_id.clone(),
                members: vec![owner.clone()],
                is_local_fallback: false,
                created_at: Utc::now(),
            })
        }
    }

    // --- Mock transaction repository (read-only household ledger) ---
    struct MockTransactionRepository {
        ledger: Vec<Transaction>,
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn load(&self, scope: &LedgerScope) -> Result<Vec<Transaction>> {
            match scope {
                LedgerScope::Household { household_id } if household_id == HOUSEHOLD_ID => {
                    Ok(self.ledger.clone())
                }
                _ => Ok(Vec::new()),
            }
        }

        async fn insert(&self, _transaction: Transaction) -> Result<Transaction> {
            unimplemented!()
        }

        async fn update(&self, _transaction: Transaction) -> Result<Transaction> {
            unimplemented!()
        }

        async fn delete(&self, _scope: &LedgerScope, _transaction_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    fn member(user_id: &str, name: &str) -> HouseholdMember {
        HouseholdMember {
            user_id: user_id.to_string(),
            name: name.to_string(),
        }
    }

    fn household() -> Household {
        Household {
            id: HOUSEHOLD_ID.to_string(),
            name: "Casa".to_string(),
            owner_user_id: "user-1".to_string(),
            members: vec![member("user-1", "Ana"), member("user-2", "Bruno")],
            is_local_fallback: false,
            created_at: Utc::now(),
        }
    }

    fn shared_transaction(
        owner_user_id: &str,
        transaction_type: TransactionType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: format!("tx-{}-{}-{}", owner_user_id, amount, date),
            transaction_type,
            normalized_amount: amount,
            normalized_currency: Currency::Uyu,
            original_amount: amount,
            original_currency: Currency::Uyu,
            category: "shared".to_string(),
            description: None,
            date,
            owner_user_id: owner_user_id.to_string(),
            owner_name: owner_user_id.to_string(),
            is_shared: true,
            household_id: Some(HOUSEHOLD_ID.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn service_with(
        household: Option<Household>,
        members: Vec<HouseholdMember>,
        ledger: Vec<Transaction>,
        backend: Arc<dyn HouseholdBackendTrait>,
    ) -> (HouseholdService, Arc<MockHouseholdRepository>) {
        let repository = Arc::new(MockHouseholdRepository::new(household));
        let service = HouseholdService::new(
            repository.clone(),
            Arc::new(MockMemberProvider { members }),
            backend,
            Arc::new(MockTransactionRepository { ledger }),
        );
        (service, repository)
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn member_percentages_sum_to_one_hundred() {
        let today = date(2026, 3, 15);
        let ledger = vec![
            shared_transaction("user-1", TransactionType::Income, dec!(3000), date(2026, 3, 1)),
            shared_transaction("user-2", TransactionType::Income, dec!(1000), date(2026, 3, 2)),
            shared_transaction("user-2", TransactionType::Expense, dec!(500), date(2026, 3, 3)),
        ];
        let (service, _) = service_with(
            Some(household()),
            household().members,
            ledger,
            Arc::new(NoRemoteBackend),
        );

        let summary = service.financial_summary(HOUSEHOLD_ID, today).unwrap();

        assert_eq!(summary.total_income, dec!(4000));
        assert_eq!(summary.total_expenses, dec!(500));
        assert_eq!(summary.monthly_savings, dec!(3500));
        assert_eq!(summary.member_contributions[0].percentage, dec!(75));
        assert_eq!(summary.member_contributions[1].percentage, dec!(25));
        let percentage_sum: Decimal = summary
            .member_contributions
            .iter()
            .map(|c| c.percentage)
            .sum();
        assert_eq!(percentage_sum, dec!(100));
        assert_eq!(summary.member_contributions[1].balance, dec!(500));
    }

    #[test]
    fn zero_income_means_zero_percentages() {
        let today = date(2026, 3, 15);
        let ledger = vec![shared_transaction(
            "user-1",
            TransactionType::Expense,
            dec!(800),
            date(2026, 3, 4),
        )];
        let (service, _) = service_with(
            Some(household()),
            household().members,
            ledger,
            Arc::new(NoRemoteBackend),
        );

        let summary = service.financial_summary(HOUSEHOLD_ID, today).unwrap();

        assert_eq!(summary.total_income, dec!(0));
        for contribution in &summary.member_contributions {
            assert_eq!(contribution.percentage, dec!(0));
        }
    }

    #[test]
    fn summary_uses_the_callers_month_and_spans_the_year() {
        let today = date(2026, 3, 15);
        let ledger = vec![
            shared_transaction("user-1", TransactionType::Income, dec!(2000), date(2026, 3, 1)),
            // Other months stay out of the monthly figures but count for the year.
            shared_transaction("user-1", TransactionType::Income, dec!(900), date(2026, 1, 10)),
            shared_transaction("user-1", TransactionType::Expense, dec!(400), date(2026, 2, 20)),
            // Previous year is excluded everywhere.
            shared_transaction("user-1", TransactionType::Income, dec!(7000), date(2025, 3, 1)),
        ];
        let (service, _) = service_with(
            Some(household()),
            household().members,
            ledger,
            Arc::new(NoRemoteBackend),
        );

        let summary = service.financial_summary(HOUSEHOLD_ID, today).unwrap();

        assert_eq!(summary.total_income, dec!(2000));
        assert_eq!(summary.annual_savings, dec!(2500));
    }

    #[tokio::test]
    async fn household_creation_falls_back_locally_when_the_backend_fails() {
        let (service, repository) = service_with(
            None,
            Vec::new(),
            Vec::new(),
            Arc::new(NoRemoteBackend),
        );

        let created = service
            .create_household("Casa", member("user-1", "Ana"))
            .await
            .unwrap();

        assert!(created.is_local_fallback);
        assert_eq!(created.owner_user_id, "user-1");
        assert_eq!(created.members.len(), 1);
        // The fallback record was persisted like any other.
        assert!(repository
            .load_household(&created.id)
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn household_creation_uses_the_backend_when_available() {
        let (service, _) = service_with(None, Vec::new(), Vec::new(), Arc::new(MockBackend));

        let created = service
            .create_household("Casa", member("user-1", "Ana"))
            .await
            .unwrap();

        assert!(!created.is_local_fallback);
        assert_eq!(created.id, "remote-1");
    }

    #[tokio::test]
    async fn invitations_transition_exactly_once() {
        let (service, _) = service_with(
            Some(household()),
            household().members,
            Vec::new(),
            Arc::new(NoRemoteBackend),
        );

        let invitation = service
            .invite_member(HOUSEHOLD_ID, "carla@example.com", Utc::now())
            .await
            .unwrap();
        assert_eq!(invitation.status, InvitationStatus::Pending);

        let accepted = service
            .respond_to_invitation(HOUSEHOLD_ID, &invitation.id, true)
            .await
            .unwrap();
        assert_eq!(accepted.status, InvitationStatus::Accepted);

        let again = service
            .respond_to_invitation(HOUSEHOLD_ID, &invitation.id, false)
            .await;
        assert!(matches!(
            again,
            Err(crate::errors::Error::Household(
                HouseholdError::InvitationAlreadyActioned(_)
            ))
        ));
    }

    #[tokio::test]
    async fn inviting_into_an_unknown_household_fails() {
        let (service, _) = service_with(None, Vec::new(), Vec::new(), Arc::new(NoRemoteBackend));

        let result = service
            .invite_member("missing", "carla@example.com", Utc::now())
            .await;
        assert!(matches!(
            result,
            Err(crate::errors::Error::Household(HouseholdError::NotFound(_)))
        ));
    }
}
