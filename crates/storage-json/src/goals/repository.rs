use taskbalance_core::errors::{Result, StorageError};
use taskbalance_core::goals::{Goal, GoalContribution, GoalRepositoryTrait};

use crate::store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Goals and contributions are stored as two documents per user. The domain
/// models serialize as-is; there is no separate stored record type because
/// no legacy layout exists for them.
pub struct GoalRepository {
    store: Arc<JsonStore>,
    user_id: String,
}

impl GoalRepository {
    pub fn new(store: Arc<JsonStore>, user_id: impl Into<String>) -> Self {
        GoalRepository {
            store,
            user_id: user_id.into(),
        }
    }

    fn goals_key(&self) -> String {
        format!("goals_{}", self.user_id)
    }

    fn contributions_key(&self) -> String {
        format!("goal_contributions_{}", self.user_id)
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.store.load(&self.goals_key())?.unwrap_or_default())
    }

    fn load_contributions(&self) -> Result<Vec<GoalContribution>> {
        Ok(self
            .store
            .load(&self.contributions_key())?
            .unwrap_or_default())
    }

    async fn insert_goal(&self, goal: Goal) -> Result<Goal> {
        let mut goals = self.load_goals()?;
        goals.push(goal.clone());
        self.store.save(&self.goals_key(), &goals)?;
        Ok(goal)
    }

    async fn update_goal(&self, goal: Goal) -> Result<Goal> {
        let mut goals = self.load_goals()?;
        let position = goals
            .iter()
            .position(|g| g.id == goal.id)
            .ok_or_else(|| StorageError::NotFound(format!("goal {}", goal.id)))?;
        goals[position] = goal.clone();
        self.store.save(&self.goals_key(), &goals)?;
        Ok(goal)
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        let mut goals = self.load_goals()?;
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        let removed = before - goals.len();
        if removed > 0 {
            self.store.save(&self.goals_key(), &goals)?;
        }
        Ok(removed)
    }

    async fn insert_contribution(
        &self,
        contribution: GoalContribution,
    ) -> Result<GoalContribution> {
        let mut contributions = self.load_contributions()?;
        contributions.push(contribution.clone());
        self.store.save(&self.contributions_key(), &contributions)?;
        Ok(contribution)
    }

    async fn delete_contributions_for_goal(&self, goal_id: &str) -> Result<usize> {
        let mut contributions = self.load_contributions()?;
        let before = contributions.len();
        contributions.retain(|c| c.goal_id != goal_id);
        let removed = before - contributions.len();
        if removed > 0 {
            self.store.save(&self.contributions_key(), &contributions)?;
        }
        Ok(removed)
    }
}
