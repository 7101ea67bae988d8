use super::goals_errors::GoalError;
use super::goals_model::{
    Goal, GoalContribution, GoalPatch, GoalProgress, NewContribution, NewGoal,
};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::sync::Arc;
use uuid::Uuid;

pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
    fx_service: Arc<dyn FxServiceTrait>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>, fx_service: Arc<dyn FxServiceTrait>) -> Self {
        GoalService {
            repository,
            fx_service,
        }
    }

    fn find_goal(&self, goal_id: &str) -> Result<Goal> {
        self.repository
            .load_goals()?
            .into_iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()).into())
    }

    fn allocated_percentage(contributions: &[GoalContribution], goal_id: &str) -> Decimal {
        contributions
            .iter()
            .filter(|c| c.goal_id == goal_id)
            .fold(Decimal::zero(), |acc, c| acc + c.percentage)
    }

    /// Funded amount in the goal's currency for a given allocation and
    /// annual-savings figure. Derived on every call; nothing is cached.
    fn funded_amount(&self, goal: &Goal, allocated: Decimal, annual_savings: Decimal) -> Result<Decimal> {
        let funded_in_base = annual_savings * allocated / Decimal::ONE_HUNDRED;
        let base = self.fx_service.base_currency()?;
        self.fx_service
            .convert_currency(funded_in_base, base, goal.currency)
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.repository.load_goals()
    }

    fn get_contributions(&self, goal_id: &str) -> Result<Vec<GoalContribution>> {
        Ok(self
            .repository
            .load_contributions()?
            .into_iter()
            .filter(|c| c.goal_id == goal_id)
            .collect())
    }

    fn total_allocated_percentage(&self, goal_id: &str) -> Result<Decimal> {
        let contributions = self.repository.load_contributions()?;
        Ok(Self::allocated_percentage(&contributions, goal_id))
    }

    fn remaining_headroom(&self, goal_id: &str) -> Result<Decimal> {
        let headroom = Decimal::ONE_HUNDRED - self.total_allocated_percentage(goal_id)?;
        Ok(headroom.max(Decimal::ZERO))
    }

    fn current_funded_amount(&self, goal_id: &str, annual_savings: Decimal) -> Result<Decimal> {
        let goal = self.find_goal(goal_id)?;
        let allocated = self.total_allocated_percentage(goal_id)?;
        self.funded_amount(&goal, allocated, annual_savings)
    }

    fn is_completed(&self, goal_id: &str, annual_savings: Decimal) -> Result<bool> {
        let goal = self.find_goal(goal_id)?;
        let funded = self.current_funded_amount(goal_id, annual_savings)?;
        Ok(funded >= goal.target_amount)
    }

    fn list_goals_with_progress(&self, annual_savings: Decimal) -> Result<Vec<GoalProgress>> {
        let goals = self.repository.load_goals()?;
        let contributions = self.repository.load_contributions()?;

        let mut progress = Vec::with_capacity(goals.len());
        for goal in goals {
            let allocated = Self::allocated_percentage(&contributions, &goal.id);
            let current_amount = self.funded_amount(&goal, allocated, annual_savings)?;
            let is_completed = current_amount >= goal.target_amount;
            progress.push(GoalProgress {
                goal,
                allocated_percentage: allocated,
                current_amount,
                is_completed,
            });
        }

        // Completed goals sink to the bottom; open goals rank by priority.
        progress.sort_by_key(|p| (p.is_completed, Reverse(p.goal.priority)));
        Ok(progress)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;

        let now = Utc::now();
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: new_goal.title,
            description: new_goal.description,
            target_amount: new_goal.target_amount,
            currency: new_goal.currency,
            priority: new_goal.priority,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_goal(goal).await
    }

    async fn update_goal(&self, goal_id: &str, patch: GoalPatch) -> Result<Goal> {
        patch.validate()?;

        let mut goal = self.find_goal(goal_id)?;
        if let Some(title) = patch.title {
            goal.title = title;
        }
        if let Some(description) = patch.description {
            goal.description = Some(description);
        }
        if let Some(target_amount) = patch.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(currency) = patch.currency {
            goal.currency = currency;
        }
        if let Some(priority) = patch.priority {
            goal.priority = priority;
        }
        goal.updated_at = Utc::now();
        self.repository.update_goal(goal).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        let removed_contributions = self
            .repository
            .delete_contributions_for_goal(goal_id)
            .await?;
        if removed_contributions > 0 {
            debug!(
                "removed {} contributions for goal {}",
                removed_contributions, goal_id
            );
        }
        self.repository.delete_goal(goal_id).await
    }

    async fn add_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> Result<GoalContribution> {
        if new_contribution.percentage <= Decimal::ZERO {
            return Err(GoalError::InvalidPercentage.into());
        }

        // The goal must exist before its headroom means anything.
        self.find_goal(&new_contribution.goal_id)?;

        let available = self.remaining_headroom(&new_contribution.goal_id)?;
        if new_contribution.percentage > available {
            return Err(GoalError::AllocationExceedsHeadroom {
                requested: new_contribution.percentage,
                available,
            }
            .into());
        }

        let contribution = GoalContribution {
            id: Uuid::new_v4().to_string(),
            goal_id: new_contribution.goal_id,
            percentage: new_contribution.percentage,
            date: new_contribution.date,
            note: new_contribution.note,
        };
        self.repository.insert_contribution(contribution).await
    }
}
