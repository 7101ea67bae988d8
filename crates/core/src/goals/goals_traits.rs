use super::goals_model::{
    Goal, GoalContribution, GoalPatch, GoalProgress, NewContribution, NewGoal,
};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for goal and contribution persistence.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn load_contributions(&self) -> Result<Vec<GoalContribution>>;
    async fn insert_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
    async fn insert_contribution(&self, contribution: GoalContribution)
        -> Result<GoalContribution>;
    async fn delete_contributions_for_goal(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_contributions(&self, goal_id: &str) -> Result<Vec<GoalContribution>>;
    /// Sum of contribution percentages for the goal, in `[0, 100]`.
    fn total_allocated_percentage(&self, goal_id: &str) -> Result<Decimal>;
    /// `100 - total_allocated_percentage`, floored at 0.
    fn remaining_headroom(&self, goal_id: &str) -> Result<Decimal>;
    /// The goal's funded amount in its own currency, derived from the live
    /// annual-savings figure (expressed in the base currency).
    fn current_funded_amount(&self, goal_id: &str, annual_savings: Decimal) -> Result<Decimal>;
    fn is_completed(&self, goal_id: &str, annual_savings: Decimal) -> Result<bool>;
    /// All goals with derived progress, completed goals sorted last.
    fn list_goals_with_progress(&self, annual_savings: Decimal) -> Result<Vec<GoalProgress>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, patch: GoalPatch) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
    async fn add_contribution(&self, new_contribution: NewContribution)
        -> Result<GoalContribution>;
}
