//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goals_errors::GoalError;
use crate::fx::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

/// Domain model representing a savings goal.
///
/// A goal carries no stored "current amount". Its funded amount is derived
/// on every read from the live annual-savings figure and the goal's
/// percentage allocations, so it follows that figure without any
/// propagation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub currency: Currency,
    pub priority: GoalPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub currency: Currency,
    pub priority: GoalPriority,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<(), GoalError> {
        if self.title.trim().is_empty() {
            return Err(GoalError::InvalidData("title cannot be empty".to_string()));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(GoalError::InvalidData(
                "target amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Patch listing only the fields an edit is allowed to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<Decimal>,
    pub currency: Option<Currency>,
    pub priority: Option<GoalPriority>,
}

impl GoalPatch {
    pub fn validate(&self) -> Result<(), GoalError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(GoalError::InvalidData("title cannot be empty".to_string()));
            }
        }
        if let Some(target_amount) = self.target_amount {
            if target_amount <= Decimal::ZERO {
                return Err(GoalError::InvalidData(
                    "target amount must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A percentage-of-annual-savings allocation towards one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalContribution {
    pub id: String,
    pub goal_id: String,
    pub percentage: Decimal,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Input model for recording a new contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub goal_id: String,
    pub percentage: Decimal,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// A goal decorated with its derived allocation and funding state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    #[serde(flatten)]
    pub goal: Goal,
    pub allocated_percentage: Decimal,
    pub current_amount: Decimal,
    pub is_completed: bool,
}
