//! Goals module - percentage-of-savings goal accounting.

mod goals_errors;
mod goals_model;
mod goals_service;
mod goals_traits;


pub use goals_errors::GoalError;
pub use goals_model::{
    Goal, GoalContribution, GoalPatch, GoalPriority, GoalProgress, NewContribution, NewGoal,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
