use thiserror::Error;

#[derive(Error, Debug)]
pub enum HouseholdError {
    #[error("Household not found: {0}")]
    NotFound(String),

    #[error("Invitation not found: {0}")]
    InvitationNotFound(String),

    #[error("Invitation {0} has already been actioned")]
    InvitationAlreadyActioned(String),

    #[error("Household backend unavailable: {0}")]
    BackendUnavailable(String),
}
