use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("listing rotations failed: {0}")]
    ListRotations(String),
    #[error("listing shifts for rotation {rotation} failed: {reason}")]
    ListShifts { rotation: String, reason: String },
}

impl DirectoryError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::ListRotations(_) => "list-rotations",
            Self::ListShifts { .. } => "list-shifts",
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("user group update failed: {0}")]
    UserGroup(String),
    #[error("webhook delivery failed: {0}")]
    Webhook(String),
}

impl NotifyError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::UserGroup(_) => "usergroup",
            Self::Webhook(_) => "webhook",
        }
    }
}
