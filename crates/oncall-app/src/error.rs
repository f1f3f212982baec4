use oncall_core::error::DomainError;
use oncall_ports::error::{DirectoryError, NotifyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
}

impl AppError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Domain(_) => "select",
            Self::Directory(e) => e.stage(),
            Self::Notify(e) => e.stage(),
        }
    }
}
