use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed contact id: {0}")]
    MalformedContactId(String),
}
