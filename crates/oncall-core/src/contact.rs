use crate::error::DomainError;

/// Directory-native identifier of a shift assignee.
///
/// The contact name is the second `/`-delimited segment, e.g.
/// `arn:aws:ssm-contacts:eu-west-1:111122223333:contact/alice` names `alice`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn name(&self) -> Result<&str, DomainError> {
        match self.0.split('/').nth(1) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(DomainError::MalformedContactId(self.0.clone())),
        }
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
