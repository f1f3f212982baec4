use crate::contact::ContactId;
use crate::error::DomainError;
use crate::identity::IdentityMap;
use crate::ids::{SlackUserId, UserGroupId};

/// Slack user group that gets mentioned and whose membership is reasserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroup {
    id: UserGroupId,
    name: String,
}

impl UserGroup {
    pub fn new(id: UserGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &UserGroupId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    group: UserGroup,
    user_id: SlackUserId,
}

impl Announcement {
    pub fn new(group: UserGroup, user_id: SlackUserId) -> Self {
        Self { group, user_id }
    }

    pub fn group(&self) -> &UserGroup {
        &self.group
    }

    pub fn user_id(&self) -> &SlackUserId {
        &self.user_id
    }

    /// Slack mrkdwn text posted to the channel.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<!subteam^{}|{}> this week is <@{}> \n",
            self.group.id, self.group.name, self.user_id
        )
    }
}

/// Picks the first contact, in directory order, that has a Slack mapping.
///
/// Later matches are ignored. A malformed contact id encountered before the
/// first match is an error; running out of contacts is not.
pub fn select_on_call(
    contacts: &[ContactId],
    identities: &IdentityMap,
    group: &UserGroup,
) -> Result<Option<Announcement>, DomainError> {
    for contact in contacts {
        let name = contact.name()?;
        if let Some(user_id) = identities.lookup(name) {
            return Ok(Some(Announcement::new(group.clone(), user_id.clone())));
        }
    }
    Ok(None)
}
