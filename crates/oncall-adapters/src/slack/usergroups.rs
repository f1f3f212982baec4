use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use oncall_core::ids::{SlackUserId, UserGroupId};
use oncall_ports::error::NotifyError;
use oncall_ports::outbound::GroupMembership;

pub const DEFAULT_USERGROUPS_UPDATE_URL: &str = "https://slack.com/api/usergroups.users.update";

/// `usergroups.users.update` client.
pub struct SlackUserGroups {
    api_url: String,
    token: String,
    client: reqwest::Client,
}

impl SlackUserGroups {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            api_url,
            token,
            client: reqwest::Client::new(),
        }
    }
}

/// Slack answers HTTP 200 even for logical failures; `ok` tells them apart.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl GroupMembership for SlackUserGroups {
    async fn replace_members(
        &self,
        group: &UserGroupId,
        members: &[SlackUserId],
    ) -> Result<(), NotifyError> {
        let users = members
            .iter()
            .map(SlackUserId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let form = [
            ("token", self.token.as_str()),
            ("usergroup", group.as_str()),
            ("users", users.as_str()),
        ];

        debug!(group = %group, members = members.len(), "updating Slack user group");

        let response = self
            .client
            .post(&self.api_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| NotifyError::UserGroup(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(status = %status, error = %e, "Slack user group response unreadable");
            NotifyError::UserGroup(format!("reading Slack response ({status}): {e}"))
        })?;

        if !status.is_success() {
            warn!(status = %status, body = %body, "Slack user group update rejected");
            return Err(NotifyError::UserGroup(format!(
                "Slack returned {status}: {body}"
            )));
        }

        if let Ok(envelope) = serde_json::from_str::<ApiEnvelope>(&body) {
            if !envelope.ok {
                let reason = envelope.error.unwrap_or_else(|| "unknown_error".to_string());
                warn!(error = %reason, "Slack user group update not ok");
                return Err(NotifyError::UserGroup(format!("Slack API error: {reason}")));
            }
        }

        Ok(())
    }
}
