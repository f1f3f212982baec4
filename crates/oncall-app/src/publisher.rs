use tracing::info;

use oncall_core::announcement::Announcement;
use oncall_core::ids::SlackUserId;
use oncall_ports::outbound::{ChannelNotifier, GroupMembership};

use crate::error::AppError;

/// Pushes an announcement out: group membership first, then the channel post.
pub struct AnnouncementPublisher<G, C>
where
    G: GroupMembership,
    C: ChannelNotifier,
{
    pub(crate) groups: G,
    pub(crate) channel: C,
}

impl<G, C> AnnouncementPublisher<G, C>
where
    G: GroupMembership,
    C: ChannelNotifier,
{
    pub fn new(groups: G, channel: C) -> Self {
        Self { groups, channel }
    }

    /// `members` replaces the group's membership wholesale. A failed group
    /// update stops before anything is posted.
    pub async fn publish(
        &self,
        announcement: &Announcement,
        members: &[SlackUserId],
    ) -> Result<(), AppError> {
        let group = announcement.group().id();

        self.groups.replace_members(group, members).await?;
        info!(group = %group, members = members.len(), "user group membership replaced");

        self.channel.notify(&announcement.text()).await?;
        info!(user_id = %announcement.user_id(), "on-call announcement posted");

        Ok(())
    }
}
