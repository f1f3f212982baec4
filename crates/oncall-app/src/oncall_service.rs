use chrono::{DateTime, Utc};
use tracing::info;

use oncall_core::announcement::{select_on_call, Announcement, UserGroup};
use oncall_core::identity::IdentityMap;
use oncall_ports::outbound::{ChannelNotifier, GroupMembership, RotationDirectory};

use crate::error::AppError;
use crate::publisher::AnnouncementPublisher;
use crate::rotation_resolver::RotationResolver;

pub struct OnCallService<D, G, C>
where
    D: RotationDirectory,
    G: GroupMembership,
    C: ChannelNotifier,
{
    resolver: RotationResolver<D>,
    publisher: AnnouncementPublisher<G, C>,
    identities: IdentityMap,
    group: UserGroup,
}

impl<D, G, C> OnCallService<D, G, C>
where
    D: RotationDirectory,
    G: GroupMembership,
    C: ChannelNotifier,
{
    pub fn new(
        directory: D,
        groups: G,
        channel: C,
        identities: IdentityMap,
        group: UserGroup,
    ) -> Self {
        Self {
            resolver: RotationResolver::new(directory),
            publisher: AnnouncementPublisher::new(groups, channel),
            identities,
            group,
        }
    }

    /// Resolves who is on call around `now` and announces it.
    ///
    /// Returns `None` without touching Slack when no contact on shift has a
    /// Slack mapping.
    pub async fn announce(&self, now: DateTime<Utc>) -> Result<Option<Announcement>, AppError> {
        let contacts = self.resolver.resolve(now).await?;

        let Some(announcement) = select_on_call(&contacts, &self.identities, &self.group)? else {
            info!(contacts = contacts.len(), "no mapped contact on shift, nothing to announce");
            return Ok(None);
        };
        info!(
            user_id = %announcement.user_id(),
            text = %announcement.text().trim_end(),
            "on-call engineer resolved"
        );

        let members = self.identities.user_ids();
        self.publisher.publish(&announcement, &members).await?;

        Ok(Some(announcement))
    }
}
