use async_trait::async_trait;

use oncall_core::ids::{RotationId, SlackUserId, UserGroupId};
use oncall_core::rotation::{Shift, ShiftWindow};

use crate::error::{DirectoryError, NotifyError};

/// Source of rotations and their shifts.
#[async_trait]
pub trait RotationDirectory: Send + Sync {
    async fn list_rotations(&self) -> Result<Vec<RotationId>, DirectoryError>;
    async fn list_rotation_shifts(
        &self,
        rotation: &RotationId,
        window: &ShiftWindow,
    ) -> Result<Vec<Shift>, DirectoryError>;
}

#[async_trait]
pub trait GroupMembership: Send + Sync {
    /// Replaces the whole membership of `group` with `members`.
    async fn replace_members(
        &self,
        group: &UserGroupId,
        members: &[SlackUserId],
    ) -> Result<(), NotifyError>;
}

#[async_trait]
pub trait ChannelNotifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}
