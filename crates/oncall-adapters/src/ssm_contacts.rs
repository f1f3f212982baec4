use async_trait::async_trait;
use aws_sdk_ssmcontacts::config::Region;
use aws_sdk_ssmcontacts::error::DisplayErrorContext;
use aws_sdk_ssmcontacts::primitives::DateTime as AwsDateTime;
use aws_sdk_ssmcontacts::Client;
use chrono::{DateTime, Utc};
use tracing::debug;

use oncall_core::contact::ContactId;
use oncall_core::ids::RotationId;
use oncall_core::rotation::{Shift, ShiftWindow};
use oncall_ports::error::DirectoryError;
use oncall_ports::outbound::RotationDirectory;

/// Rotation directory backed by AWS Systems Manager Incident Manager contacts.
#[derive(Clone)]
pub struct SsmContactsDirectory {
    client: Client,
}

impl SsmContactsDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads the default credential chain, pinned to `region`.
    pub async fn from_region(region: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config))
    }
}

fn to_aws_time(at: DateTime<Utc>) -> AwsDateTime {
    AwsDateTime::from_millis(at.timestamp_millis())
}

fn next_page(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(str::to_owned)
}

#[async_trait]
impl RotationDirectory for SsmContactsDirectory {
    async fn list_rotations(&self) -> Result<Vec<RotationId>, DirectoryError> {
        let mut rotations = Vec::new();
        let mut next_token = None;

        loop {
            let output = self
                .client
                .list_rotations()
                .set_next_token(next_token)
                .send()
                .await
                .map_err(|e| DirectoryError::ListRotations(DisplayErrorContext(&e).to_string()))?;

            rotations.extend(
                output
                    .rotations()
                    .iter()
                    .map(|r| RotationId::new(r.rotation_arn())),
            );

            next_token = next_page(output.next_token());
            if next_token.is_none() {
                break;
            }
        }

        debug!(rotations = rotations.len(), "SSM contacts rotations listed");
        Ok(rotations)
    }

    async fn list_rotation_shifts(
        &self,
        rotation: &RotationId,
        window: &ShiftWindow,
    ) -> Result<Vec<Shift>, DirectoryError> {
        let mut shifts = Vec::new();
        let mut next_token = None;

        loop {
            let output = self
                .client
                .list_rotation_shifts()
                .rotation_id(rotation.as_str())
                .start_time(to_aws_time(window.start()))
                .end_time(to_aws_time(window.end()))
                .set_next_token(next_token)
                .send()
                .await
                .map_err(|e| DirectoryError::ListShifts {
                    rotation: rotation.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;

            shifts.extend(output.rotation_shifts().iter().map(|shift| {
                Shift::new(
                    shift
                        .contact_ids()
                        .iter()
                        .map(|id| ContactId::new(id.as_str()))
                        .collect(),
                )
            }));

            next_token = next_page(output.next_token());
            if next_token.is_none() {
                break;
            }
        }

        Ok(shifts)
    }
}
