use chrono::{DateTime, Utc};
use tracing::debug;

use oncall_core::contact::ContactId;
use oncall_core::rotation::ShiftWindow;
use oncall_ports::outbound::RotationDirectory;

use crate::error::AppError;

pub struct RotationResolver<D>
where
    D: RotationDirectory,
{
    directory: D,
}

impl<D> RotationResolver<D>
where
    D: RotationDirectory,
{
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Contacts on shift around `now`, rotation order first, then shift order.
    /// Any failing rotation aborts the whole resolution.
    pub async fn resolve(&self, now: DateTime<Utc>) -> Result<Vec<ContactId>, AppError> {
        let window = ShiftWindow::around(now);
        let rotations = self.directory.list_rotations().await?;
        debug!(rotations = rotations.len(), "listed rotations");

        let mut contacts = Vec::new();
        for rotation in &rotations {
            let shifts = self
                .directory
                .list_rotation_shifts(rotation, &window)
                .await?;
            debug!(rotation = %rotation, shifts = shifts.len(), "listed rotation shifts");

            for shift in shifts {
                contacts.extend(shift.into_contact_ids());
            }
        }

        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;
    use oncall_core::ids::RotationId;
    use oncall_core::rotation::Shift;
    use oncall_ports::error::DirectoryError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockDirectory {
        rotations: Vec<RotationId>,
        shifts: HashMap<RotationId, Vec<Shift>>,
        failing_rotation: Option<RotationId>,
        fail_listing: bool,
        queried: Mutex<Vec<(RotationId, ShiftWindow)>>,
    }

    #[async_trait]
    impl RotationDirectory for MockDirectory {
        async fn list_rotations(&self) -> Result<Vec<RotationId>, DirectoryError> {
            if self.fail_listing {
                return Err(DirectoryError::ListRotations("access denied".into()));
            }
            Ok(self.rotations.clone())
        }

        async fn list_rotation_shifts(
            &self,
            rotation: &RotationId,
            window: &ShiftWindow,
        ) -> Result<Vec<Shift>, DirectoryError> {
            self.queried
                .lock()
                .unwrap()
                .push((rotation.clone(), *window));
            if self.failing_rotation.as_ref() == Some(rotation) {
                return Err(DirectoryError::ListShifts {
                    rotation: rotation.to_string(),
                    reason: "throttled".into(),
                });
            }
            Ok(self.shifts.get(rotation).cloned().unwrap_or_default())
        }
    }

    fn ts(s: &str) -> DateTime<Utc> {
        chrono::DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn shift(names: &[&str]) -> Shift {
        Shift::new(
            names
                .iter()
                .map(|n| ContactId::new(format!("contact/{n}")))
                .collect(),
        )
    }

    fn two_rotation_directory() -> MockDirectory {
        let primary = RotationId::new("rotation/primary");
        let secondary = RotationId::new("rotation/secondary");
        MockDirectory {
            rotations: vec![primary.clone(), secondary.clone()],
            shifts: HashMap::from([
                (primary, vec![shift(&["alice", "bob"]), shift(&["carol"])]),
                (secondary, vec![shift(&["alice"])]),
            ]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn concatenates_in_rotation_then_shift_order() {
        let resolver = RotationResolver::new(two_rotation_directory());
        let contacts = resolver.resolve(ts("2025-01-13T09:00:00Z")).await.unwrap();

        let names: Vec<&str> = contacts.iter().map(|c| c.as_str()).collect();
        // duplicates are kept
        assert_eq!(
            names,
            vec!["contact/alice", "contact/bob", "contact/carol", "contact/alice"]
        );
    }

    #[tokio::test]
    async fn every_rotation_queried_with_same_window() {
        let now = ts("2025-01-13T09:00:00Z");
        let resolver = RotationResolver::new(two_rotation_directory());
        resolver.resolve(now).await.unwrap();

        let queried = resolver.directory.queried.lock().unwrap();
        assert_eq!(queried.len(), 2);
        for (_, window) in queried.iter() {
            assert_eq!(window.start(), now - Duration::hours(1));
            assert_eq!(window.end(), now + Duration::days(7));
        }
    }

    #[tokio::test]
    async fn no_rotations_yields_no_contacts() {
        let resolver = RotationResolver::new(MockDirectory::default());
        let contacts = resolver.resolve(ts("2025-01-13T09:00:00Z")).await.unwrap();
        assert!(contacts.is_empty());
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let resolver = RotationResolver::new(MockDirectory {
            fail_listing: true,
            ..Default::default()
        });
        let err = resolver
            .resolve(ts("2025-01-13T09:00:00Z"))
            .await
            .unwrap_err();
        assert_eq!(err.stage(), "list-rotations");
    }

    #[tokio::test]
    async fn one_failing_rotation_aborts_everything() {
        let mut directory = two_rotation_directory();
        directory.failing_rotation = Some(RotationId::new("rotation/secondary"));
        let resolver = RotationResolver::new(directory);

        let err = resolver
            .resolve(ts("2025-01-13T09:00:00Z"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Directory(DirectoryError::ListShifts { ref rotation, .. })
                if rotation == "rotation/secondary"
        ));
    }
}
