pub mod window;

use crate::contact::ContactId;

pub use window::ShiftWindow;

/// One shift of a rotation, as far as on-call resolution cares about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    contact_ids: Vec<ContactId>,
}

impl Shift {
    pub fn new(contact_ids: Vec<ContactId>) -> Self {
        Self { contact_ids }
    }

    pub fn contact_ids(&self) -> &[ContactId] {
        &self.contact_ids
    }

    pub fn into_contact_ids(self) -> Vec<ContactId> {
        self.contact_ids
    }
}
