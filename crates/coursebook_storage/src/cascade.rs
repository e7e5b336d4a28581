//! Cascade reports for deletions.
//!
//! Deleting a course type or course removes every offering that references
//! it, and deleting an offering removes its registrations. The [`Cascade`]
//! returned by each delete lists the dependents that went with it.

use coursebook_foundation::{OfferingId, RegistrationId};

/// Dependents removed alongside a deleted entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cascade {
    /// Offerings removed, in catalog order.
    pub offerings: Vec<OfferingId>,
    /// Registrations removed, in catalog order.
    pub registrations: Vec<RegistrationId>,
}

impl Cascade {
    /// Returns true if nothing besides the target was removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty() && self.registrations.is_empty()
    }
}
