//! Read-only joined views over the catalog.

use crate::model::{CourseOffering, Registration};

/// A registration joined with its current offering.
///
/// The join is a lookup at read time, not a stored reference. Since deleting
/// an offering also deletes its registrations, `offering` is `None` only if
/// the catalog's invariants have been broken.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationView<'a> {
    /// The registration row.
    pub registration: &'a Registration,
    /// The offering it points at, if it still exists.
    pub offering: Option<&'a CourseOffering>,
}

impl RegistrationView<'_> {
    /// Name of the joined offering, or the empty string on a join miss.
    #[must_use]
    pub fn offering_name(&self) -> &str {
        self.offering.map_or("", |o| o.name.as_str())
    }
}
