//! Catalog entities.

use chrono::{DateTime, SecondsFormat, Utc};
use coursebook_foundation::{CourseId, CourseTypeId, OfferingId, RegistrationId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::table::Keyed;

/// A category or level of course, e.g. "Beginner".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CourseType {
    /// Unique id.
    pub id: CourseTypeId,
    /// Display name. May be empty after a rename.
    pub name: String,
}

/// A subject, e.g. "Piano".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Course {
    /// Unique id.
    pub id: CourseId,
    /// Display name. May be empty after a rename.
    pub name: String,
}

/// A course offered under a course type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CourseOffering {
    /// Unique id.
    pub id: OfferingId,
    /// The course type this offering belongs to.
    pub course_type_id: CourseTypeId,
    /// The course being offered.
    pub course_id: CourseId,
    /// `"<type name> - <course name>"` as of creation; not updated on rename.
    pub name: String,
}

impl CourseOffering {
    /// Builds the snapshot name of an offering.
    #[must_use]
    pub fn compose_name(course_type: &CourseType, course: &Course) -> String {
        format!("{} - {}", course_type.name, course.name)
    }
}

/// A student's enrollment in an offering. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Registration {
    /// Unique id.
    pub id: RegistrationId,
    /// Student name as entered.
    pub student_name: String,
    /// The offering registered for.
    pub offering_id: OfferingId,
    /// Creation timestamp.
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Returns the registration timestamp in ISO-8601 form.
    #[must_use]
    pub fn registered_at_iso(&self) -> String {
        self.registered_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Keyed for CourseType {
    type Id = CourseTypeId;

    fn id(&self) -> CourseTypeId {
        self.id
    }
}

impl Keyed for Course {
    type Id = CourseId;

    fn id(&self) -> CourseId {
        self.id
    }
}

impl Keyed for CourseOffering {
    type Id = OfferingId;

    fn id(&self) -> OfferingId {
        self.id
    }
}

impl Keyed for Registration {
    type Id = RegistrationId;

    fn id(&self) -> RegistrationId {
        self.id
    }
}
