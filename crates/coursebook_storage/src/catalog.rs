//! The catalog store.
//!
//! A [`Catalog`] owns the four entity collections of a session and enforces
//! the relational rules between them:
//!
//! - an offering references an existing course type and course
//! - a registration references an existing offering
//! - deletes cascade from types and courses to offerings, and from offerings
//!   to registrations
//!
//! Every operation either succeeds completely or returns an error and leaves
//! the catalog untouched.

use coursebook_foundation::{
    Clock, CourseId, CourseTypeId, EntityRef, Error, Field, OfferingId, RegistrationId, Result,
    SystemClock,
};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::cascade::Cascade;
use crate::entity::IdAllocator;
use crate::model::{Course, CourseOffering, CourseType, Registration};
use crate::table::Table;
use crate::view::RegistrationView;

/// In-memory store of course types, courses, offerings, and registrations.
#[derive(Debug)]
pub struct Catalog {
    ids: IdAllocator,
    course_types: Table<CourseType>,
    courses: Table<Course>,
    offerings: Table<CourseOffering>,
    registrations: Table<Registration>,
    clock: Box<dyn Clock>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog stamping registrations with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty catalog with the given clock.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            ids: IdAllocator::new(),
            course_types: Table::new(),
            courses: Table::new(),
            offerings: Table::new(),
            registrations: Table::new(),
            clock: Box::new(clock),
        }
    }

    // =========================================================================
    // Course types
    // =========================================================================

    /// Adds a course type.
    ///
    /// The name is stored as given; it only has to contain something other
    /// than whitespace.
    pub fn add_course_type(&mut self, name: impl Into<String>) -> Result<CourseTypeId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::validation_empty(Field::CourseTypeName));
        }

        let id = CourseTypeId::new(self.ids.allocate());
        tracing::debug!(%id, name = %name, "added course type");
        self.course_types.insert(CourseType { id, name });
        Ok(id)
    }

    /// Renames a course type. Any name is accepted, including an empty one.
    ///
    /// Offerings keep the name they were created with.
    pub fn rename_course_type(&mut self, id: CourseTypeId, name: impl Into<String>) -> Result<()> {
        let course_type = self
            .course_types
            .get_mut(id)
            .ok_or_else(|| Error::not_found(id))?;
        course_type.name = name.into();
        tracing::debug!(%id, name = %course_type.name, "renamed course type");
        Ok(())
    }

    /// Deletes a course type along with its offerings and their registrations.
    pub fn delete_course_type(&mut self, id: CourseTypeId) -> Result<Cascade> {
        self.course_types
            .remove(id)
            .ok_or_else(|| Error::not_found(id))?;
        let cascade = self.remove_offerings_where(|o| o.course_type_id == id);
        log_delete(id.into(), &cascade);
        Ok(cascade)
    }

    /// Returns the course type with the given id.
    #[must_use]
    pub fn course_type(&self, id: CourseTypeId) -> Option<&CourseType> {
        self.course_types.get(id)
    }

    /// Returns all course types in insertion order.
    #[must_use]
    pub fn course_types(&self) -> &Table<CourseType> {
        &self.course_types
    }

    // =========================================================================
    // Courses
    // =========================================================================

    /// Adds a course.
    pub fn add_course(&mut self, name: impl Into<String>) -> Result<CourseId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::validation_empty(Field::CourseName));
        }

        let id = CourseId::new(self.ids.allocate());
        tracing::debug!(%id, name = %name, "added course");
        self.courses.insert(Course { id, name });
        Ok(id)
    }

    /// Renames a course. Any name is accepted, including an empty one.
    pub fn rename_course(&mut self, id: CourseId, name: impl Into<String>) -> Result<()> {
        let course = self.courses.get_mut(id).ok_or_else(|| Error::not_found(id))?;
        course.name = name.into();
        tracing::debug!(%id, name = %course.name, "renamed course");
        Ok(())
    }

    /// Deletes a course along with its offerings and their registrations.
    pub fn delete_course(&mut self, id: CourseId) -> Result<Cascade> {
        self.courses.remove(id).ok_or_else(|| Error::not_found(id))?;
        let cascade = self.remove_offerings_where(|o| o.course_id == id);
        log_delete(id.into(), &cascade);
        Ok(cascade)
    }

    /// Returns the course with the given id.
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Returns all courses in insertion order.
    #[must_use]
    pub fn courses(&self) -> &Table<Course> {
        &self.courses
    }

    // =========================================================================
    // Offerings
    // =========================================================================

    /// Creates an offering of `course_id` under `course_type_id`.
    ///
    /// The offering's name is fixed at this point from the current names of
    /// the type and course.
    pub fn create_offering(
        &mut self,
        course_type_id: CourseTypeId,
        course_id: CourseId,
    ) -> Result<OfferingId> {
        let course_type = self
            .course_types
            .get(course_type_id)
            .ok_or_else(|| Error::not_found(course_type_id))?;
        let course = self
            .courses
            .get(course_id)
            .ok_or_else(|| Error::not_found(course_id))?;
        let name = CourseOffering::compose_name(course_type, course);

        let id = OfferingId::new(self.ids.allocate());
        tracing::debug!(%id, %course_type_id, %course_id, name = %name, "created offering");
        self.offerings.insert(CourseOffering {
            id,
            course_type_id,
            course_id,
            name,
        });
        Ok(id)
    }

    /// Deletes an offering along with its registrations.
    pub fn delete_offering(&mut self, id: OfferingId) -> Result<Cascade> {
        self.offerings.remove(id).ok_or_else(|| Error::not_found(id))?;
        let registrations = self.registrations.remove_where(|r| r.offering_id == id);
        let cascade = Cascade {
            offerings: Vec::new(),
            registrations,
        };
        log_delete(id.into(), &cascade);
        Ok(cascade)
    }

    /// Returns the offering with the given id.
    #[must_use]
    pub fn offering(&self, id: OfferingId) -> Option<&CourseOffering> {
        self.offerings.get(id)
    }

    /// Returns all offerings in insertion order.
    #[must_use]
    pub fn offerings(&self) -> &Table<CourseOffering> {
        &self.offerings
    }

    /// Offerings of one course type, or all offerings when `course_type_id` is `None`.
    ///
    /// Insertion order is preserved.
    pub fn filter_by_type(
        &self,
        course_type_id: Option<CourseTypeId>,
    ) -> impl Iterator<Item = &CourseOffering> + '_ {
        self.offerings
            .iter()
            .filter(move |o| course_type_id.is_none_or(|t| o.course_type_id == t))
    }

    // =========================================================================
    // Registrations
    // =========================================================================

    /// Registers a student for an offering, stamped with the catalog clock.
    pub fn register_student(
        &mut self,
        student_name: impl Into<String>,
        offering_id: OfferingId,
    ) -> Result<RegistrationId> {
        let student_name = student_name.into();
        if student_name.trim().is_empty() {
            return Err(Error::validation_empty(Field::StudentName));
        }
        if !self.offerings.contains(offering_id) {
            return Err(Error::not_found(offering_id));
        }

        let id = RegistrationId::new(self.ids.allocate());
        let registered_at = self.clock.now();
        tracing::debug!(%id, %offering_id, student = %student_name, "registered student");
        self.registrations.insert(Registration {
            id,
            student_name,
            offering_id,
            registered_at,
        });
        Ok(id)
    }

    /// Returns the registration with the given id.
    #[must_use]
    pub fn registration(&self, id: RegistrationId) -> Option<&Registration> {
        self.registrations.get(id)
    }

    /// Registrations for one offering, in insertion order.
    pub fn list_by_offering(
        &self,
        offering_id: OfferingId,
    ) -> impl Iterator<Item = &Registration> + '_ {
        self.registrations
            .iter()
            .filter(move |r| r.offering_id == offering_id)
    }

    /// Every registration in insertion order, joined with its offering.
    pub fn list_all(&self) -> impl Iterator<Item = RegistrationView<'_>> + '_ {
        self.registrations.iter().map(move |registration| RegistrationView {
            registration,
            offering: self.offerings.get(registration.offering_id),
        })
    }

    /// Returns all registrations in insertion order.
    #[must_use]
    pub fn registrations(&self) -> &Table<Registration> {
        &self.registrations
    }

    // =========================================================================
    // Integrity
    // =========================================================================

    /// Returns the references held by offerings and registrations that do not resolve.
    ///
    /// Always empty for a catalog driven only through its public operations.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<EntityRef> {
        let mut dangling = Vec::new();
        for offering in &self.offerings {
            if !self.course_types.contains(offering.course_type_id) {
                dangling.push(offering.course_type_id.into());
            }
            if !self.courses.contains(offering.course_id) {
                dangling.push(offering.course_id.into());
            }
        }
        for registration in &self.registrations {
            if !self.offerings.contains(registration.offering_id) {
                dangling.push(registration.offering_id.into());
            }
        }
        dangling
    }

    /// Borrows the whole catalog for inspection or export.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            course_types: self.course_types.as_slice(),
            courses: self.courses.as_slice(),
            offerings: self.offerings.as_slice(),
            registrations: self.registrations.as_slice(),
        }
    }

    fn remove_offerings_where(&mut self, predicate: impl FnMut(&CourseOffering) -> bool) -> Cascade {
        let offerings = self.offerings.remove_where(predicate);
        let registrations = if offerings.is_empty() {
            Vec::new()
        } else {
            self.registrations
                .remove_where(|r| offerings.contains(&r.offering_id))
        };
        Cascade {
            offerings,
            registrations,
        }
    }
}

fn log_delete(target: EntityRef, cascade: &Cascade) {
    if cascade.is_empty() {
        tracing::debug!(%target, "deleted");
    } else {
        tracing::info!(
            %target,
            offerings = cascade.offerings.len(),
            registrations = cascade.registrations.len(),
            "deleted with cascade"
        );
    }
}

/// Borrowed view of every collection in a catalog.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Snapshot<'a> {
    /// Course types in insertion order.
    pub course_types: &'a [CourseType],
    /// Courses in insertion order.
    pub courses: &'a [Course],
    /// Offerings in insertion order.
    pub offerings: &'a [CourseOffering],
    /// Registrations in insertion order.
    pub registrations: &'a [Registration],
}
