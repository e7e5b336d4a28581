//! Session state for the REPL.
//!
//! The session owns the [`Catalog`] for its whole lifetime together with the
//! view state of the registration form: the active tab, the entity being
//! edited, the offering form selections, and the offerings filter. Every
//! mutation goes through the session so that view state never points at a
//! deleted entity.

use std::fmt;
use std::str::FromStr;

use coursebook_foundation::{
    CourseId, CourseTypeId, Error, Field, OfferingId, RegistrationId, Result,
};
use coursebook_storage::{Cascade, Catalog, CourseOffering};

use crate::error::CommandError;

/// The four views of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Course types list.
    #[default]
    CourseTypes,
    /// Courses list.
    Courses,
    /// Offerings with their registrations.
    Offerings,
    /// Every registration.
    Registrations,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [
        Self::CourseTypes,
        Self::Courses,
        Self::Offerings,
        Self::Registrations,
    ];

    /// Short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CourseTypes => "types",
            Self::Courses => "courses",
            Self::Offerings => "offerings",
            Self::Registrations => "registrations",
        }
    }

    /// Heading shown above the tab.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CourseTypes => "Course Types",
            Self::Courses => "Courses",
            Self::Offerings => "Course Offerings",
            Self::Registrations => "All Registrations",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = CommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "types" | "course-types" => Ok(Self::CourseTypes),
            "courses" => Ok(Self::Courses),
            "offerings" => Ok(Self::Offerings),
            "registrations" => Ok(Self::Registrations),
            other => Err(CommandError::UnknownTab(other.to_string())),
        }
    }
}

/// An entity whose name can be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A course type.
    CourseType(CourseTypeId),
    /// A course.
    Course(CourseId),
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CourseType(id) => write!(f, "course type {id}"),
            Self::Course(id) => write!(f, "course {id}"),
        }
    }
}

/// Whether a name is currently being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Nothing is being edited.
    #[default]
    Idle,
    /// The given entity is being edited.
    Editing(EditTarget),
}

/// Selections on the "create offering" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OfferingForm {
    /// Selected course type, if any.
    pub course_type: Option<CourseTypeId>,
    /// Selected course, if any.
    pub course: Option<CourseId>,
}

/// Session state for an interactive REPL session.
#[derive(Debug, Default)]
pub struct Session {
    /// The catalog for this session.
    catalog: Catalog,

    /// Tab shown by `show` with no argument.
    tab: Tab,

    /// In-place rename state.
    edit_mode: EditMode,

    /// Pending offering form selections.
    offering_form: OfferingForm,

    /// Course type filter on the offerings tab.
    type_filter: Option<CourseTypeId>,
}

impl Session {
    /// Creates a session with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around an existing catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Returns the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// Switches the active tab.
    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Returns the edit mode.
    #[must_use]
    pub const fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    /// Returns the offering form selections.
    #[must_use]
    pub const fn offering_form(&self) -> OfferingForm {
        self.offering_form
    }

    /// Returns the offerings filter.
    #[must_use]
    pub const fn type_filter(&self) -> Option<CourseTypeId> {
        self.type_filter
    }

    // =========================================================================
    // Course types and courses
    // =========================================================================

    /// Adds a course type.
    pub fn add_course_type(&mut self, name: &str) -> Result<CourseTypeId> {
        self.catalog.add_course_type(name)
    }

    /// Adds a course.
    pub fn add_course(&mut self, name: &str) -> Result<CourseId> {
        self.catalog.add_course(name)
    }

    /// Renames a course type and leaves edit mode.
    pub fn rename_course_type(&mut self, id: CourseTypeId, name: &str) -> Result<()> {
        self.catalog.rename_course_type(id, name)?;
        self.edit_mode = EditMode::Idle;
        Ok(())
    }

    /// Renames a course and leaves edit mode.
    pub fn rename_course(&mut self, id: CourseId, name: &str) -> Result<()> {
        self.catalog.rename_course(id, name)?;
        self.edit_mode = EditMode::Idle;
        Ok(())
    }

    /// Deletes a course type and clears any view state pointing at it.
    pub fn delete_course_type(&mut self, id: CourseTypeId) -> Result<Cascade> {
        let cascade = self.catalog.delete_course_type(id)?;
        if self.edit_mode == EditMode::Editing(EditTarget::CourseType(id)) {
            self.edit_mode = EditMode::Idle;
        }
        if self.offering_form.course_type == Some(id) {
            self.offering_form.course_type = None;
        }
        if self.type_filter == Some(id) {
            self.type_filter = None;
        }
        Ok(cascade)
    }

    /// Deletes a course and clears any view state pointing at it.
    pub fn delete_course(&mut self, id: CourseId) -> Result<Cascade> {
        let cascade = self.catalog.delete_course(id)?;
        if self.edit_mode == EditMode::Editing(EditTarget::Course(id)) {
            self.edit_mode = EditMode::Idle;
        }
        if self.offering_form.course == Some(id) {
            self.offering_form.course = None;
        }
        Ok(cascade)
    }

    // =========================================================================
    // Edit mode
    // =========================================================================

    /// Starts editing the name of `target`.
    pub fn begin_edit(&mut self, target: EditTarget) -> Result<()> {
        let exists = match target {
            EditTarget::CourseType(id) => self.catalog.course_type(id).is_some(),
            EditTarget::Course(id) => self.catalog.course(id).is_some(),
        };
        if !exists {
            return Err(match target {
                EditTarget::CourseType(id) => Error::not_found(id),
                EditTarget::Course(id) => Error::not_found(id),
            });
        }
        self.edit_mode = EditMode::Editing(target);
        Ok(())
    }

    /// Renames the entity being edited and leaves edit mode.
    ///
    /// Edit mode ends even if the rename fails. Returns `Ok(None)` if nothing
    /// was being edited.
    pub fn commit_edit(&mut self, name: &str) -> Result<Option<EditTarget>> {
        let EditMode::Editing(target) = std::mem::take(&mut self.edit_mode) else {
            return Ok(None);
        };
        match target {
            EditTarget::CourseType(id) => self.catalog.rename_course_type(id, name)?,
            EditTarget::Course(id) => self.catalog.rename_course(id, name)?,
        }
        Ok(Some(target))
    }

    /// Leaves edit mode without renaming.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = EditMode::Idle;
    }

    // =========================================================================
    // Offerings
    // =========================================================================

    /// Selects (or clears) the course type on the offering form.
    pub fn select_course_type(&mut self, id: Option<CourseTypeId>) -> Result<()> {
        if let Some(id) = id {
            if self.catalog.course_type(id).is_none() {
                return Err(Error::not_found(id));
            }
        }
        self.offering_form.course_type = id;
        Ok(())
    }

    /// Selects (or clears) the course on the offering form.
    pub fn select_course(&mut self, id: Option<CourseId>) -> Result<()> {
        if let Some(id) = id {
            if self.catalog.course(id).is_none() {
                return Err(Error::not_found(id));
            }
        }
        self.offering_form.course = id;
        Ok(())
    }

    /// Creates an offering from the form selections and resets the form.
    pub fn submit_offering(&mut self) -> Result<OfferingId> {
        let course_type = self
            .offering_form
            .course_type
            .ok_or_else(|| Error::validation_empty(Field::CourseTypeSelection))?;
        let course = self
            .offering_form
            .course
            .ok_or_else(|| Error::validation_empty(Field::CourseSelection))?;

        let id = self.catalog.create_offering(course_type, course)?;
        self.offering_form = OfferingForm::default();
        Ok(id)
    }

    /// Creates an offering directly, bypassing the form.
    pub fn create_offering(
        &mut self,
        course_type: CourseTypeId,
        course: CourseId,
    ) -> Result<OfferingId> {
        self.catalog.create_offering(course_type, course)
    }

    /// Deletes an offering and its registrations.
    pub fn delete_offering(&mut self, id: OfferingId) -> Result<Cascade> {
        self.catalog.delete_offering(id)
    }

    /// Sets (or clears) the offerings filter.
    pub fn set_type_filter(&mut self, id: Option<CourseTypeId>) -> Result<()> {
        if let Some(id) = id {
            if self.catalog.course_type(id).is_none() {
                return Err(Error::not_found(id));
            }
        }
        self.type_filter = id;
        Ok(())
    }

    /// Offerings visible under the current filter.
    pub fn visible_offerings(&self) -> impl Iterator<Item = &CourseOffering> + '_ {
        self.catalog.filter_by_type(self.type_filter)
    }

    // =========================================================================
    // Registrations
    // =========================================================================

    /// Registers a student for an offering.
    pub fn register_student(
        &mut self,
        student_name: &str,
        offering: OfferingId,
    ) -> Result<RegistrationId> {
        self.catalog.register_student(student_name, offering)
    }
}
