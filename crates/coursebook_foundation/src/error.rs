//! Error types for the Coursebook domain.
//!
//! Uses `thiserror` for ergonomic error definition. Every failing operation
//! leaves the catalog unchanged.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityRef;

/// The main error type for Coursebook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty-input validation error.
    #[must_use]
    pub fn validation_empty(field: Field) -> Self {
        Self::new(ErrorKind::ValidationEmpty(field))
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn not_found(entity: impl Into<EntityRef>) -> Self {
        Self::new(ErrorKind::NotFound(entity.into()))
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::ValidationEmpty(_))
    }

    /// Returns true if this is a not-found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A required text field was empty or whitespace-only.
    #[error("{0} must not be empty")]
    ValidationEmpty(Field),

    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(EntityRef),
}

/// Input fields subject to the non-empty check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Name given when adding a course type.
    CourseTypeName,
    /// Name given when adding a course.
    CourseName,
    /// Student name given when registering.
    StudentName,
    /// Course type selection on the offering form.
    CourseTypeSelection,
    /// Course selection on the offering form.
    CourseSelection,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CourseTypeName => "course type name",
            Self::CourseName => "course name",
            Self::StudentName => "student name",
            Self::CourseTypeSelection => "course type selection",
            Self::CourseSelection => "course selection",
        };
        f.write_str(name)
    }
}
