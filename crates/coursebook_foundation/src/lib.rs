//! Identifiers, errors, and clocks for Coursebook.
//!
//! This crate provides:
//! - [`EntityId`] - Opaque, never-reused entity identifiers
//! - Typed ids ([`CourseTypeId`], [`CourseId`], [`OfferingId`], [`RegistrationId`])
//! - [`Error`] - Domain error with a categorized [`ErrorKind`]
//! - [`Clock`] - Injectable time source for registration timestamps

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod entity;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::{
    CourseId, CourseTypeId, EntityId, EntityKind, EntityRef, OfferingId, ParseIdError,
    RegistrationId,
};
pub use error::{Error, ErrorKind, Field};

/// Result type alias using the Coursebook [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
