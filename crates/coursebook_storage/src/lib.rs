//! In-memory catalog store for Coursebook.
//!
//! This crate provides:
//! - [`IdAllocator`] - Monotonic, never-reused id allocation
//! - [`Table`] - Insertion-ordered entity collections
//! - [`Catalog`] - The four-collection store with cascading deletes
//! - [`RegistrationView`] - Registrations joined with their offering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cascade;
pub mod catalog;
pub mod entity;
pub mod model;
pub mod table;
pub mod view;

pub use cascade::Cascade;
pub use catalog::{Catalog, Snapshot};
pub use entity::IdAllocator;
pub use model::{Course, CourseOffering, CourseType, Registration};
pub use table::{Keyed, Table};
pub use view::RegistrationView;
