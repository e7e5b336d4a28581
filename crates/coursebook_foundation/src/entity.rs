//! Entity identifiers.
//!
//! Every entity in a catalog gets an [`EntityId`] from a single allocator, so
//! ids are unique across all four collections. The typed wrappers keep a
//! course id from being passed where an offering id is expected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque entity identifier.
///
/// Identifiers are allocated monotonically and never reused, even after the
/// entity they named has been deleted.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an entity id from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a typed id cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} id: {input:?} (expected {prefix}<number>)")]
pub struct ParseIdError {
    /// The kind of id being parsed.
    pub kind: EntityKind,
    /// The expected prefix.
    pub prefix: char,
    /// The rejected input.
    pub input: String,
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(EntityId);

        impl $name {
            /// Display prefix for this id type.
            pub const PREFIX: char = $prefix;

            /// Wraps an allocated entity id.
            #[must_use]
            pub const fn new(id: EntityId) -> Self {
                Self(id)
            }

            /// Returns the underlying entity id.
            #[must_use]
            pub const fn entity(self) -> EntityId {
                self.0
            }
        }

        impl From<$name> for EntityId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0.get())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0.get())
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            /// Accepts both the prefixed form (`t3`) and a bare number (`3`).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix($prefix).unwrap_or(s);
                digits
                    .parse::<u64>()
                    .map(|raw| Self(EntityId::new(raw)))
                    .map_err(|_| ParseIdError {
                        kind: $kind,
                        prefix: $prefix,
                        input: s.to_string(),
                    })
            }
        }
    };
}

typed_id!(
    /// Identifier of a course type.
    CourseTypeId,
    EntityKind::CourseType,
    't'
);
typed_id!(
    /// Identifier of a course.
    CourseId,
    EntityKind::Course,
    'c'
);
typed_id!(
    /// Identifier of a course offering.
    OfferingId,
    EntityKind::Offering,
    'o'
);
typed_id!(
    /// Identifier of a registration.
    RegistrationId,
    EntityKind::Registration,
    'r'
);

/// The four kinds of entity held by a catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityKind {
    /// A course type (e.g. "Beginner").
    CourseType,
    /// A course (e.g. "Piano").
    Course,
    /// A pairing of course type and course.
    Offering,
    /// A student's registration against an offering.
    Registration,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CourseType => "course type",
            Self::Course => "course",
            Self::Offering => "offering",
            Self::Registration => "registration",
        };
        f.write_str(name)
    }
}

/// A typed reference to any entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityRef {
    /// Reference to a course type.
    CourseType(CourseTypeId),
    /// Reference to a course.
    Course(CourseId),
    /// Reference to an offering.
    Offering(OfferingId),
    /// Reference to a registration.
    Registration(RegistrationId),
}

impl EntityRef {
    /// Returns the kind of the referenced entity.
    #[must_use]
    pub const fn kind(self) -> EntityKind {
        match self {
            Self::CourseType(_) => EntityKind::CourseType,
            Self::Course(_) => EntityKind::Course,
            Self::Offering(_) => EntityKind::Offering,
            Self::Registration(_) => EntityKind::Registration,
        }
    }

    /// Returns the untyped entity id.
    #[must_use]
    pub const fn entity(self) -> EntityId {
        match self {
            Self::CourseType(id) => id.entity(),
            Self::Course(id) => id.entity(),
            Self::Offering(id) => id.entity(),
            Self::Registration(id) => id.entity(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CourseType(id) => write!(f, "{} {id}", self.kind()),
            Self::Course(id) => write!(f, "{} {id}", self.kind()),
            Self::Offering(id) => write!(f, "{} {id}", self.kind()),
            Self::Registration(id) => write!(f, "{} {id}", self.kind()),
        }
    }
}

impl From<CourseTypeId> for EntityRef {
    fn from(id: CourseTypeId) -> Self {
        Self::CourseType(id)
    }
}

impl From<CourseId> for EntityRef {
    fn from(id: CourseId) -> Self {
        Self::Course(id)
    }
}

impl From<OfferingId> for EntityRef {
    fn from(id: OfferingId) -> Self {
        Self::Offering(id)
    }
}

impl From<RegistrationId> for EntityRef {
    fn from(id: RegistrationId) -> Self {
        Self::Registration(id)
    }
}
