//! Insertion-ordered entity collections.

use std::slice;

/// An entity that carries its own id.
pub trait Keyed {
    /// The typed id of the entity.
    type Id: Copy + Eq;

    /// Returns the entity's id.
    fn id(&self) -> Self::Id;
}

/// A collection of entities kept in insertion order.
///
/// Lookups are linear; a session catalog holds at most a few thousand rows
/// and iteration order is what every view needs.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Keyed> Table<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn insert(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Returns the row with the given id.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Returns a mutable reference to the row with the given id.
    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// Returns true if a row with the given id exists.
    #[must_use]
    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Removes and returns the row with the given id, keeping the order of the rest.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// Removes every row matching `predicate` and returns their ids in order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T::Id> {
        let mut removed = Vec::new();
        self.rows.retain(|row| {
            if predicate(row) {
                removed.push(row.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Iterates rows in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
