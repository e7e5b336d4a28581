//! Entity id allocation.
//!
//! The `IdAllocator` hands out ids for every collection in a catalog from one
//! counter. Freed ids are never handed out again, so a stale id can only ever
//! miss, never alias a newer entity.

use coursebook_foundation::EntityId;

/// Allocates unique entity ids.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    /// The raw value of the next id.
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocates a fresh id.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId::new(self.next);
        self.next += 1;
        id
    }
}
