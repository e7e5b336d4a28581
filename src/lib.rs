//! Coursebook - session-scoped registration book
//!
//! This crate re-exports all layers of the Coursebook system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: coursebook_runtime    — Session view state, commands, REPL, CLI
//! Layer 1: coursebook_storage    — Catalog store, cascading deletes, views
//! Layer 0: coursebook_foundation — Core types (EntityId, Error, Clock)
//! ```

pub use coursebook_foundation as foundation;
pub use coursebook_runtime as runtime;
pub use coursebook_storage as storage;
