//! Integration tests for Layer 1: Storage
//!
//! Tests for the catalog store: lifecycle, cascades, and derived views.

mod cascade;
mod catalog;
mod properties;
mod views;
