//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: typed ids, errors, and clocks.

mod clocks;
mod ids;
