//! Tests for tool operations
//!
//! These tests verify that all tools:
//! 1. Paint the expected cells
//! 2. Push exactly one undo entry when they complete
//! 3. Can be undone

#[path = "../helpers/mod.rs"]
mod helpers;

mod fill;
