//! Tests for layer operations and compositing

#[path = "../helpers/mod.rs"]
mod helpers;

mod structure;
