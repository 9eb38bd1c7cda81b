//! Tests for flip, rotate, resize and clear

#[path = "../helpers/mod.rs"]
mod helpers;

mod flip_rotate;
