//! Session-level tests: construction from settings, sharing and export

#[path = "../helpers/mod.rs"]
mod helpers;

mod shared;
