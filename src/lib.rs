//! regionmatch-rs
//!
//! Workspace host crate. Re-exports `regionmatch-core` so the programs under
//! `demos/` can `use regionmatch_rs::prelude::*`.

pub use regionmatch_core::*;
