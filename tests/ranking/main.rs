//! Ranking Integration Tests
//!
//! End-to-end weighting and ordering, cluster ordering invariants and the
//! component lifecycle.

#[path = "../common/mod.rs"]
mod common;

mod component_lifecycle;
mod end_to_end;
