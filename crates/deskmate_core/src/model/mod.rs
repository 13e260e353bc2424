//! Domain records persisted by the repositories.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned integer id.
//! - Enumerated fields are closed enums; unknown strings are rejected at the
//!   parsing boundary, never smuggled through as raw text.

pub mod launcher;
pub mod task;
pub mod task_tree;
pub mod template;
