//! Domain model for the menu-bar task list.
//!
//! # Responsibility
//! - Define the canonical task record mutated by the list store.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal; no tombstones are kept.
//!
//! # See also
//! - `crate::store` for the single mutation authority.

pub mod task;
