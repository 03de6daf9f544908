//! Task list ownership and mutation authority.
//!
//! # Responsibility
//! - Guard every mutation of the task collection behind total, no-fail
//!   commands.
//! - Publish change notifications the presentation layer re-renders on.
//!
//! # See also
//! - `crate::gesture` for the swipe interpreter that feeds `delete_task`.

pub mod task_list;
