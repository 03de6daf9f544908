//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do record the list store owns.
//! - Provide the completion lifecycle helper.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is immutable after construction; no edit operation exists.
//! - `created_at` records creation time only and never drives ordering.
//!
//! # See also
//! - `crate::store::task_list` for every mutation path.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task created in a process lifetime.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// One to-do item.
///
/// Tasks are plain data; all mutation goes through the list store so the
/// collection stays consistent and observers hear about every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable random 128-bit ID, never reused even after deletion.
    pub id: TaskId,
    /// Display text, stored exactly as entered.
    pub title: String,
    /// Completion flag toggled by user action.
    pub is_completed: bool,
    /// Unix epoch milliseconds captured at creation. Display-only; list
    /// position is governed by insertion order, not this value.
    pub created_at: i64,
}

impl Task {
    /// Creates a task with a generated stable ID and the current time.
    ///
    /// # Invariants
    /// - `is_completed` starts as `false`.
    /// - `title` is stored verbatim; rejecting blank input is the store's
    ///   decision, not this constructor's.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
            created_at: now_epoch_ms(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

fn now_epoch_ms() -> i64 {
    // A clock before the unix epoch degrades to 0 instead of failing creation.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
