//! Task list store.
//!
//! # Responsibility
//! - Own the ordered task collection and every mutation applied to it.
//! - Derive the projections the presentation layer renders from.
//! - Notify subscribed observers after each effective mutation.
//!
//! # Invariants
//! - The newest task always occupies index 0.
//! - Removals preserve the relative order of the remaining tasks.
//! - Blank titles and unknown ids are silent no-ops; no command fails.
//! - Observers hear exactly one notification per effective mutation and
//!   none for no-ops.
//!
//! # See also
//! - `crate::model::task` for the record shape.

use crate::model::task::{Task, TaskId};
use log::{debug, info};

/// Change notification delivered to store observers.
///
/// Carries metadata only (ids and counts); observers re-read the list
/// through the store's queries to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// A task was prepended at index 0.
    TaskAdded(TaskId),
    /// A task's completion flag flipped.
    TaskToggled(TaskId),
    /// A task was removed.
    TaskDeleted(TaskId),
    /// Every completed task was removed.
    CompletedCleared { removed: usize },
    /// The whole list was emptied.
    AllCleared { removed: usize },
}

/// Observer callback invoked synchronously after each effective mutation.
pub type ChangeListener = Box<dyn FnMut(ListChange) + Send>;

/// Sole authority over task data.
///
/// The presentation layer never mutates tasks directly; it forwards user
/// intents into these commands and re-renders from the queries when a
/// `ListChange` arrives.
#[derive(Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    listeners: Vec<ChangeListener>,
}

impl TaskListStore {
    /// Creates an empty store with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task at index 0 (newest first).
    ///
    /// # Contract
    /// - Input that trims to an empty string is a silent no-op.
    /// - Accepted titles are stored verbatim, untrimmed.
    /// - Observers receive `ListChange::TaskAdded` on success.
    pub fn add_task(&mut self, title: impl Into<String>) {
        let title = title.into();
        if title.trim().is_empty() {
            debug!("event=task_add_rejected module=store status=noop reason=blank_title");
            return;
        }

        let task = Task::new(title);
        let id = task.id;
        self.tasks.insert(0, task);
        info!(
            "event=task_added module=store status=ok id={} total={}",
            id,
            self.tasks.len()
        );
        self.notify(ListChange::TaskAdded(id));
    }

    /// Flips `is_completed` on the task with a matching id.
    ///
    /// # Contract
    /// - Unknown ids are a silent no-op, treated as a benign race between
    ///   a removal and a queued user action.
    pub fn toggle_completion(&mut self, id: TaskId) {
        let completed = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .map(|task| {
                task.toggle();
                task.is_completed
            });

        match completed {
            Some(completed) => {
                debug!(
                    "event=task_toggled module=store status=ok id={} completed={}",
                    id, completed
                );
                self.notify(ListChange::TaskToggled(id));
            }
            None => {
                debug!("event=task_toggle_missed module=store status=noop id={}", id);
            }
        }
    }

    /// Removes the task with a matching id, keeping the rest in order.
    ///
    /// # Contract
    /// - Unknown ids are a silent no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete_missed module=store status=noop id={}", id);
            return;
        }

        info!(
            "event=task_deleted module=store status=ok id={} total={}",
            id,
            self.tasks.len()
        );
        self.notify(ListChange::TaskDeleted(id));
    }

    /// Removes every completed task, keeping the remainder in order.
    ///
    /// Completed and open tasks stay interleaved by creation order until
    /// this runs; no secondary sort is ever applied.
    pub fn clear_completed(&mut self) {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed);
        let removed = before - self.tasks.len();
        if removed == 0 {
            debug!("event=completed_cleared module=store status=noop removed=0");
            return;
        }

        info!(
            "event=completed_cleared module=store status=ok removed={} total={}",
            removed,
            self.tasks.len()
        );
        self.notify(ListChange::CompletedCleared { removed });
    }

    /// Empties the list unconditionally.
    pub fn clear_all(&mut self) {
        let removed = self.tasks.len();
        if removed == 0 {
            debug!("event=all_cleared module=store status=noop removed=0");
            return;
        }

        self.tasks.clear();
        info!("event=all_cleared module=store status=ok removed={}", removed);
        self.notify(ListChange::AllCleared { removed });
    }

    /// Returns whether the list holds zero tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the ordered task sequence, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Registers an observer for subsequent effective mutations.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, change: ListChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}
