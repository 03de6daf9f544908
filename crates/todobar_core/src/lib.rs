//! Core domain logic for ToDoBar.
//! This crate is the single source of truth for task-list invariants.

pub mod gesture;
pub mod logging;
pub mod model;
pub mod store;

pub use gesture::swipe::{
    DragPhase, SwipeDeleteInterpreter, SwipeFrame, SwipeState, SWIPE_DAMPING_DIVISOR,
    SWIPE_DELETE_THRESHOLD,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Task, TaskId};
pub use store::task_list::{ChangeListener, ListChange, TaskListStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
