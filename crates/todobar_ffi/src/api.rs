//! FFI use-case API for shell-facing calls.
//!
//! # Responsibility
//! - Expose the task-list commands and projections to the UI shell via FRB.
//! - Hold the process-global store + gesture state behind one lock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Unknown or unparseable task ids degrade to silent no-ops.
//! - Every returned snapshot is computed under the state lock, so it
//!   reflects exactly the mutation that produced it.

use log::debug;
use std::sync::{Mutex, MutexGuard, OnceLock};
use todobar_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SwipeDeleteInterpreter, SwipeFrame, Task, TaskId, TaskListStore,
};
use uuid::Uuid;

static APP_STATE: OnceLock<Mutex<TodoApp>> = OnceLock::new();

struct TodoApp {
    store: TaskListStore,
    swipe: SwipeDeleteInterpreter,
}

impl TodoApp {
    fn new() -> Self {
        Self {
            store: TaskListStore::new(),
            swipe: SwipeDeleteInterpreter::new(),
        }
    }
}

fn app() -> MutexGuard<'static, TodoApp> {
    let state = APP_STATE.get_or_init(|| Mutex::new(TodoApp::new()));
    // Why: a poisoned lock only records that some shell call panicked; the
    // store itself is still structurally sound, and recovering it keeps the
    // no-panic FFI contract.
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Response envelope for the logging bootstrap call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitResponse {
    /// Whether logging is active after the call.
    pub ok: bool,
    /// Human-readable diagnostic message; empty on success.
    pub message: String,
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive);
///   `None` selects the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with a different level or directory fail.
/// - Never panics; failures are reported through the envelope message.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: Option<String>, log_dir: String) -> InitResponse {
    let level = level.unwrap_or_else(|| todobar_core::default_log_level().to_string());
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => InitResponse {
            ok: true,
            message: String::new(),
        },
        Err(err) => InitResponse {
            ok: false,
            message: err.to_string(),
        },
    }
}

/// One rendered task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowView {
    /// Stable task ID in string form.
    pub id: String,
    /// Display title exactly as entered.
    pub title: String,
    /// Completion flag driving checkbox/strikethrough state.
    pub is_completed: bool,
}

/// Renderable snapshot of the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    /// Ordered rows, newest first.
    pub tasks: Vec<TaskRowView>,
    /// Drives the empty-state vs list-state display branch.
    pub is_empty: bool,
}

/// Per-row swipe feedback snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSwipeView {
    /// Horizontal offset the row should render at.
    pub offset: f64,
    /// Whether the delete affordance behind the row is revealed.
    pub affordance_visible: bool,
}

/// Outcome of a finished drag.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeEndView {
    /// Offset to render; always 0 after an ended drag.
    pub offset: f64,
    /// Affordance visibility; always hidden after an ended drag.
    pub affordance_visible: bool,
    /// Whether the drag committed and the row was deleted.
    pub deleted: bool,
    /// List snapshot after any committed deletion.
    pub list: TaskListView,
}

/// Returns the current renderable list snapshot.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; always returns a well-formed snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> TaskListView {
    snapshot(&app().store)
}

/// Adds a task at the top of the list.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Blank titles are a silent no-op; the returned snapshot is unchanged.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(title: String) -> TaskListView {
    let mut app = app();
    app.store.add_task(title);
    snapshot(&app.store)
}

/// Toggles completion on one task.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown or unparseable ids are a silent no-op.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(task_id: String) -> TaskListView {
    let mut app = app();
    if let Some(id) = parse_task_id(&task_id) {
        app.store.toggle_completion(id);
    }
    snapshot(&app.store)
}

/// Deletes one task, preserving the order of the remainder.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown or unparseable ids are a silent no-op.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_task(task_id: String) -> TaskListView {
    let mut app = app();
    if let Some(id) = parse_task_id(&task_id) {
        app.store.delete_task(id);
    }
    snapshot(&app.store)
}

/// Removes every completed task.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_completed() -> TaskListView {
    let mut app = app();
    app.store.clear_completed();
    snapshot(&app.store)
}

/// Empties the list unconditionally.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_all() -> TaskListView {
    let mut app = app();
    app.store.clear_all();
    snapshot(&app.store)
}

/// Applies an in-progress drag update for one row.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - `delta_x` is the total translation since the drag began.
/// - Unparseable ids yield the idle frame.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_changed(task_id: String, delta_x: f64) -> RowSwipeView {
    let mut app = app();
    match parse_task_id(&task_id) {
        Some(id) => to_row_swipe(app.swipe.drag_changed(id, delta_x)),
        None => to_row_swipe(SwipeFrame::IDLE),
    }
}

/// Ends the drag on one row, deleting the task when the displacement
/// crossed the threshold.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - `delta_x` is the total translation since the drag began.
/// - Stale ids fall through to the store's silent no-op delete.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_ended(task_id: String, delta_x: f64) -> SwipeEndView {
    let mut app = app();
    let frame = match parse_task_id(&task_id) {
        Some(id) => {
            let TodoApp { store, swipe } = &mut *app;
            swipe.drag_ended(id, delta_x, store)
        }
        None => SwipeFrame::IDLE,
    };
    SwipeEndView {
        offset: frame.offset,
        affordance_visible: frame.affordance_visible,
        deleted: frame.should_delete,
        list: snapshot(&app.store),
    }
}

/// Returns the swipe feedback to render for one row right now.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Rows without a live drag (and unparseable ids) yield the idle frame.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn row_swipe(task_id: String) -> RowSwipeView {
    let app = app();
    match parse_task_id(&task_id) {
        Some(id) => to_row_swipe(app.swipe.row_frame(id)),
        None => to_row_swipe(SwipeFrame::IDLE),
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            // The raw string is user-adjacent data; log the miss, not the value.
            debug!("event=task_id_unparseable module=ffi status=noop");
            None
        }
    }
}

fn snapshot(store: &TaskListStore) -> TaskListView {
    let tasks = store.tasks().iter().map(to_task_row).collect::<Vec<_>>();
    TaskListView {
        is_empty: tasks.is_empty(),
        tasks,
    }
}

fn to_task_row(task: &Task) -> TaskRowView {
    TaskRowView {
        id: task.id.to_string(),
        title: task.title.clone(),
        is_completed: task.is_completed,
    }
}

fn to_row_swipe(frame: SwipeFrame) -> RowSwipeView {
    RowSwipeView {
        offset: frame.offset,
        affordance_visible: frame.affordance_visible,
    }
}
