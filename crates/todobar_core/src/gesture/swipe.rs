//! Swipe-to-delete gesture interpreter.
//!
//! # Responsibility
//! - Reduce per-row horizontal drag input into a visual offset and a
//!   discrete delete decision.
//! - Commit that decision through the task list store when a drag ends.
//!
//! # Invariants
//! - Rows reduce independently; no cross-row state exists.
//! - Only leftward motion moves a row; rightward deltas change nothing.
//! - A released drag commits deletion only when its displacement ends
//!   strictly beyond the threshold.
//!
//! # See also
//! - `crate::store::task_list` for the delete command this feeds.

use crate::model::task::TaskId;
use crate::store::task_list::TaskListStore;
use log::debug;
use std::collections::HashMap;

/// Leftward displacement beyond which (strictly) a released drag commits.
pub const SWIPE_DELETE_THRESHOLD: f64 = -75.0;

/// Divisor applied to leftward deltas for the damped-follow offset.
pub const SWIPE_DAMPING_DIVISOR: f64 = 2.0;

/// Phase of one drag event.
///
/// `delta_x` for both phases is the total horizontal translation since the
/// drag began, matching how pointer frameworks report drag gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Pointer moved while the interaction is still in progress.
    Changed,
    /// Pointer interaction finished; decide commit or cancel.
    Ended,
}

/// Reducer output consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeFrame {
    /// Horizontal offset the row should render at.
    pub offset: f64,
    /// Whether the delete affordance behind the row is revealed.
    pub affordance_visible: bool,
    /// Whether an ended drag committed to deletion.
    pub should_delete: bool,
}

impl SwipeFrame {
    /// Frame for a row with no active drag.
    pub const IDLE: SwipeFrame = SwipeFrame {
        offset: 0.0,
        affordance_visible: false,
        should_delete: false,
    };
}

/// Pure per-row reducer state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeState {
    offset: f64,
    dragging: bool,
}

impl SwipeState {
    /// Applies one drag event and returns the frame to render.
    pub fn apply(&mut self, delta_x: f64, phase: DragPhase) -> SwipeFrame {
        match phase {
            DragPhase::Changed => {
                // Rightward motion is ignored wholesale so a row can never
                // be dragged off to the right.
                if delta_x < 0.0 {
                    self.offset = delta_x / SWIPE_DAMPING_DIVISOR;
                    self.dragging = true;
                }
                self.frame()
            }
            DragPhase::Ended => {
                let commit = delta_x < SWIPE_DELETE_THRESHOLD;
                *self = Self::default();
                SwipeFrame {
                    should_delete: commit,
                    ..SwipeFrame::IDLE
                }
            }
        }
    }

    /// Current frame without applying an event.
    pub fn frame(&self) -> SwipeFrame {
        SwipeFrame {
            offset: self.offset,
            affordance_visible: self.dragging,
            should_delete: false,
        }
    }

    /// Returns whether this row has no active drag.
    pub fn is_idle(&self) -> bool {
        !self.dragging
    }
}

/// Tracks live swipe state per row and commits delete decisions.
///
/// Holds entries only for rows with a drag in flight; querying any other
/// row yields the idle frame. Ending a drag on an id the store no longer
/// holds falls through to the store's silent no-op delete.
#[derive(Default)]
pub struct SwipeDeleteInterpreter {
    rows: HashMap<TaskId, SwipeState>,
}

impl SwipeDeleteInterpreter {
    /// Creates an interpreter with no drags in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an in-progress drag update for one row.
    pub fn drag_changed(&mut self, id: TaskId, delta_x: f64) -> SwipeFrame {
        let state = self.rows.entry(id).or_default();
        let frame = state.apply(delta_x, DragPhase::Changed);
        // Rightward-only input never leaves idle; drop the entry again so
        // the map holds live drags only.
        if state.is_idle() {
            self.rows.remove(&id);
        }
        frame
    }

    /// Ends the drag on one row, deleting the task when the displacement
    /// crossed the threshold.
    pub fn drag_ended(
        &mut self,
        id: TaskId,
        delta_x: f64,
        store: &mut TaskListStore,
    ) -> SwipeFrame {
        let mut state = self.rows.remove(&id).unwrap_or_default();
        let frame = state.apply(delta_x, DragPhase::Ended);
        if frame.should_delete {
            debug!(
                "event=swipe_ended module=gesture status=commit id={} displacement={}",
                id, delta_x
            );
            store.delete_task(id);
        } else {
            debug!(
                "event=swipe_ended module=gesture status=cancel id={} displacement={}",
                id, delta_x
            );
        }
        frame
    }

    /// Frame the presentation layer should render for one row right now.
    pub fn row_frame(&self, id: TaskId) -> SwipeFrame {
        self.rows.get(&id).map_or(SwipeFrame::IDLE, SwipeState::frame)
    }

    /// Number of rows with a drag in flight.
    pub fn active_rows(&self) -> usize {
        self.rows.len()
    }
}
