//! Drag Session Tracker
//!
//! Two-state machine for an in-progress drag gesture. The source's status
//! is captured at drag start and never re-read, so a status change made
//! mid-drag does not alter how the pending drop is resolved.
//!
//! There is no cancel transition: a drag abandoned without a drop stays
//! active until the next drop anywhere, or until another drag starts.

use crate::domain::{TaskId, TaskStatus};

/// Task being dragged and its status when the drag began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSource {
    pub task_id: TaskId,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(DragSource),
}

impl DragSession {
    /// Begin a drag, replacing any session already active
    pub fn start(&mut self, task_id: TaskId, status: TaskStatus) {
        *self = DragSession::Dragging(DragSource { task_id, status });
    }

    /// Consume the session, leaving it idle
    pub fn take(&mut self) -> Option<DragSource> {
        match std::mem::take(self) {
            DragSession::Idle => None,
            DragSession::Dragging(source) => Some(source),
        }
    }

    pub fn source(&self) -> Option<DragSource> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging(source) => Some(*source),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let session = DragSession::default();
        assert!(!session.is_dragging());
        assert_eq!(session.source(), None);
    }

    #[test]
    fn test_start_and_take() {
        let mut session = DragSession::default();
        session.start(3, TaskStatus::InProgress);
        assert!(session.is_dragging());

        let source = session.take();
        assert_eq!(source, Some(DragSource { task_id: 3, status: TaskStatus::InProgress }));
        assert_eq!(session, DragSession::Idle);
        assert_eq!(session.take(), None);
    }

    #[test]
    fn test_restart_replaces_source() {
        let mut session = DragSession::default();
        session.start(1, TaskStatus::Todo);
        session.start(2, TaskStatus::Completed);
        assert_eq!(session.source().map(|s| s.task_id), Some(2));
    }
}
