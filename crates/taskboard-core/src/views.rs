//! Derived Views
//!
//! Status columns computed from the canonical task list and the current
//! filter query. Never stored, always recomputed.

use crate::domain::{Task, TaskStatus};

/// The three status partitions, each in collection order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViews {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

impl BoardViews {
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Number of tasks across all columns
    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.completed.len()
    }
}

/// Partition `tasks` by status, keeping only titles containing `query`
/// (case-insensitive, whitespace included). An empty query keeps everything.
pub fn compute_views(tasks: &[Task], query: &str) -> BoardViews {
    let needle = query.to_lowercase();
    let mut views = BoardViews::default();

    for task in tasks.iter().filter(|t| t.matches_query(&needle)) {
        let column = match task.status {
            TaskStatus::Todo => &mut views.todo,
            TaskStatus::InProgress => &mut views.in_progress,
            TaskStatus::Completed => &mut views.completed,
        };
        column.push(task.clone());
    }

    views
}
