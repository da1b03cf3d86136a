//! Task Entity
//!
//! A single card on the board: id, title and the column it sits in.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Task identifier, assigned from a millisecond timestamp
pub type TaskId = u64;

/// Column a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Newly created, not started
    #[default]
    Todo,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl TaskStatus {
    /// All statuses in column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "New Task",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Status the card's forward button moves to, if any
    pub fn next(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Todo => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Completed),
            TaskStatus::Completed => None,
        }
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Current column
    pub status: TaskStatus,
}

impl Task {
    /// Create a new task in the todo column
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::Todo,
        }
    }

    /// Case-insensitive substring match on the title.
    /// `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(query)
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
