//! Task Repository
//!
//! Loads and saves the whole task list as one JSON array under a fixed key.

use std::collections::HashSet;

use super::traits::KeyValueStore;
use crate::domain::{DomainResult, Entity, Task};

/// Persistence adapter for the task collection
#[derive(Debug, Clone)]
pub struct TaskRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted task list.
    ///
    /// Never fails: a missing key, unreadable store, invalid JSON or a value
    /// that is not an array of tasks all yield an empty list.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("[REPO] Could not read '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        let tasks: Vec<Task> = match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("[REPO] Discarding unreadable data under '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        // Titles are never stored blank
        let total = tasks.len();
        let tasks: Vec<Task> = tasks.into_iter().filter(|t| !t.title.trim().is_empty()).collect();
        if tasks.len() != total {
            log::warn!("[REPO] Dropped {} tasks with blank titles", total - tasks.len());
        }

        // Keep the first occurrence of each id
        let mut seen = HashSet::new();
        let total = tasks.len();
        let tasks: Vec<Task> = tasks.into_iter().filter(|t| seen.insert(t.id())).collect();
        if tasks.len() != total {
            log::warn!("[REPO] Dropped {} tasks with duplicate ids", total - tasks.len());
        }

        log::debug!("[REPO] Loaded {} tasks", tasks.len());
        tasks
    }

    /// Overwrite the persisted list with `tasks`
    pub fn save(&mut self, tasks: &[Task]) -> DomainResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.store.set(&self.key, &json)
    }
}
