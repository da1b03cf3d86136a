//! Task Collection Manager
//!
//! Owns the canonical ordered task list and the drag session. Every
//! operation is total: unknown ids, blank titles and drops without a drag
//! are silent no-ops. Each mutation is written through to the repository
//! before returning.

use crate::clock::Clock;
use crate::config::BoardConfig;
use crate::domain::{Entity, Task, TaskId, TaskStatus};
use crate::drag::DragSession;
use crate::repository::{KeyValueStore, TaskRepository};
use crate::views::{compute_views, BoardViews};

pub struct TaskBoard<S, C> {
    tasks: Vec<Task>,
    drag: DragSession,
    repo: TaskRepository<S>,
    clock: C,
    /// Highest id handed out or loaded so far
    last_id: TaskId,
}

impl<S: KeyValueStore, C: Clock> TaskBoard<S, C> {
    /// Initialize from whatever is persisted under the configured key.
    /// Missing or corrupt data starts an empty board.
    pub fn load(store: S, clock: C, config: &BoardConfig) -> Self {
        let repo = TaskRepository::new(store, config.storage_key.clone());
        let tasks = repo.load();
        let last_id = tasks.iter().map(Entity::id).max().unwrap_or(0);
        log::info!("[BOARD] Initialized with {} tasks", tasks.len());

        Self {
            tasks,
            drag: DragSession::Idle,
            repo,
            clock,
            last_id,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Number of tasks in a status column, ignoring any filter
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    pub fn drag_session(&self) -> DragSession {
        self.drag
    }

    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repo
    }

    /// Status columns filtered by `query`
    pub fn views(&self, query: &str) -> BoardViews {
        compute_views(&self.tasks, query)
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new todo task. Returns its id, or `None` when the trimmed
    /// title is empty.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = self.next_id();
        self.tasks.push(Task::new(id, title));
        log::debug!("[BOARD] Added task {}", id);
        self.persist();
        Some(id)
    }

    /// Change a task's status in place, keeping its position in the list
    pub fn move_task(&mut self, id: TaskId, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            return false;
        };

        task.status = status;
        log::debug!("[BOARD] Moved task {} to {}", id, status.as_str());
        self.persist();
        true
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.tasks.remove(index);
        log::debug!("[BOARD] Deleted task {}", id);
        self.persist();
        true
    }

    /// Record the start of a drag. The task's current status is captured
    /// and used when the drop is resolved.
    pub fn start_drag(&mut self, id: TaskId) {
        match self.get(id) {
            Some(task) => {
                let status = task.status;
                self.drag.start(id, status);
                log::debug!("[DND] Drag start: task={}, status={}", id, status.as_str());
            }
            None => log::debug!("[DND] Ignoring drag start for unknown task {}", id),
        }
    }

    /// Resolve a drop of `source_id` onto the card `target_id`.
    ///
    /// Requires an active drag of `source_id`. When the status captured at
    /// drag start differs from the target's, the source takes the target's
    /// status and goes to the end of that column. Otherwise it is placed
    /// immediately before the target. The drag session is always cleared.
    pub fn reorder_or_transfer(&mut self, source_id: TaskId, target_id: TaskId) -> bool {
        let Some(source) = self.drag.take().filter(|s| s.task_id == source_id) else {
            return false;
        };
        if source_id == target_id {
            return false;
        }
        let (Some(source_index), Some(target_index)) = (self.position(source_id), self.position(target_id)) else {
            return false;
        };

        let target_status = self.tasks[target_index].status;
        if source.status != target_status {
            self.send_to_end(source_index, target_status);
            log::debug!("[DND] Transferred task {} to {}", source_id, target_status.as_str());
        } else {
            let mut task = self.tasks.remove(source_index);
            task.status = target_status;
            // Removal shifts the target left when the source preceded it
            let insert_at = if source_index < target_index { target_index - 1 } else { target_index };
            self.tasks.insert(insert_at, task);
            log::debug!("[DND] Placed task {} before {}", source_id, target_id);
        }

        self.persist();
        true
    }

    /// Drop the dragged task onto another card
    pub fn drop_on_card(&mut self, target_id: TaskId) -> bool {
        match self.drag.source() {
            Some(source) => self.reorder_or_transfer(source.task_id, target_id),
            None => false,
        }
    }

    /// Drop the dragged task onto a column's empty area. The task takes the
    /// column's status and goes to the end of it.
    pub fn drop_on_column(&mut self, status: TaskStatus) -> bool {
        let Some(source) = self.drag.take() else {
            return false;
        };
        let Some(index) = self.position(source.task_id) else {
            return false;
        };

        self.send_to_end(index, status);
        log::debug!("[DND] Dropped task {} on column {}", source.task_id, status.as_str());
        self.persist();
        true
    }

    // ========================
    // Internals
    // ========================

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    /// Relocate the task at `index` to the end of the list with `status`,
    /// making it the last task of that column.
    fn send_to_end(&mut self, index: usize, status: TaskStatus) {
        let mut task = self.tasks.remove(index);
        task.status = status;
        self.tasks.push(task);
    }

    /// Millisecond timestamp, bumped past the last id when the clock has
    /// not advanced.
    fn next_id(&mut self) -> TaskId {
        let id = self.clock.now_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    /// Save failures leave the in-memory list authoritative
    fn persist(&mut self) {
        if let Err(e) = self.repo.save(&self.tasks) {
            log::warn!("[BOARD] Task list not saved, keeping changes in memory: {}", e);
        }
    }
}
