//! Task Board Core
//!
//! Layered the same way as any board backend:
//! - domain: tasks, statuses and errors
//! - repository: key-value persistence of the task list
//! - drag / views / board: the collection manager and its derived state

pub mod board;
pub mod clock;
pub mod config;
pub mod domain;
pub mod drag;
pub mod repository;
pub mod views;

pub use board::TaskBoard;
pub use clock::{Clock, SystemClock};
pub use config::{BoardConfig, DEFAULT_STORAGE_KEY};
pub use domain::{DomainError, DomainResult, Entity, Task, TaskId, TaskStatus};
pub use drag::{DragSession, DragSource};
pub use repository::{KeyValueStore, MemoryStore, TaskRepository};
pub use views::{compute_views, BoardViews};
