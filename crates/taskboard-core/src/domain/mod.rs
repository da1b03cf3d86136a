//! Domain Layer
//!
//! Task entities and the error type shared by every layer above.
//! Depends on nothing but serde and thiserror.

mod entity;
mod task;

pub use entity::{DomainError, DomainResult, Entity};
pub use task::{Task, TaskId, TaskStatus};
