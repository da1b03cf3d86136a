//! Repository Layer
//!
//! Persistence of the task list through a narrow key-value contract.

mod memory;
mod task_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use task_repo::TaskRepository;
pub use traits::KeyValueStore;
