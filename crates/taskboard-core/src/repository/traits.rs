//! Repository Layer - Core Traits
//!
//! Abstract string store the task list is written to.
//! Implementations can use browser local storage, memory, etc.

use crate::domain::DomainResult;

/// String-keyed, string-valued store
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;
}
