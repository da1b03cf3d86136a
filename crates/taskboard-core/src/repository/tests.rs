//! Repository Tests
//!
//! TaskRepository against MemoryStore and a store that always fails.

use super::{KeyValueStore, MemoryStore, TaskRepository};
use crate::domain::{DomainError, DomainResult, Task, TaskStatus};

const KEY: &str = "tasks";

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> DomainResult<Option<String>> {
        Err(DomainError::Storage("access denied".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> DomainResult<()> {
        Err(DomainError::Storage("quota exceeded".to_string()))
    }
}

fn repo_with(raw: &str) -> TaskRepository<MemoryStore> {
    TaskRepository::new(MemoryStore::with_entry(KEY, raw), KEY)
}

#[test]
fn test_load_absent_key() {
    let repo = TaskRepository::new(MemoryStore::new(), KEY);
    assert!(repo.load().is_empty());
}

#[test]
fn test_load_invalid_values() {
    for raw in ["", "   ", "not json", "{\"id\":1}", "42", "null", "\"tasks\"", "[{\"id\":1}]"] {
        assert!(repo_with(raw).load().is_empty(), "expected empty for {raw:?}");
    }
}

#[test]
fn test_load_unknown_status_is_empty() {
    let repo = repo_with(r#"[{"id":1,"title":"A","status":"archived"}]"#);
    assert!(repo.load().is_empty());
}

#[test]
fn test_load_unreadable_store() {
    let repo = TaskRepository::new(BrokenStore, KEY);
    assert!(repo.load().is_empty());
}

#[test]
fn test_save_then_load() {
    let mut repo = TaskRepository::new(MemoryStore::new(), KEY);
    let mut done = Task::new(2, "Walk dog");
    done.status = TaskStatus::Completed;
    let tasks = vec![Task::new(1, "Buy milk"), done];

    repo.save(&tasks).expect("save failed");
    assert_eq!(repo.load(), tasks);
}

#[test]
fn test_save_empty_list() {
    let mut repo = TaskRepository::new(MemoryStore::new(), KEY);
    repo.save(&[]).expect("save failed");
    assert_eq!(repo.store().raw(KEY), Some("[]"));
    assert!(repo.load().is_empty());
}

#[test]
fn test_stored_layout() {
    let mut repo = TaskRepository::new(MemoryStore::new(), KEY);
    let mut task = Task::new(5, "Call mom");
    task.status = TaskStatus::InProgress;
    repo.save(&[task]).expect("save failed");

    assert_eq!(
        repo.store().raw(KEY),
        Some(r#"[{"id":5,"title":"Call mom","status":"inprogress"}]"#)
    );
}

#[test]
fn test_save_overwrites() {
    let mut repo = TaskRepository::new(MemoryStore::new(), KEY);
    repo.save(&[Task::new(1, "A"), Task::new(2, "B")]).expect("save failed");
    repo.save(&[Task::new(3, "C")]).expect("save failed");
    assert_eq!(repo.load(), vec![Task::new(3, "C")]);
}

#[test]
fn test_load_drops_duplicate_ids() {
    let repo = repo_with(
        r#"[{"id":1,"title":"A","status":"todo"},{"id":1,"title":"B","status":"todo"},{"id":2,"title":"C","status":"todo"}]"#,
    );
    let tasks = repo.load();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "A");
    assert_eq!(tasks[1].id, 2);
}

#[test]
fn test_save_failure_reported() {
    let mut repo = TaskRepository::new(BrokenStore, KEY);
    let result = repo.save(&[Task::new(1, "A")]);
    assert_eq!(result, Err(DomainError::Storage("quota exceeded".to_string())));
}

#[test]
fn test_load_drops_blank_titles() {
    let mut repo = repo_with(
        r#"[{"id":1,"title":"   ","status":"todo"},{"id":2,"title":"","status":"completed"},{"id":3,"title":"Keep","status":"todo"}]"#,
    );
    let tasks = repo.load();
    assert_eq!(tasks, vec![Task::new(3, "Keep")]);

    repo.save(&tasks).expect("save failed");
    assert_eq!(repo.store().raw(KEY), Some(r#"[{"id":3,"title":"Keep","status":"todo"}]"#));
}

#[test]
fn test_save_then_load_mixed_statuses() {
    let mut repo = TaskRepository::new(MemoryStore::new(), KEY);
    let tasks = vec![
        Task { id: u64::MAX, title: "Last".to_string(), status: TaskStatus::Completed },
        Task { id: 0, title: "First".to_string(), status: TaskStatus::InProgress },
        Task { id: u64::MAX - 1, title: "Ünïcode \"quoted\"".to_string(), status: TaskStatus::Todo },
        Task { id: 1_700_000_000_000, title: "Timestamp".to_string(), status: TaskStatus::InProgress },
        Task { id: 2, title: "Done".to_string(), status: TaskStatus::Completed },
    ];

    repo.save(&tasks).expect("save failed");
    assert_eq!(repo.load(), tasks);
}
