//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_core::{BoardConfig, TaskBoard, TaskId, TaskStatus};

use crate::clock::JsClock;
use crate::storage::AppStorage;

pub type Board = TaskBoard<AppStorage, JsClock>;

/// Global application state with field-level reactivity
#[derive(Store)]
pub struct AppState {
    /// Canonical task list and drag session
    pub board: Board,
    /// Title filter, kept for this session only
    pub filter_query: String,
}

impl AppState {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            board: TaskBoard::load(AppStorage::detect(), JsClock, config),
            filter_query: String::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task; false when the title was blank
pub fn store_add_task(store: &AppStore, title: &str) -> bool {
    store.board().write().add_task(title).is_some()
}

pub fn store_move_task(store: &AppStore, id: TaskId, status: TaskStatus) {
    store.board().write().move_task(id, status);
}

pub fn store_delete_task(store: &AppStore, id: TaskId) {
    store.board().write().delete_task(id);
}
