//! Drag-and-Drop Context
//!
//! Hover signals and drop callbacks shared by columns and cards.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals, DropTarget};
use taskboard_core::{TaskId, TaskStatus};

use crate::store::{AppStore, AppStateStoreFields};

/// Cards are items, columns are zones
pub type BoardDropTarget = DropTarget<TaskId, TaskStatus>;

#[derive(Clone, Copy)]
pub struct DndContext {
    pub dnd: DndSignals<TaskId, TaskStatus>,
    /// Drag started on a card
    pub on_drag_start: Callback<TaskId>,
    /// Drop landed on a card or a column
    pub on_drop: Callback<BoardDropTarget>,
}

impl DndContext {
    pub fn new(store: AppStore) -> Self {
        let on_drag_start = Callback::new(move |id: TaskId| {
            store.board().write().start_drag(id);
        });

        let on_drop = Callback::new(move |target: BoardDropTarget| {
            match target {
                DropTarget::Item(target_id) => {
                    log::debug!("[DND] Drop on card {}", target_id);
                    store.board().write().drop_on_card(target_id);
                }
                DropTarget::Zone(status) => {
                    log::debug!("[DND] Drop on column {}", status.as_str());
                    store.board().write().drop_on_column(status);
                }
            }
        });

        Self {
            dnd: create_dnd_signals(),
            on_drag_start,
            on_drop,
        }
    }
}

pub fn use_dnd_context() -> DndContext {
    expect_context::<DndContext>()
}
