//! Task Card Component
//!
//! Draggable card with status buttons and delete.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragleave, make_on_dragover, make_on_drop, make_on_dragstart, DropTarget};
use taskboard_core::{Task, TaskStatus};

use crate::context::use_dnd_context;
use crate::store::{store_delete_task, store_move_task, use_app_store, AppStateStoreFields};

/// Label and CSS class of the button that advances `status`, if it has one
fn advance_button(status: TaskStatus) -> Option<(&'static str, &'static str)> {
    match status {
        TaskStatus::Todo => Some(("Start", "btn-start")),
        TaskStatus::InProgress => Some(("Complete", "btn-done")),
        TaskStatus::Completed => None,
    }
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_dnd_context();

    let id = task.id;
    let target = DropTarget::Item(id);

    let is_dragging = move || {
        store.board().read().drag_session().source().map(|s| s.task_id) == Some(id)
    };

    let card_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() { c.push_str(" dragging"); }
        if ctx.dnd.is_hovered(target) { c.push_str(" drop-target"); }
        c
    };

    let advance = task.status.next().zip(advance_button(task.status)).map(|(next, (label, class))| {
        view! {
            <button class=class on:click=move |_| store_move_task(&store, id, next)>
                {label}
            </button>
        }
    });

    view! {
        <div
            class=card_class
            draggable="true"
            on:dragstart=make_on_dragstart(id, ctx.on_drag_start)
            on:dragend=make_on_dragend(ctx.dnd)
            on:dragover=make_on_dragover(ctx.dnd, target)
            on:dragleave=make_on_dragleave(ctx.dnd, target)
            on:drop=make_on_drop(ctx.dnd, target, ctx.on_drop)
        >
            <strong class="task-title">{task.title}</strong>

            <div class="task-actions">
                {advance}
                <button class="btn-delete" on:click=move |_| store_delete_task(&store, id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_button_per_status() {
        assert_eq!(advance_button(TaskStatus::Todo), Some(("Start", "btn-start")));
        assert_eq!(advance_button(TaskStatus::InProgress), Some(("Complete", "btn-done")));
        assert_eq!(advance_button(TaskStatus::Completed), None);
    }

    #[test]
    fn test_button_only_where_status_advances() {
        for status in TaskStatus::ALL {
            assert_eq!(advance_button(status).is_some(), status.next().is_some());
        }
    }
}
