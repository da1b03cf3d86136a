//! New Task Form Component

use leptos::prelude::*;

use crate::store::{store_add_task, use_app_store};

/// Title input with an add button. Enter submits.
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let (draft, set_draft) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_task(&store, &draft.get()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Enter new task..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
