//! Status Column Component
//!
//! One column of the board. The column area is a drop zone; each card in
//! it is a drop target of its own.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop, DropTarget};
use taskboard_core::{BoardViews, TaskStatus};

use crate::components::TaskCard;
use crate::context::use_dnd_context;

#[component]
pub fn StatusColumn(status: TaskStatus, views: Memo<BoardViews>) -> impl IntoView {
    let ctx = use_dnd_context();
    let zone = DropTarget::Zone(status);

    let column_tasks = move || views.with(|v| v.column(status).to_vec());
    let column_len = move || views.with(|v| v.column(status).len());

    let column_class = move || {
        let mut c = format!("status-column {}", status.as_str());
        if ctx.dnd.is_hovered(zone) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <section
            class=column_class
            on:dragover=make_on_dragover(ctx.dnd, zone)
            on:dragleave=make_on_dragleave(ctx.dnd, zone)
            on:drop=make_on_drop(ctx.dnd, zone, ctx.on_drop)
        >
            <h3>
                {status.label()}
                <span class="column-count">{column_len}</span>
            </h3>

            <For
                each=column_tasks
                key=|task| (task.id, task.title.clone(), task.status)
                children=move |task| view! { <TaskCard task=task /> }
            />
        </section>
    }
}
