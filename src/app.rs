//! Task Board App
//!
//! Main application component: add form, search, three status columns.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_core::{BoardConfig, BoardViews, TaskStatus};

use crate::components::{NewTaskForm, SearchBar, StatusColumn};
use crate::context::DndContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(&BoardConfig::default()));

    // Provide context to all children
    provide_context(store);
    provide_context(DndContext::new(store));

    // Columns are always derived from the board and the current query
    let views = Memo::new(move |_| -> BoardViews {
        let query = store.filter_query().get();
        store.board().read().views(&query)
    });

    view! {
        <div class="board-app">
            <h1>"ToDo Board"</h1>

            <NewTaskForm />
            <SearchBar />

            <div class="board-columns">
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| view! { <StatusColumn status=status views=views /> })
                    .collect_view()}
            </div>

            <p class="task-count">
                {move || {
                    let total = store.board().read().len();
                    let shown = views.with(|v| v.total());
                    if shown == total {
                        format!("{} tasks", total)
                    } else {
                        format!("{} of {} tasks shown", shown, total)
                    }
                }}
            </p>
        </div>
    }
}
