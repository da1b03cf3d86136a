//! Search Bar Component
//!
//! Edits the session's title filter.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let has_query = move || !store.filter_query().get().is_empty();

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search tasks..."
                prop:value=move || store.filter_query().get()
                on:input=move |ev| store.filter_query().set(event_target_value(&ev))
            />
            <Show when=has_query>
                <button type="button" class="clear-btn" on:click=move |_| store.filter_query().set(String::new())>
                    "×"
                </button>
            </Show>
        </div>
    }
}
