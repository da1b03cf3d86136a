//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod search_bar;
mod status_column;
mod task_card;

pub use new_task_form::NewTaskForm;
pub use search_bar::SearchBar;
pub use status_column::StatusColumn;
pub use task_card::TaskCard;
