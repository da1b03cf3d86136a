//! Task Board Frontend Entry Point

mod app;
mod clock;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(level);

    mount_to_body(App);
}
