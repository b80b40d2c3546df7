//! Task Board Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod datetime;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting task board frontend");

    mount_to_body(App);
}
