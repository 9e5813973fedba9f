#![allow(warnings)]
//! Shopping List Frontend Entry Point

mod config;
mod models;
mod storage;
mod list;
mod theme;
mod notify;
mod store;
mod context;
mod pwa;
mod components;
mod app;

use std::sync::Arc;

use app::App;
use leptos::prelude::*;
use leptos_color_scheme::{ColorSchemeSource, MediaQuerySource};
use storage::{BrowserStorage, KeyValueStore};
use store::AppState;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(config::logger_config()) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    let storage: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);
    let state = AppState::load(storage, MediaQuerySource::new().prefers_dark());

    // Before mount, so the first paint already has the right theme
    theme::apply_to_document(state.theme.is_dark());
    info!(
        products = state.list.len(),
        mode = state.theme.mode().as_str(),
        "starting shopping list"
    );

    pwa::register_service_worker(config::SERVICE_WORKER_URL);
    mount_to_body(move || view! { <App state=state /> });
}
