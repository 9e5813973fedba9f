//! Offline Support
//!
//! Registers the cache-first service worker shipped in `public/sw.js`.

use leptos::task::spawn_local;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Register the worker in the background. Failure only disables offline mode.
pub fn register_service_worker(script_url: &'static str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register(script_url);

    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(value) => {
                let scope = value
                    .dyn_into::<web_sys::ServiceWorkerRegistration>()
                    .map(|reg| reg.scope())
                    .unwrap_or_default();
                info!(%scope, "service worker registered");
            }
            Err(e) => warn!(error = ?e, "service worker registration failed"),
        }
    });
}
