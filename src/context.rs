//! Application Context
//!
//! The operations the UI may perform on the shared store, provided via
//! the Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tracing::{debug, info};

use crate::list::AddOutcome;
use crate::models::ThemeMode;
use crate::notify::{add_feedback, remove_feedback, FADE_DELAY_MS, REMOVE_DELAY_MS};
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Add a product from raw input. Returns true when the input should be cleared.
    pub fn add_product(&self, raw_name: &str) -> bool {
        let outcome = self.store.list().write().add(raw_name);
        if let AddOutcome::Added(name) = &outcome {
            info!(%name, "product added");
        }
        let feedback = add_feedback(&outcome);
        if let Some(message) = feedback.message {
            self.notify(message);
        }
        feedback.clear_input
    }

    pub fn remove_product(&self, index: usize) {
        let removed = self.store.list().write().remove(index);
        info!(name = %removed.name, "product removed");
        self.notify(remove_feedback(&removed));
    }

    pub fn toggle_product(&self, index: usize) {
        self.store.list().write().toggle(index);
    }

    /// Advance light → dark → system
    pub fn cycle_theme(&self) -> ThemeMode {
        let mode = self.store.theme().write().cycle();
        info!(mode = mode.as_str(), "theme mode changed");
        mode
    }

    /// Feed a new OS color-scheme value into the theme.
    ///
    /// Subscribers are only notified when the effective theme changes.
    pub fn set_system_dark(&self, dark: bool) {
        let theme = self.store.theme();
        let changed = theme.write_untracked().set_system_dark(dark);
        if changed {
            debug!(dark, "OS color scheme changed the effective theme");
            theme.notify();
        }
    }

    /// Show a toast; it fades and disappears on its own timers
    pub fn notify(&self, message: &str) {
        let store = self.store;
        let id = store.toasts().write().push(message);

        Timeout::new(FADE_DELAY_MS, move || {
            store.toasts().write().begin_fade(id);
            Timeout::new(REMOVE_DELAY_MS, move || {
                store.toasts().write().remove(id);
            })
            .forget();
        })
        .forget();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
