//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::sync::Arc;

use reactive_stores::Store;

use crate::list::ListStore;
use crate::notify::ToastQueue;
use crate::storage::KeyValueStore;
use crate::theme::ThemeController;

/// Application state with field-level reactivity
#[derive(Store)]
pub struct AppState {
    /// Products, mirrored to storage
    pub list: ListStore,
    /// Theme mode + OS preference, mirrored to storage
    pub theme: ThemeController,
    /// Visible notifications (not persisted)
    pub toasts: ToastQueue,
}

impl AppState {
    /// Restore persisted state from `storage`
    pub fn load(storage: Arc<dyn KeyValueStore>, system_dark: bool) -> Self {
        Self {
            list: ListStore::load(storage.clone()),
            theme: ThemeController::load(storage, system_dark),
            toasts: ToastQueue::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
