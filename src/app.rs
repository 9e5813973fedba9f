//! Shopping List App
//!
//! Top-level component: owns the store, wires the OS color-scheme signal
//! into the theme, and lays out the list.

use leptos::prelude::*;
use leptos_color_scheme::{use_prefers_dark, MediaQuerySource};
use reactive_stores::Store;

use crate::components::{Header, NewProductForm, ProductList, ToastStack};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme;

#[component]
pub fn App(state: AppState) -> impl IntoView {
    let store = Store::new(state);
    let ctx = AppContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    // Live OS preference; listener released when App is torn down
    let system_dark = use_prefers_dark(MediaQuerySource::new());
    Effect::new(move |_| {
        ctx.set_system_dark(system_dark.get());
    });

    // Keep the root `dark` class in sync with the effective theme
    Effect::new(move |_| {
        let dark = store.theme().read().is_dark();
        theme::apply_to_document(dark);
    });

    view! {
        <div class="app-shell">
            <main class="app-card">
                <Header />
                <NewProductForm />
                <ProductList />
            </main>
            <ToastStack />
        </div>
    }
}
