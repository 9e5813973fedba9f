//! Theme Toggle Component
//!
//! Cycles light → dark → system; shows the current mode.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let theme = ctx.store.theme();
    let mode = move || theme.read().mode();

    view! {
        <button
            class="theme-toggle"
            title=move || format!("Motyw: {}", mode().label())
            on:click=move |_| {
                ctx.cycle_theme();
            }
        >
            <span class="theme-icon">{move || mode().icon()}</span>
            " "
            <span class="theme-label">{move || mode().label()}</span>
        </button>
    }
}
