//! Header Component

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::config::APP_TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>{APP_TITLE}</h1>
            <ThemeToggle />
        </header>
    }
}
