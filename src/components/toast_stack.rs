//! Toast Stack Component
//!
//! Top-right stack of notifications. Fading toasts get the `fading` class
//! (CSS handles the opacity transition).

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = ctx.store.toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.read().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = move || {
                        if toasts.read().is_fading(id) { "toast fading" } else { "toast" }
                    };
                    view! {
                        <div class=class role="status">
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
