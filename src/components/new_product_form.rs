//! New Product Form Component
//!
//! Text input plus submit button; Enter submits.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for adding products to the list
#[component]
pub fn NewProductForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_name, set_new_name) = signal(String::new());

    let add_product = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Rejected input stays in the field
        if ctx.add_product(&new_name.get_untracked()) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="new-product-form" on:submit=add_product>
            <input
                type="text"
                placeholder="Dodaj produkt"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"Dodaj"</button>
        </form>
    }
}
