//! Product Row Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Product;

/// One list entry: click the name to mark it bought, button to remove
#[component]
pub fn ProductRow(index: usize, product: Product) -> impl IntoView {
    let ctx = use_app_context();

    let name_class = if product.is_checked {
        "product-name checked"
    } else {
        "product-name"
    };

    view! {
        <li class="product-row">
            <span
                class=name_class
                on:click=move |_| ctx.toggle_product(index)
            >
                {product.name}
            </span>
            <button
                class="remove-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.remove_product(index);
                }
            >
                "Usuń"
            </button>
        </li>
    }
}
