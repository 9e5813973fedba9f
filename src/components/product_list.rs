//! Product List Component
//!
//! Renders the shopping list in insertion order.

use leptos::prelude::*;

use crate::components::ProductRow;
use crate::context::use_app_context;
use crate::models::Product;
use crate::store::AppStateStoreFields;

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_app_context();
    let list = ctx.store.list();

    // Rows are positional; the key changes whenever a row's content does
    let rows = move || {
        list.read()
            .products()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<(usize, Product)>>()
    };

    let summary = move || {
        let list = list.read();
        let bought = list.products().iter().filter(|p| p.is_checked).count();
        format!("{} / {} kupione", bought, list.len())
    };

    view! {
        <ul class="product-list">
            <For
                each=rows
                key=|(index, product)| (*index, product.name.clone(), product.is_checked)
                children=move |(index, product)| view! { <ProductRow index=index product=product /> }
            />
        </ul>
        <Show
            when=move || !list.read().is_empty()
            fallback=|| view! { <p class="empty-hint">"Lista jest pusta"</p> }
        >
            <p class="item-count">{summary}</p>
        </Show>
    }
}
