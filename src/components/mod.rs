//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod theme_toggle;
mod new_product_form;
mod product_list;
mod product_row;
mod toast_stack;

pub use header::Header;
pub use theme_toggle::ThemeToggle;
pub use new_product_form::NewProductForm;
pub use product_list::ProductList;
pub use product_row::ProductRow;
pub use toast_stack::ToastStack;
