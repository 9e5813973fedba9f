//! Shopping List
//!
//! Ordered product list with write-through persistence. Every mutation
//! rewrites the whole snapshot under [`PRODUCTS_KEY`].

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::PRODUCTS_KEY;
use crate::models::Product;
use crate::storage::{load_json, save_json, KeyValueStore};

/// Result of [`ListStore::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended; carries the trimmed name
    Added(String),
    /// A product with the same trimmed name is already listed
    Duplicate,
    /// Input was empty after trimming
    Blank,
}

pub struct ListStore {
    products: Vec<Product>,
    storage: Arc<dyn KeyValueStore>,
}

impl ListStore {
    /// Empty list backed by `storage` (nothing is read)
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { products: Vec::new(), storage }
    }

    /// Restore the persisted snapshot; absent or malformed → empty list
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let stored: Vec<Product> = load_json(storage.as_ref(), PRODUCTS_KEY).unwrap_or_default();
        let products = sanitize(stored);
        debug!(count = products.len(), "loaded shopping list");
        Self { products, storage }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.iter().any(|p| p.name == name)
    }

    pub fn add(&mut self, raw_name: &str) -> AddOutcome {
        let name = raw_name.trim();
        if name.is_empty() {
            return AddOutcome::Blank;
        }
        if self.contains(name) {
            return AddOutcome::Duplicate;
        }
        self.products.push(Product::new(name));
        self.persist();
        AddOutcome::Added(name.to_string())
    }

    /// Remove the product at `index`.
    ///
    /// # Panics
    /// If `index` is out of range; the view only offers valid positions.
    pub fn remove(&mut self, index: usize) -> Product {
        assert!(
            index < self.products.len(),
            "remove index {} out of range (len {})",
            index,
            self.products.len()
        );
        let removed = self.products.remove(index);
        self.persist();
        removed
    }

    /// Flip `is_checked` at `index` and return the new value.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        assert!(
            index < self.products.len(),
            "toggle index {} out of range (len {})",
            index,
            self.products.len()
        );
        let product = &mut self.products[index];
        product.is_checked = !product.is_checked;
        let checked = product.is_checked;
        self.persist();
        checked
    }

    /// Write the full list. Failures are logged; memory stays authoritative.
    pub fn persist(&self) {
        match save_json(self.storage.as_ref(), PRODUCTS_KEY, &self.products) {
            Ok(()) => debug!(count = self.products.len(), "persisted shopping list"),
            Err(e) => warn!(error = %e, "could not persist shopping list"),
        }
    }
}

/// Drop blank names and repeated names so the uniqueness invariant holds
fn sanitize(stored: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::new();
    stored
        .into_iter()
        .filter_map(|mut product| {
            let name = product.name.trim();
            if name.is_empty() || !seen.insert(name.to_string()) {
                return None;
            }
            product.name = name.to_string();
            Some(product)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn setup() -> (ListStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (ListStore::new(storage.clone()), storage)
    }

    fn snapshot(storage: &MemoryStorage) -> Vec<Product> {
        load_json(storage, PRODUCTS_KEY).unwrap_or_default()
    }

    fn names(list: &ListStore) -> Vec<&str> {
        list.products().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_unchecked() {
        let (mut list, _) = setup();
        list.add("Milk");
        let outcome = list.add("  Bread ");

        assert_eq!(outcome, AddOutcome::Added("Bread".to_string()));
        assert_eq!(names(&list), vec!["Milk", "Bread"]);
        assert!(!list.products()[1].is_checked);
    }

    #[test]
    fn test_add_duplicate_after_trim_is_rejected() {
        let (mut list, storage) = setup();
        list.add("Milk");
        let before = snapshot(&storage);

        assert_eq!(list.add(" Milk  "), AddOutcome::Duplicate);
        assert_eq!(list.len(), 1);
        assert_eq!(snapshot(&storage), before);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let (mut list, _) = setup();
        list.add("milk");
        assert_eq!(list.add("Milk"), AddOutcome::Added("Milk".to_string()));
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (mut list, storage) = setup();
        assert_eq!(list.add(""), AddOutcome::Blank);
        assert_eq!(list.add(" \t "), AddOutcome::Blank);
        assert!(list.is_empty());
        assert_eq!(storage.get(PRODUCTS_KEY), None);
    }

    #[test]
    fn test_remove_preserves_order() {
        let (mut list, _) = setup();
        for name in ["a", "b", "c", "d"] {
            list.add(name);
        }
        let removed = list.remove(1);

        assert_eq!(removed.name, "b");
        assert_eq!(names(&list), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let (mut list, _) = setup();
        for name in ["a", "b", "c"] {
            list.add(name);
        }
        assert!(list.toggle(1));

        let flags: Vec<bool> = list.products().iter().map(|p| p.is_checked).collect();
        assert_eq!(flags, vec![false, true, false]);

        assert!(!list.toggle(1));
        assert!(list.products().iter().all(|p| !p.is_checked));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range_panics() {
        let (mut list, _) = setup();
        list.add("a");
        list.remove(1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_toggle_out_of_range_panics() {
        let (mut list, _) = setup();
        list.toggle(0);
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let (mut list, storage) = setup();

        list.add("Milk");
        assert_eq!(snapshot(&storage), list.products());
        list.add("Bread");
        assert_eq!(snapshot(&storage), list.products());
        list.toggle(0);
        assert_eq!(snapshot(&storage), list.products());
        list.remove(1);
        assert_eq!(snapshot(&storage), list.products());
    }

    #[test]
    fn test_reload_reproduces_list() {
        let (mut list, storage) = setup();
        list.add("Milk");
        list.add("Bread");
        list.add("Eggs");
        list.toggle(2);

        let reloaded = ListStore::load(storage);
        assert_eq!(reloaded.products(), list.products());
    }

    #[test]
    fn test_load_missing_or_malformed_is_empty() {
        let missing = ListStore::load(Arc::new(MemoryStorage::new()));
        assert!(missing.is_empty());

        let garbage = ListStore::load(Arc::new(MemoryStorage::with_entry(PRODUCTS_KEY, "[{\"name\":")));
        assert!(garbage.is_empty());

        let wrong_shape = ListStore::load(Arc::new(MemoryStorage::with_entry(PRODUCTS_KEY, "{\"name\":\"Milk\"}")));
        assert!(wrong_shape.is_empty());
    }

    #[test]
    fn test_load_drops_blank_and_repeated_names() {
        let raw = r#"[
            {"name":"Milk","isChecked":true},
            {"name":"  ","isChecked":false},
            {"name":" Milk ","isChecked":false},
            {"name":"Bread","isChecked":false}
        ]"#;
        let list = ListStore::load(Arc::new(MemoryStorage::with_entry(PRODUCTS_KEY, raw)));

        assert_eq!(names(&list), vec!["Milk", "Bread"]);
        assert!(list.products()[0].is_checked);
    }

    #[test]
    fn test_shopping_scenario() {
        let (mut list, storage) = setup();

        assert_eq!(list.add("Milk"), AddOutcome::Added("Milk".to_string()));
        assert_eq!(list.add("Milk"), AddOutcome::Duplicate);
        assert_eq!(list.len(), 1);
        list.add("Bread");
        assert_eq!(names(&list), vec!["Milk", "Bread"]);
        list.toggle(0);
        list.remove(1);

        let expected = vec![Product { name: "Milk".to_string(), is_checked: true }];
        assert_eq!(list.products(), expected.as_slice());
        assert_eq!(snapshot(&storage), expected);
    }
}
