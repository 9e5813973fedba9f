//! Theme Controller
//!
//! Tracks the user's light/dark/system choice and the live OS preference,
//! and resolves them into a single "dark" flag for the document root.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{DARK_CLASS, LEGACY_DARK_MODE_KEY, LEGACY_THEME_MODE_KEY, THEME_KEY};
use crate::models::ThemeMode;
use crate::storage::{load_json, save_json, KeyValueStore};

pub struct ThemeController {
    mode: ThemeMode,
    system_dark: bool,
    storage: Arc<dyn KeyValueStore>,
}

impl ThemeController {
    /// Restore the stored mode (default: follow the system)
    pub fn load(storage: Arc<dyn KeyValueStore>, system_dark: bool) -> Self {
        let mode = stored_mode(storage.as_ref()).unwrap_or_default();
        debug!(mode = mode.as_str(), system_dark, "loaded theme");
        Self { mode, system_dark, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn system_dark(&self) -> bool {
        self.system_dark
    }

    /// Effective darkness
    pub fn is_dark(&self) -> bool {
        self.mode.resolve(self.system_dark)
    }

    /// Advance light → dark → system → light and persist
    pub fn cycle(&mut self) -> ThemeMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist();
    }

    /// Record a change of the OS preference. Returns true when the
    /// effective darkness changed as a result.
    pub fn set_system_dark(&mut self, dark: bool) -> bool {
        let was_dark = self.is_dark();
        self.system_dark = dark;
        was_dark != self.is_dark()
    }

    pub fn persist(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), THEME_KEY, &self.mode) {
            warn!(error = %e, "could not persist theme");
        }
    }
}

/// Current key first, then the keys older builds wrote
fn stored_mode(storage: &dyn KeyValueStore) -> Option<ThemeMode> {
    if let Some(raw) = storage.get(THEME_KEY) {
        return parse_mode(&raw);
    }
    if let Some(raw) = storage.get(LEGACY_THEME_MODE_KEY) {
        return parse_mode(&raw);
    }
    let dark: bool = load_json(storage, LEGACY_DARK_MODE_KEY)?;
    Some(if dark { ThemeMode::Dark } else { ThemeMode::Light })
}

/// Accepts a JSON string (`"dark"`) or the bare word (`dark`)
fn parse_mode(raw: &str) -> Option<ThemeMode> {
    serde_json::from_str::<ThemeMode>(raw)
        .ok()
        .or_else(|| ThemeMode::parse(raw.trim()))
}

/// Toggle the `dark` class on `<html>`
pub fn apply_to_document(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
    if let Err(e) = result {
        warn!(error = ?e, "could not update document theme class");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use leptos_color_scheme::{ColorSchemeSource, SimulatedSource};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller_with(key: &str, value: &str) -> ThemeController {
        ThemeController::load(Arc::new(MemoryStorage::with_entry(key, value)), false)
    }

    #[test]
    fn test_defaults_to_system() {
        let theme = ThemeController::load(Arc::new(MemoryStorage::new()), true);
        assert_eq!(theme.mode(), ThemeMode::System);
        assert!(theme.is_dark());
    }

    #[test]
    fn test_malformed_value_defaults_to_system() {
        assert_eq!(controller_with(THEME_KEY, "\"purple\"").mode(), ThemeMode::System);
        assert_eq!(controller_with(THEME_KEY, "{").mode(), ThemeMode::System);
    }

    #[test]
    fn test_cycle_persists_each_step() {
        let storage = Arc::new(MemoryStorage::with_entry(THEME_KEY, "\"light\""));
        let mut theme = ThemeController::load(storage.clone(), false);
        assert_eq!(theme.mode(), ThemeMode::Light);

        assert_eq!(theme.cycle(), ThemeMode::Dark);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("\"dark\""));
        assert_eq!(theme.cycle(), ThemeMode::System);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("\"system\""));
        assert_eq!(theme.cycle(), ThemeMode::Light);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("\"light\""));
    }

    #[test]
    fn test_reload_restores_mode() {
        let storage = Arc::new(MemoryStorage::new());
        let mut theme = ThemeController::load(storage.clone(), false);
        theme.set_mode(ThemeMode::Dark);

        let reloaded = ThemeController::load(storage, false);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
        assert!(reloaded.is_dark());
    }

    #[test]
    fn test_bare_mode_string_is_accepted() {
        assert_eq!(controller_with(THEME_KEY, "dark").mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_legacy_keys() {
        assert_eq!(controller_with(LEGACY_THEME_MODE_KEY, "\"light\"").mode(), ThemeMode::Light);
        assert_eq!(controller_with(LEGACY_DARK_MODE_KEY, "true").mode(), ThemeMode::Dark);
        assert_eq!(controller_with(LEGACY_DARK_MODE_KEY, "false").mode(), ThemeMode::Light);
        assert_eq!(controller_with(LEGACY_DARK_MODE_KEY, "yes").mode(), ThemeMode::System);
    }

    #[test]
    fn test_current_key_wins_over_legacy() {
        let storage = MemoryStorage::with_entry(LEGACY_DARK_MODE_KEY, "true");
        storage.set(THEME_KEY, "\"light\"").unwrap();
        let theme = ThemeController::load(Arc::new(storage), false);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_explicit_modes_ignore_os_signal() {
        let mut theme = controller_with(THEME_KEY, "\"light\"");
        assert!(!theme.set_system_dark(true));
        assert!(!theme.is_dark());

        theme.set_mode(ThemeMode::Dark);
        assert!(!theme.set_system_dark(false));
        assert!(theme.is_dark());
    }

    #[test]
    fn test_os_flip_in_system_mode_reports_change() {
        let mut theme = ThemeController::load(Arc::new(MemoryStorage::new()), false);
        assert!(theme.set_system_dark(true));
        assert!(!theme.set_system_dark(true));
        assert!(theme.set_system_dark(false));
    }

    #[test]
    fn test_system_mode_tracks_os_signal() {
        let source = SimulatedSource::new(false);
        let theme = Rc::new(RefCell::new(ThemeController::load(
            Arc::new(MemoryStorage::new()),
            source.prefers_dark(),
        )));
        assert!(!theme.borrow().is_dark());

        let tracked = theme.clone();
        let subscription = source.subscribe(Box::new(move |dark| {
            tracked.borrow_mut().set_system_dark(dark);
        }));

        source.set_dark(true);
        assert!(theme.borrow().is_dark());
        source.set_dark(false);
        assert!(!theme.borrow().is_dark());

        drop(subscription);
        source.set_dark(true);
        assert!(!theme.borrow().system_dark());
    }
}
