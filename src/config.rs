//! App Configuration
//!
//! Compile-time settings: storage keys, asset paths, logger setup.

use rolling_logger::LoggerConfig;

/// Title shown in the header
pub const APP_TITLE: &str = "Lista Zakupów";

/// Local storage key for the product list
pub const PRODUCTS_KEY: &str = "products";
/// Local storage key for the theme mode
pub const THEME_KEY: &str = "theme";
/// Read-only fallbacks written by older builds
pub const LEGACY_THEME_MODE_KEY: &str = "themeMode";
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// Class toggled on `<html>` when the effective theme is dark
pub const DARK_CLASS: &str = "dark";

/// Offline cache worker, relative to the page
pub const SERVICE_WORKER_URL: &str = "./sw.js";

pub fn logger_config() -> LoggerConfig {
    LoggerConfig {
        capacity: 500,
        ..LoggerConfig::default()
    }
}
