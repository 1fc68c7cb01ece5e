//! Constants
//!
//! Centralized identifiers shared by the store, the preference backends and
//! the binary.

/// Preference key under which the active language code is persisted
pub const LANGUAGE_KEY: &str = "language";

/// Preference file name inside the config directory
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Rolling log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "artisan-locale.log";

/// `ProjectDirs` identifiers
pub const APP_QUALIFIER: &str = "ma";
pub const APP_ORGANIZATION: &str = "artisans";
pub const APP_NAME: &str = "artisan-locale";

/// Legacy dotfile directory under `$HOME`, migrated on first use
pub const LEGACY_CONFIG_DIR: &str = ".artisan-locale";

/// Root attribute carrying the text direction
pub const DIR_ATTRIBUTE: &str = "dir";

/// Root attribute carrying the language code
pub const LANG_ATTRIBUTE: &str = "lang";

/// Style flag toggled on the root for right-to-left layout rules
pub const RTL_CLASS: &str = "rtl";
