//! Artisan Locale Library
//!
//! Localization store for the artisans marketplace client: French/Arabic
//! translation lookup with key-echo fallback, RTL/LTR direction switching
//! on a presentation root, and a persisted language preference.

pub mod app;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod presentation;
pub mod services;
pub mod state;

pub use app::{Localization, Scope};
pub use error::{Error, Result};
pub use i18n::{Dictionary, Direction, Language, Lookup};
pub use presentation::{DocumentRoot, PresentationRoot};
pub use services::{
    BackgroundPreferences, FilePreferences, MemoryPreferences, PreferenceStore, open_preferences,
};
