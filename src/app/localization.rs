//! Localization - Language Store
//!
//! Single source of truth for the active language. Owns the language state,
//! reads translations from a static dictionary, and orchestrates the two
//! side effects of a language change: applying direction to the
//! presentation root and persisting the choice.
//!
//! ```text
//! set_language → LanguageState::set → PresentationRoot::apply_language → PreferenceStore::set
//! ```
//!
//! Persistence is best-effort. A failed read falls back to the primary
//! language, a failed write leaves the in-memory change in place.

use std::borrow::Cow;

use tracing::{info, warn};

use crate::constants::LANGUAGE_KEY;
use crate::helpers::interpolate;
use crate::i18n::{Dictionary, Direction, Language, Lookup};
use crate::presentation::PresentationRoot;
use crate::services::PreferenceStore;
use crate::state::language_state::LanguageState;

/// Localization store, passed explicitly to everything that renders text
pub struct Localization<'d, P, R> {
    dictionary: &'d Dictionary,
    state: LanguageState,
    preferences: P,
    root: R,
}

impl<'d, P, R> Localization<'d, P, R>
where
    P: PreferenceStore,
    R: PresentationRoot,
{
    /// Resolve the initial language from `preferences` and apply it to `root`
    pub fn new(dictionary: &'d Dictionary, preferences: P, mut root: R) -> Self {
        let initial = resolve_initial(&preferences);
        root.apply_language(initial);
        info!(language = %initial, direction = %initial.direction(), "Localization initialized");

        Self {
            dictionary,
            state: LanguageState::new(initial),
            preferences,
            root,
        }
    }

    // ==================== Getters ====================

    pub fn active_language(&self) -> Language {
        self.state.active()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    // ==================== Setters ====================

    /// Make `language` active, apply its direction and persist it
    pub fn set_language(&mut self, language: Language) {
        let previous = self.state.set(language);
        self.root.apply_language(language);

        if let Err(e) = self.preferences.set(LANGUAGE_KEY, language.code()) {
            warn!(error = %e, language = %language, "Failed to persist language, keeping it for this session");
        }

        if previous != language {
            info!(from = %previous, to = %language, "Language changed");
        }
    }

    /// Set the language from an untyped code
    ///
    /// Unsupported codes leave the state untouched. Returns the language
    /// active after the call.
    pub fn set_language_code(&mut self, code: &str) -> Language {
        match code.parse::<Language>() {
            Ok(language) => self.set_language(language),
            Err(e) => {
                warn!(error = %e, active = %self.active_language(), "Rejected language change")
            }
        }
        self.active_language()
    }

    /// Switch to the other language, returning it
    pub fn toggle_language(&mut self) -> Language {
        let next = self.active_language().toggled();
        self.set_language(next);
        next
    }

    // ==================== Translation ====================

    /// Tagged lookup in the active language, without diagnostics
    pub fn lookup<'a>(&'a self, key: &'a str) -> Lookup<'a> {
        self.dictionary.lookup(self.active_language(), key)
    }

    /// Translate `key`, echoing the key back when it is missing
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        let lookup = self.lookup(key);
        if lookup.is_missing() {
            warn!(key, language = %self.active_language(), "Missing translation");
        }
        lookup.as_str()
    }

    /// Short alias for [`Localization::translate`]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate(key)
    }

    /// Translate `key` and fill `{name}` placeholders
    pub fn translate_with<'a>(&'a self, key: &'a str, args: &[(&str, &str)]) -> Cow<'a, str> {
        interpolate(self.translate(key), args)
    }

    /// Translator for keys under `prefix.`
    pub fn scope<'s>(&'s self, prefix: &'s str) -> Scope<'s, 'd, P, R> {
        Scope {
            store: self,
            prefix,
        }
    }
}

/// Namespaced view over a [`Localization`], e.g. `nav` or `auth`
pub struct Scope<'s, 'd, P, R> {
    store: &'s Localization<'d, P, R>,
    prefix: &'s str,
}

impl<'s, 'd, P, R> Scope<'s, 'd, P, R>
where
    P: PreferenceStore,
    R: PresentationRoot,
{
    /// Translate `prefix.key`; echoes the full key when missing
    pub fn t(&self, key: &str) -> Cow<'s, str> {
        let full = format!("{}.{key}", self.prefix);
        let language = self.store.active_language();

        match self.store.dictionary.get(language, &full) {
            Some(text) => Cow::Borrowed(text),
            None => {
                warn!(key = %full, language = %language, "Missing translation");
                Cow::Owned(full)
            }
        }
    }

    /// Scoped translation with `{name}` placeholders filled
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args).into_owned()
    }
}

fn resolve_initial<P: PreferenceStore>(preferences: &P) -> Language {
    match preferences.get(LANGUAGE_KEY) {
        Ok(Some(code)) => code.parse().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring persisted language");
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            warn!(error = %e, "Failed to read persisted language, using default");
            Language::default()
        }
    }
}
