//! LanguageState - Active Language Container
//!
//! The only mutable localization entity. It knows nothing about persistence
//! or presentation; the store orchestrates those around it.

use crate::i18n::{Direction, Language};

/// State for the active display language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageState {
    active: Language,
}

impl LanguageState {
    /// Create state resting on `initial`
    pub fn new(initial: Language) -> Self {
        Self { active: initial }
    }

    /// Current language
    pub fn active(&self) -> Language {
        self.active
    }

    /// Direction derived from the current language
    pub fn direction(&self) -> Direction {
        self.active.direction()
    }

    /// Set the language, returning the previous one
    pub fn set(&mut self, language: Language) -> Language {
        std::mem::replace(&mut self.active, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rests_on_primary() {
        let state = LanguageState::default();
        assert_eq!(state.active(), Language::Fr);
        assert_eq!(state.direction(), Direction::Ltr);
    }

    #[test]
    fn set_returns_previous_and_last_write_wins() {
        let mut state = LanguageState::new(Language::Fr);
        assert_eq!(state.set(Language::Ar), Language::Fr);
        assert_eq!(state.set(Language::Fr), Language::Ar);
        assert_eq!(state.set(Language::Ar), Language::Fr);
        assert_eq!(state.active(), Language::Ar);
        assert_eq!(state.direction(), Direction::Rtl);
    }
}
