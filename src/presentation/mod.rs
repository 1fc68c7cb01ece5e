//! Presentation - Direction Application Contract
//!
//! The store pushes the derived text direction to a presentation root. Both
//! effects (the `dir` attribute and the `rtl` style flag) are applied before
//! `apply_direction` returns.

mod root;

pub use root::*;

use crate::i18n::{Direction, Language};

/// Rendering root that reflects the active text direction
pub trait PresentationRoot {
    /// Set the root direction attribute and toggle the RTL style flag
    fn apply_direction(&mut self, direction: Direction);

    /// Direction last applied, `None` before the first application
    fn direction(&self) -> Option<Direction>;

    /// Apply everything a language change implies for the root
    fn apply_language(&mut self, language: Language) {
        self.apply_direction(language.direction());
    }
}
