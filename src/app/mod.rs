//! App - Localization Store
//!
//! Composes the dictionary, language state, preference store and
//! presentation root into the store consumed by UI code.

mod localization;

pub use localization::*;
