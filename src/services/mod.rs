//! Services - External Collaborators
//!
//! Preference persistence backends used by the localization store.

mod preferences;
mod writer;

pub use preferences::*;
pub use writer::*;

#[cfg(test)]
pub(crate) use preferences::UnavailablePreferences;
