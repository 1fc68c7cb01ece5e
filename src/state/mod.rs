//! State - Localization State Modules
//!
//! Plain state containers with no presentation or persistence dependencies.

pub mod language_state;
