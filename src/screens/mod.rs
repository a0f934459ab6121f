//! Headless screen state for the role UI. Handlers drive these and render
//! the result; tests drive them directly.

pub mod edit;
pub mod list;
pub mod services;

pub use edit::{EditFailure, EditScreen, EditState};
pub use list::{ListScreen, ListState, PurgeOutcome};
pub use services::{Answered, ConfirmPrompt, Confirmer, Notifier};
