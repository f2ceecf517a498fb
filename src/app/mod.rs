//! Application-level modules for the clubdesk GUI.
//!
//! This module contains the coordinators, the centralized state, and the
//! preference storage bootstrap.

mod app_state;
mod application_coordinator;
mod preferences;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use preferences::{open_preference_store, PrefStore};
pub use theme_coordinator::ThemeCoordinator;
