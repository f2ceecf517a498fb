//! Centralized application state for the clubdesk GUI.
//!
//! Composes focused state components that each manage one aspect of the
//! application. Keeping the components separate keeps invariants local
//! and gives panels borrow-checker friendly access to the state they
//! actually touch.

use crate::app::PrefStore;
use crate::state::{ContentState, FilterState, NavState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded club content
    pub content: ContentState,

    /// Theme preference and palette
    pub theme: ThemeState,

    /// Schedule filter selection and view narrowing
    pub filter: FilterState,

    /// Active section, language, content-directory memory
    pub nav: NavState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Current status message to display (if any)
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates the application state over the preference store.
    pub fn new(prefs: PrefStore) -> Self {
        Self {
            content: ContentState::new(),
            theme: ThemeState::new(prefs.clone()),
            filter: FilterState::new(prefs.clone()),
            nav: NavState::new(prefs),
            error_message: None,
            status_message: None,
        }
    }

    /// Restores all persisted state. Called once at startup.
    pub fn initialize(&mut self) {
        self.theme.initialize();
        self.filter.initialize();
    }

    /// Clears content-dependent state before loading a new directory.
    pub fn reset_content_state(&mut self) {
        self.content.clear();
        self.error_message = None;
        self.status_message = None;
    }
}
