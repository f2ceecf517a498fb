//! Theme state for the GUI.
//!
//! Thin wrapper around the library [`ThemeStore`], bound to the
//! preference storage backend.

use clubdesk::{palette, ThemeColors, ThemePreference, ThemeStore};

use crate::app::PrefStore;

/// State related to the visual theme.
pub struct ThemeState {
    store: ThemeStore<PrefStore>,
}

impl ThemeState {
    /// Creates the theme state over the preference store.
    pub fn new(prefs: PrefStore) -> Self {
        Self {
            store: ThemeStore::new(prefs),
        }
    }

    /// Resolves the startup theme from storage (idempotent).
    pub fn initialize(&mut self) -> ThemePreference {
        self.store.initialize()
    }

    /// The current theme preference.
    pub fn preference(&self) -> ThemePreference {
        self.store.current()
    }

    /// The color palette for the current preference.
    pub fn colors(&self) -> ThemeColors {
        palette(self.store.current())
    }

    /// Switches to the opposite theme and returns the new preference.
    pub fn toggle(&mut self) -> ThemePreference {
        self.store.toggle()
    }
}
