//! Schedule filter state for the GUI.
//!
//! Wraps the library [`FilterStore`] and caches the generated filter
//! options so they are not recomputed every frame. The options are
//! refreshed whenever content or language changes.
//!
//! The program selector and the search text are deliberately session-only
//! view state: they narrow the schedule panel but are not part of the
//! persisted filter selection.

use clubdesk::{
    filter_label, FilterCategory, FilterOption, FilterStore, GermanCollator, Language,
    ProgramType, TrainingSession,
};

use crate::app::PrefStore;

/// State related to schedule filtering.
pub struct FilterState {
    store: FilterStore<PrefStore>,
    level_options: Vec<FilterOption>,
    age_options: Vec<FilterOption>,
    /// Program narrowing for the schedule panel; `None` shows all programs.
    pub program: Option<ProgramType>,
    /// Free-text narrowing for the schedule panel.
    pub search_text: String,
}

impl FilterState {
    /// Creates the filter state over the preference store.
    pub fn new(prefs: PrefStore) -> Self {
        Self {
            store: FilterStore::new(prefs),
            level_options: Vec::new(),
            age_options: Vec::new(),
            program: None,
            search_text: String::new(),
        }
    }

    /// Restores the persisted filter selection.
    pub fn initialize(&mut self) -> Vec<String> {
        self.store.initialize()
    }

    /// Regenerates the cached filter options from the given sessions.
    pub fn refresh_options(&mut self, sessions: &[TrainingSession], language: Language) {
        let collator = GermanCollator::new();
        self.level_options = self.store.generate_options(
            sessions,
            FilterCategory::Level,
            |value| filter_label(language, FilterCategory::Level.key(), value),
            &collator,
        );
        self.age_options = self.store.generate_options(
            sessions,
            FilterCategory::AgeGroup,
            |value| filter_label(language, FilterCategory::AgeGroup.key(), value),
            &collator,
        );
    }

    pub fn level_options(&self) -> &[FilterOption] {
        &self.level_options
    }

    pub fn age_options(&self) -> &[FilterOption] {
        &self.age_options
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.store.is_selected(tag)
    }

    /// Number of active filter tags.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Adds or removes a tag depending on its current state.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.store.is_selected(tag) {
            self.store.remove(tag)
        } else {
            self.store.add(tag)
        }
    }

    /// Clears the persisted selection.
    pub fn clear(&mut self) -> bool {
        self.store.clear()
    }

    pub fn panel_expanded(&self) -> bool {
        self.store.panel_expanded()
    }

    pub fn set_panel_expanded(&mut self, expanded: bool) -> bool {
        self.store.set_panel_expanded(expanded)
    }

    /// Applies the persisted tag selection to a session list.
    pub fn apply(&self, sessions: &[TrainingSession]) -> Vec<TrainingSession> {
        self.store.apply(sessions, None)
    }
}
