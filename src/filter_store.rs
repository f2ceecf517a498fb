//! Schedule filter state with persistence and change notification.
//!
//! Holds the set of selected filter tags (skill levels and age groups),
//! persists it as a versioned JSON blob, and notifies subscribers on every
//! successful change. Unlike the theme store, a failed write fails the
//! whole operation here and leaves the in-memory state untouched, so the
//! selection reported to callers always matches what a restart would
//! restore.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::content::TrainingSession;
use crate::settings;
use crate::traits::{Collator, KeyValueStore};

/// Storage key for the persisted filter state.
pub const FILTER_STORAGE_KEY: &str = "schedule-filter-state";

/// Version of the persisted filter state schema. Blobs with any other
/// version are treated as absent.
pub const FILTER_STATE_VERSION: u32 = 1;

/// On-disk shape of the filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedFilterState {
    version: u32,
    selected_filters: Vec<String>,
    is_panel_expanded: bool,
}

/// Session attribute a filter option is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    Level,
    AgeGroup,
}

impl FilterCategory {
    /// Stable key used in label lookups.
    pub fn key(self) -> &'static str {
        match self {
            FilterCategory::Level => "level",
            FilterCategory::AgeGroup => "age_group",
        }
    }

    fn value_of(self, session: &TrainingSession) -> &str {
        match self {
            FilterCategory::Level => &session.level,
            FilterCategory::AgeGroup => &session.age_group,
        }
    }
}

/// A selectable filter option with its session count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Human-readable label, already translated.
    pub label: String,
    /// Internal key, e.g. "beginner".
    pub value: String,
    /// Number of sessions carrying this value.
    pub count: usize,
}

/// Handle for removing a registered subscriber.
pub type SubscriptionId = u64;

/// Store for the selected schedule filters.
pub struct FilterStore<S: KeyValueStore> {
    storage: S,
    selected: Vec<String>,
    panel_expanded: bool,
    next_subscription: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&[String])>)>,
}

impl<S: KeyValueStore> FilterStore<S> {
    /// Creates a store over the given storage backend with no active
    /// filters. Call [`FilterStore::initialize`] once at startup to adopt
    /// a persisted selection.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            selected: Vec::new(),
            panel_expanded: false,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    /// Currently selected filter tags. Empty means "show everything".
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Whether the given tag is currently selected.
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    /// Number of active filters.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Whether the filter panel is expanded.
    pub fn panel_expanded(&self) -> bool {
        self.panel_expanded
    }

    /// Registers a callback invoked with the new selection on every
    /// successful change.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&[String]) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Invokes every subscriber with the current selection.
    fn notify(&mut self) {
        let selection = self.selected.clone();
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&selection);
        }
    }

    /// Restores the persisted selection, if a valid versioned blob exists.
    ///
    /// Anything else (missing key, malformed JSON, wrong version, wrong
    /// shape) resolves to the empty selection without being treated as an
    /// error. Subscribers are notified with the resolved selection.
    pub fn initialize(&mut self) -> Vec<String> {
        match self.storage.get(FILTER_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<PersistedFilterState>(&raw) {
                Ok(state) if state.version == FILTER_STATE_VERSION => {
                    self.selected = dedup(state.selected_filters);
                    self.panel_expanded = state.is_panel_expanded;
                }
                Ok(state) => {
                    warn!(
                        "discarding filter state with unsupported version {}",
                        state.version
                    );
                }
                Err(err) => {
                    warn!("discarding malformed filter state: {}", err);
                }
            },
            Ok(None) => {}
            Err(err) => {
                warn!("failed to read stored filters: {}", err);
            }
        }

        self.notify();
        self.selected.clone()
    }

    /// Replaces the whole selection.
    ///
    /// Duplicates are collapsed. The new state is persisted first; when
    /// the write fails the operation fails and the in-memory selection is
    /// left unchanged.
    pub fn set(&mut self, tags: Vec<String>) -> bool {
        let deduped = dedup(tags);
        let state = PersistedFilterState {
            version: FILTER_STATE_VERSION,
            selected_filters: deduped.clone(),
            is_panel_expanded: self.panel_expanded,
        };

        if let Err(err) = settings::save_json(&mut self.storage, FILTER_STORAGE_KEY, &state) {
            warn!("failed to persist schedule filters: {}", err);
            return false;
        }

        self.selected = deduped;
        self.notify();
        true
    }

    /// Adds a single tag; a no-op success when it is already selected.
    pub fn add(&mut self, tag: &str) -> bool {
        if self.is_selected(tag) {
            return true;
        }
        let mut next = self.selected.clone();
        next.push(tag.to_string());
        self.set(next)
    }

    /// Removes a single tag; succeeds even when it was not selected.
    pub fn remove(&mut self, tag: &str) -> bool {
        let next: Vec<String> = self
            .selected
            .iter()
            .filter(|t| t.as_str() != tag)
            .cloned()
            .collect();
        self.set(next)
    }

    /// Clears the selection.
    pub fn clear(&mut self) -> bool {
        self.set(Vec::new())
    }

    /// Persists the panel expansion state alongside the selection.
    pub fn set_panel_expanded(&mut self, expanded: bool) -> bool {
        if self.panel_expanded == expanded {
            return true;
        }
        let state = PersistedFilterState {
            version: FILTER_STATE_VERSION,
            selected_filters: self.selected.clone(),
            is_panel_expanded: expanded,
        };

        if let Err(err) = settings::save_json(&mut self.storage, FILTER_STORAGE_KEY, &state) {
            warn!("failed to persist filter panel state: {}", err);
            return false;
        }

        self.panel_expanded = expanded;
        true
    }

    /// Applies filters to a session list with OR semantics: a session is
    /// kept when its level or its age group is among the tags.
    ///
    /// `tags` of `None` uses the current selection. An empty selection
    /// passes every session through in the original order. The input is
    /// never mutated.
    pub fn apply(
        &self,
        sessions: &[TrainingSession],
        tags: Option<&[String]>,
    ) -> Vec<TrainingSession> {
        let active = tags.unwrap_or(&self.selected);
        if active.is_empty() {
            return sessions.to_vec();
        }

        let tag_set: HashSet<&str> = active.iter().map(String::as_str).collect();
        sessions
            .iter()
            .filter(|session| {
                tag_set.contains(session.level.as_str())
                    || tag_set.contains(session.age_group.as_str())
            })
            .cloned()
            .collect()
    }

    /// Generates the selectable options for one category.
    ///
    /// Counts are taken over the full unfiltered list so option counts do
    /// not shrink while filtering. Labels come from `label_for`; the
    /// result is ordered by label under the given collator.
    pub fn generate_options(
        &self,
        sessions: &[TrainingSession],
        category: FilterCategory,
        label_for: impl Fn(&str) -> String,
        collator: &dyn Collator,
    ) -> Vec<FilterOption> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for session in sessions {
            let value = category.value_of(session);
            match counts.iter_mut().find(|(v, _)| v == value) {
                Some(entry) => entry.1 += 1,
                None => counts.push((value.to_string(), 1)),
            }
        }

        let mut options: Vec<FilterOption> = counts
            .into_iter()
            .map(|(value, count)| FilterOption {
                label: label_for(&value),
                value,
                count,
            })
            .collect();

        options.sort_by(|a, b| collator.compare(&a.label, &b.label));
        options
    }
}

/// Removes duplicate tags, keeping the first occurrence order.
fn dedup(tags: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collation::GermanCollator;
    use crate::content::{DayOfWeek, ProgramType};
    use crate::storage::MemoryStore;
    use crate::traits::StorageError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(id: &str, level: &str, age_group: &str) -> TrainingSession {
        TrainingSession {
            id: id.to_string(),
            program_type: ProgramType::Taekwondo,
            day_of_week: DayOfWeek::Monday,
            start_time: "17:00".to_string(),
            end_time: "18:30".to_string(),
            location: "Sporthalle".to_string(),
            instructor: None,
            level: level.to_string(),
            age_group: age_group.to_string(),
            max_participants: None,
            notes: None,
        }
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Store whose writes always fail, for the rollback contract.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_set_and_read_back() {
        let mut store = FilterStore::new(MemoryStore::new());
        assert!(store.set(tags(&["beginner", "kids"])));
        assert_eq!(store.selected(), tags(&["beginner", "kids"]).as_slice());
        assert_eq!(store.count(), 2);
        assert!(store.is_selected("beginner"));
        assert!(!store.is_selected("adults"));
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let mut store = FilterStore::new(MemoryStore::new());
        assert!(store.set(tags(&["kids", "beginner", "kids"])));
        assert_eq!(store.selected(), tags(&["kids", "beginner"]).as_slice());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = FilterStore::new(MemoryStore::new());
        assert!(store.add("beginner"));
        assert!(store.add("beginner"));
        assert_eq!(store.selected(), tags(&["beginner"]).as_slice());
    }

    #[test]
    fn test_remove_missing_tag_succeeds() {
        let mut store = FilterStore::new(MemoryStore::new());
        store.set(tags(&["beginner"]));

        assert!(store.remove("adults"));
        assert_eq!(store.selected(), tags(&["beginner"]).as_slice());

        assert!(store.remove("beginner"));
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut store = FilterStore::new(MemoryStore::new());
        store.set(tags(&["beginner", "kids"]));
        assert!(store.clear());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_persistence_failure_rolls_back() {
        let mut store = FilterStore::new(BrokenStore);
        assert!(!store.set(tags(&["beginner"])));
        assert!(store.selected().is_empty());

        assert!(!store.add("kids"));
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_initialize_restores_persisted_state() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                FILTER_STORAGE_KEY,
                r#"{"version":1,"selectedFilters":["beginner","kids"],"isPanelExpanded":true}"#,
            )
            .unwrap();

        let mut store = FilterStore::new(backend);
        let restored = store.initialize();
        assert_eq!(restored, tags(&["beginner", "kids"]));
        assert!(store.panel_expanded());
    }

    #[test]
    fn test_initialize_rejects_wrong_version() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                FILTER_STORAGE_KEY,
                r#"{"version":7,"selectedFilters":["beginner"],"isPanelExpanded":false}"#,
            )
            .unwrap();

        let mut store = FilterStore::new(backend);
        assert!(store.initialize().is_empty());
    }

    #[test]
    fn test_initialize_rejects_wrong_shape() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                FILTER_STORAGE_KEY,
                r#"{"programType":"taekwondo","searchText":"abc"}"#,
            )
            .unwrap();

        let mut store = FilterStore::new(backend);
        assert!(store.initialize().is_empty());

        let mut backend = MemoryStore::new();
        backend.set(FILTER_STORAGE_KEY, "not json").unwrap();
        let mut store = FilterStore::new(backend);
        assert!(store.initialize().is_empty());
    }

    #[test]
    fn test_apply_with_empty_selection_passes_everything() {
        let store = FilterStore::new(MemoryStore::new());
        let sessions = vec![
            session("a", "beginner", "kids"),
            session("b", "advanced", "adults"),
        ];

        let result = store.apply(&sessions, None);
        assert_eq!(result, sessions);
    }

    #[test]
    fn test_apply_uses_or_semantics_without_duplicates() {
        let store = FilterStore::new(MemoryStore::new());
        let sessions = vec![
            session("a", "beginner", "adults"),
            session("b", "advanced", "adults"),
            session("c", "advanced", "kids"),
        ];

        // "beginner" matches the level of a, "adults" matches the age
        // group of a and b; a appears once.
        let result = store.apply(&sessions, Some(&tags(&["beginner", "adults"])));
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_apply_scenario_kids_filter() {
        let store = FilterStore::new(MemoryStore::new());
        let sessions = vec![
            session("first", "beginner", "kids"),
            session("second", "advanced", "adults"),
        ];

        let result = store.apply(&sessions, Some(&tags(&["kids"])));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "first");
    }

    #[test]
    fn test_generate_options_counts_and_orders_by_german_label() {
        let store = FilterStore::new(MemoryStore::new());
        let sessions = vec![
            session("a", "dwarves", "kids"),
            session("b", "practice", "kids"),
            session("c", "starters", "adults"),
            session("d", "starters", "kids"),
        ];

        // Labels chosen to exercise German collation: Anfänger < Übung <
        // Zwerge even though the raw values sort differently.
        let label_for = |value: &str| -> String {
            match value {
                "starters" => "Anfänger".to_string(),
                "practice" => "Übung".to_string(),
                "dwarves" => "Zwerge".to_string(),
                other => other.to_string(),
            }
        };

        let options = store.generate_options(
            &sessions,
            FilterCategory::Level,
            label_for,
            &GermanCollator::new(),
        );

        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Anfänger", "Übung", "Zwerge"]);

        let starters = options.iter().find(|o| o.value == "starters").unwrap();
        assert_eq!(starters.count, 2);
        let dwarves = options.iter().find(|o| o.value == "dwarves").unwrap();
        assert_eq!(dwarves.count, 1);
    }

    #[test]
    fn test_generate_options_scenario_one_entry_per_level() {
        let store = FilterStore::new(MemoryStore::new());
        let sessions = vec![
            session("a", "beginner", "kids"),
            session("b", "advanced", "adults"),
        ];

        let options = store.generate_options(
            &sessions,
            FilterCategory::Level,
            |value| value.to_string(),
            &GermanCollator::new(),
        );

        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.count == 1));
    }

    #[test]
    fn test_subscribers_see_every_successful_change() {
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = FilterStore::new(MemoryStore::new());
        store.subscribe(move |selection| sink.borrow_mut().push(selection.to_vec()));

        store.initialize();
        store.add("beginner");
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![Vec::<String>::new(), tags(&["beginner"]), Vec::new()]
        );
    }

    #[test]
    fn test_panel_expansion_round_trips_through_storage() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                FILTER_STORAGE_KEY,
                r#"{"version":1,"selectedFilters":[],"isPanelExpanded":false}"#,
            )
            .unwrap();

        let mut store = FilterStore::new(backend);
        store.initialize();
        assert!(!store.panel_expanded());

        assert!(store.set_panel_expanded(true));
        let raw = store.storage.get(FILTER_STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains("\"isPanelExpanded\":true"));
    }
}
