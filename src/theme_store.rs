//! Theme preference state with persistence and change notification.
//!
//! Holds the dark/light preference, persists it as a raw string under a
//! single storage key, and notifies subscribers synchronously on every
//! successful change. Persistence failures never block the in-memory
//! state: the user keeps the theme they picked for this session even when
//! the preference file cannot be written.

use tracing::warn;

use crate::traits::KeyValueStore;

/// Storage key for the theme preference. The value is the raw string
/// "dark" or "light", no version wrapper.
pub const THEME_STORAGE_KEY: &str = "theme-preference";

/// Theme applied on first start when no valid preference is stored.
///
/// Deliberately fixed to dark, ignoring any ambient system preference.
pub const DEFAULT_THEME: ThemePreference = ThemePreference::Dark;

/// The two supported visual modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    /// Stable storage/display string, "dark" or "light".
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Parses a stored string; anything but "dark"/"light" is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }

    /// The other theme.
    pub fn opposite(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

/// Handle for removing a registered subscriber.
pub type SubscriptionId = u64;

/// Store for the current theme preference.
///
/// Subscribers are invoked synchronously on every successful mutation with
/// the new value; there is no replay, late subscribers read the current
/// value through [`ThemeStore::current`].
pub struct ThemeStore<S: KeyValueStore> {
    storage: S,
    current: ThemePreference,
    initialized: bool,
    next_subscription: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(ThemePreference)>)>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Creates a store over the given storage backend.
    ///
    /// The in-memory value starts at the default; call
    /// [`ThemeStore::initialize`] once at startup to adopt a persisted
    /// preference.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: DEFAULT_THEME,
            initialized: false,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    /// Returns the current in-memory preference. No I/O.
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Registers a callback invoked on every successful change.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(ThemePreference) + 'static,
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

    /// Resolves the startup theme: the stored preference when valid,
    /// otherwise the default.
    ///
    /// Idempotent: a second call returns the previously resolved value
    /// without touching storage. An invalid stored value is discarded and
    /// removed so the next start reads a clean slate. Subscribers are
    /// notified with the resolved value.
    pub fn initialize(&mut self) -> ThemePreference {
        if self.initialized {
            return self.current;
        }
        self.initialized = true;

        let resolved = match self.storage.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match ThemePreference::parse(&raw) {
                Some(theme) => theme,
                None => {
                    warn!("discarding invalid stored theme value {:?}", raw);
                    if let Err(err) = self.storage.remove(THEME_STORAGE_KEY) {
                        warn!("failed to clear invalid theme value: {}", err);
                    }
                    DEFAULT_THEME
                }
            },
            Ok(None) => DEFAULT_THEME,
            Err(err) => {
                warn!("failed to read theme preference: {}", err);
                DEFAULT_THEME
            }
        };

        self.current = resolved;
        self.notify();
        resolved
    }

    /// Applies a theme: persists it, updates the in-memory value, and
    /// notifies subscribers.
    ///
    /// A failed write is logged and swallowed: the in-memory state still
    /// advances and the call reports success, because the visible theme of
    /// the running session matters more than the preference surviving a
    /// restart.
    pub fn set(&mut self, theme: ThemePreference) -> bool {
        if let Err(err) = self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            warn!("failed to persist theme preference: {}", err);
        }
        self.current = theme;
        self.notify();
        true
    }

    /// Applies a theme given by name; unknown names are rejected and
    /// leave the state unchanged.
    pub fn set_named(&mut self, name: &str) -> bool {
        match ThemePreference::parse(name) {
            Some(theme) => self.set(theme),
            None => {
                warn!("ignoring unknown theme value {:?}", name);
                false
            }
        }
    }

    /// Switches to the opposite theme and returns the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.opposite();
        self.set(next);
        self.current
    }

    fn notify(&mut self) {
        let value = self.current;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::traits::{KeyValueStore, StorageError};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store whose writes always fail, for the fail-soft paths.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }
    }

    /// Store counting reads, for the idempotence check.
    struct CountingStore {
        inner: MemoryStore,
        reads: Rc<RefCell<usize>>,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            *self.reads.borrow_mut() += 1;
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_set_then_current_round_trip() {
        let mut store = ThemeStore::new(MemoryStore::new());
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert!(store.set(theme));
            assert_eq!(store.current(), theme);
        }
    }

    #[test]
    fn test_set_named_rejects_unknown_values() {
        let mut store = ThemeStore::new(MemoryStore::new());
        store.set(ThemePreference::Light);

        assert!(!store.set_named("purple"));
        assert_eq!(store.current(), ThemePreference::Light);

        assert!(store.set_named("dark"));
        assert_eq!(store.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut store = ThemeStore::new(MemoryStore::new());
        let original = store.current();

        let flipped = store.toggle();
        assert_eq!(flipped, original.opposite());

        let restored = store.toggle();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_initialize_defaults_to_dark_without_stored_value() {
        let mut store = ThemeStore::new(MemoryStore::new());
        assert_eq!(store.initialize(), ThemePreference::Dark);
    }

    #[test]
    fn test_initialize_adopts_valid_stored_value() {
        let mut backend = MemoryStore::new();
        backend.set(THEME_STORAGE_KEY, "light").unwrap();

        let mut store = ThemeStore::new(backend);
        assert_eq!(store.initialize(), ThemePreference::Light);
    }

    #[test]
    fn test_initialize_discards_corrupted_stored_value() {
        let mut backend = MemoryStore::new();
        backend.set(THEME_STORAGE_KEY, "not-a-theme").unwrap();

        let mut store = ThemeStore::new(backend);
        assert_eq!(store.initialize(), ThemePreference::Dark);
    }

    #[test]
    fn test_initialize_is_idempotent_and_reads_storage_once() {
        let reads = Rc::new(RefCell::new(0usize));
        let mut backend = CountingStore {
            inner: MemoryStore::new(),
            reads: Rc::clone(&reads),
        };
        backend.set(THEME_STORAGE_KEY, "light").unwrap();

        let mut store = ThemeStore::new(backend);
        let first = store.initialize();
        let second = store.initialize();

        assert_eq!(first, second);
        assert_eq!(*reads.borrow(), 1);
    }

    #[test]
    fn test_persistence_failure_still_updates_memory() {
        let mut store = ThemeStore::new(BrokenStore);
        assert!(store.set(ThemePreference::Light));
        assert_eq!(store.current(), ThemePreference::Light);

        // Toggle reports the new value even though nothing was written.
        assert_eq!(store.toggle(), ThemePreference::Dark);
    }

    #[test]
    fn test_subscribers_receive_every_successful_change() {
        let seen: Rc<RefCell<Vec<ThemePreference>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = ThemeStore::new(MemoryStore::new());
        store.subscribe(move |theme| sink.borrow_mut().push(theme));

        store.initialize();
        store.set(ThemePreference::Light);
        store.set_named("purple");
        store.toggle();

        assert_eq!(
            *seen.borrow(),
            vec![
                ThemePreference::Dark,
                ThemePreference::Light,
                ThemePreference::Dark,
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen: Rc<RefCell<Vec<ThemePreference>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = ThemeStore::new(MemoryStore::new());
        let id = store.subscribe(move |theme| sink.borrow_mut().push(theme));

        store.set(ThemePreference::Light);
        assert!(store.unsubscribe(id));
        store.set(ThemePreference::Dark);

        assert_eq!(*seen.borrow(), vec![ThemePreference::Light]);
        assert!(!store.unsubscribe(id));
    }
}
