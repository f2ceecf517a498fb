pub mod traits;
pub mod storage;
pub mod settings;
pub mod collation;
pub mod labels;
pub mod content;
pub mod writer;
pub mod sample;
pub mod theme;
pub mod theme_store;
pub mod filter_store;
pub mod trainers;

// Export traits
pub use traits::{Collator, KeyValueStore, StorageError};

// Export storage backends
pub use storage::{FileStore, MemoryStore};

// Export collation
pub use collation::GermanCollator;

// Export labels
pub use labels::{day_label, filter_label, label, program_label, Language};

// Export content model
pub use content::{
    load_bundle, ActionType, Address, ButtonStyle, CallToAction, ClubInfo, ContactInfo,
    ContentBundle, DayOfWeek, DownloadableForm, FormCategory, NavigationItem, ProgramInfo,
    ProgramType, SocialMediaLink, Trainer, TrainingSchedule, TrainingSession,
};

// Export content writer and sample data
pub use sample::sample_bundle;
pub use writer::ContentWriter;

// Export theme support
pub use theme::{
    adjust_brightness, apply_theme, hex_to_color32, hsl_to_color32, palette, with_alpha,
    ThemeColors,
};

// Export stores
pub use filter_store::{
    FilterCategory, FilterOption, FilterStore, FILTER_STATE_VERSION, FILTER_STORAGE_KEY,
};
pub use theme_store::{ThemePreference, ThemeStore, DEFAULT_THEME, THEME_STORAGE_KEY};

// Export trainer helpers
pub use trainers::{
    gradient_hues, initials, loading_strategy, sort_trainers, LoadingStrategy, EAGER_LOAD_COUNT,
};
