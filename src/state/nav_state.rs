//! Navigation and language state.
//!
//! Tracks the active section and the interface language, and remembers
//! the last content directory so the next start can reload it. Language
//! and directory are persisted as plain settings; losing them is
//! harmless, so write failures are logged and otherwise ignored.

use std::path::PathBuf;

use clubdesk::settings;
use clubdesk::Language;

use crate::app::PrefStore;

const LANGUAGE_KEY: &str = "ui-language";
const CONTENT_DIR_KEY: &str = "last-content-dir";

/// Top-level sections of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Schedule,
    Trainers,
    Downloads,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Schedule,
        Section::Trainers,
        Section::Downloads,
    ];

    /// Label key for the fallback navigation.
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::Schedule => "nav.schedule",
            Section::Trainers => "nav.trainers",
            Section::Downloads => "nav.downloads",
        }
    }

    /// Maps a navigation anchor like "#schedule" to a section.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        match anchor.trim_start_matches('#') {
            "home" => Some(Section::Home),
            "schedule" => Some(Section::Schedule),
            "trainers" => Some(Section::Trainers),
            "downloads" => Some(Section::Downloads),
            _ => None,
        }
    }
}

/// State for navigation, language, and the content-directory memory.
pub struct NavState {
    prefs: PrefStore,
    section: Section,
    language: Language,
    content_dir: Option<PathBuf>,
}

impl NavState {
    /// Creates the navigation state, restoring persisted preferences.
    pub fn new(prefs: PrefStore) -> Self {
        let language = settings::try_load_json(&prefs, LANGUAGE_KEY).unwrap_or_default();
        let content_dir = settings::try_load_json(&prefs, CONTENT_DIR_KEY);
        Self {
            prefs,
            section: Section::default(),
            language,
            content_dir,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches to the other interface language and persists the choice.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        if let Err(err) = settings::save_json(&mut self.prefs, LANGUAGE_KEY, &self.language) {
            tracing::warn!("failed to persist language preference: {}", err);
        }
        self.language
    }

    /// The content directory used last, if any.
    pub fn content_dir(&self) -> Option<&PathBuf> {
        self.content_dir.as_ref()
    }

    /// Remembers the content directory for the next start.
    pub fn set_content_dir(&mut self, dir: PathBuf) {
        if let Err(err) = settings::save_json(&mut self.prefs, CONTENT_DIR_KEY, &dir) {
            tracing::warn!("failed to persist content directory: {}", err);
        }
        self.content_dir = Some(dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_anchor() {
        assert_eq!(Section::from_anchor("#schedule"), Some(Section::Schedule));
        assert_eq!(Section::from_anchor("trainers"), Some(Section::Trainers));
        assert_eq!(Section::from_anchor("#news"), None);
    }
}
