//! Loaded content state.
//!
//! Holds the last successfully loaded content bundle and where it came
//! from. The bundle is replaced wholesale on every load; panels read it
//! through synchronous accessors and never mutate it.

use std::path::{Path, PathBuf};

use clubdesk::{
    CallToAction, ClubInfo, ContentBundle, DownloadableForm, NavigationItem, Trainer,
    TrainingSession,
};

/// Where the current content bundle came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Nothing has been loaded yet.
    None,
    /// Loaded from a content directory on disk.
    Directory(PathBuf),
    /// The built-in demo bundle.
    Demo,
}

/// State holding the loaded club content.
pub struct ContentState {
    bundle: ContentBundle,
    source: ContentSource,
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentState {
    /// Creates an empty content state.
    pub fn new() -> Self {
        Self {
            bundle: ContentBundle::default(),
            source: ContentSource::None,
        }
    }

    /// Installs a freshly loaded bundle.
    pub fn install(&mut self, bundle: ContentBundle, source: ContentSource) {
        self.bundle = bundle;
        self.source = source;
    }

    /// Clears all content, e.g. while a new directory is loading.
    pub fn clear(&mut self) {
        self.bundle = ContentBundle::default();
        self.source = ContentSource::None;
    }

    /// Where the current bundle came from.
    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// The content directory backing the bundle, when loaded from disk.
    pub fn directory(&self) -> Option<&Path> {
        match &self.source {
            ContentSource::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    /// Whether any content is present.
    pub fn is_loaded(&self) -> bool {
        self.source != ContentSource::None
    }

    pub fn club_info(&self) -> Option<&ClubInfo> {
        self.bundle.club_info.as_ref()
    }

    pub fn sessions(&self) -> &[TrainingSession] {
        &self.bundle.schedule.sessions
    }

    /// ISO date of the last schedule update, if the content carries one.
    pub fn schedule_updated(&self) -> Option<&str> {
        let date = self.bundle.schedule.last_updated.as_str();
        if date.is_empty() {
            None
        } else {
            Some(date)
        }
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.bundle.trainers
    }

    pub fn forms(&self) -> &[DownloadableForm] {
        &self.bundle.forms
    }

    pub fn actions(&self) -> &[CallToAction] {
        &self.bundle.actions
    }

    pub fn navigation(&self) -> &[NavigationItem] {
        &self.bundle.navigation
    }

    /// Finds a downloadable form by id.
    pub fn form_by_id(&self, id: &str) -> Option<&DownloadableForm> {
        self.bundle.forms.iter().find(|form| form.id == id)
    }
}
