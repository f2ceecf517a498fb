//! Application-level coordination and workflow management.
//!
//! Handles the high-level operations: loading a content directory in the
//! background, switching to the demo bundle, and exporting a downloadable
//! form to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use clubdesk::sample_bundle;

use crate::app::AppState;
use crate::io::{self, AsyncContentLoader, LoadResult};
use crate::state::ContentSource;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous loading of a content directory.
    ///
    /// Clears the current content immediately so the loading indicator is
    /// visible, and remembers the directory for the next start.
    pub fn open_content_dir(
        state: &mut AppState,
        loader: &mut AsyncContentLoader,
        dir: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_content_state();
        state.nav.set_content_dir(dir.clone());
        loader.start_load(dir, ctx);
    }

    /// Checks for loading completion and applies the result.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncContentLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { bundle, dir } => {
                info!(
                    "loaded content from {}: {} sessions, {} trainers",
                    dir.display(),
                    bundle.schedule.sessions.len(),
                    bundle.trainers.len()
                );
                state
                    .content
                    .install(bundle, ContentSource::Directory(dir));
                state.error_message = None;
                Self::refresh_filter_options(state);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading content: {}", error_msg));
                state.content.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Loads the built-in demo bundle synchronously.
    pub fn open_demo_content(state: &mut AppState) {
        state.reset_content_state();
        state.content.install(sample_bundle(), ContentSource::Demo);
        Self::refresh_filter_options(state);
    }

    /// Copies a downloadable form to the chosen destination.
    ///
    /// Errors land in the error message; a successful export is reported
    /// through the status message. Demo content has no files on disk, so
    /// exporting from it is rejected.
    pub fn export_form(state: &mut AppState, form_id: &str, destination: &Path) {
        let Some(form) = state.content.form_by_id(form_id) else {
            state.error_message = Some(format!("Unknown form: {}", form_id));
            return;
        };

        let Some(content_dir) = state.content.directory() else {
            state.error_message =
                Some("Demo content has no files to export; open a content folder first".to_string());
            return;
        };

        match io::export_form(content_dir, form, destination) {
            Ok(()) => {
                state.status_message =
                    Some(format!("Saved {} to {}", form.form_name, destination.display()));
                state.error_message = None;
            }
            Err(err) => {
                state.error_message = Some(format!("Export failed: {:#}", err));
            }
        }
    }

    /// Regenerates the filter options after content or language changed.
    pub fn refresh_filter_options(state: &mut AppState) {
        let language = state.nav.language();
        let sessions = state.content.sessions().to_vec();
        state.filter.refresh_options(&sessions, language);
    }
}
