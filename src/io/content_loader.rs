//! Asynchronous content loading.
//!
//! Reads a content directory on a background thread so the GUI stays
//! responsive, and hands the result back to the main thread through a
//! channel. There is no retry policy: one attempt, and a failure is
//! reported as an error message.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;

use clubdesk::{load_bundle, ContentBundle};

/// Shared flag describing an in-flight load operation.
struct LoadingState {
    in_progress: bool,
}

/// Result of a completed content loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded content bundle
        bundle: ContentBundle,
        /// The directory the bundle was loaded from
        dir: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of content directories.
pub struct AsyncContentLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<ContentBundle, String>>>,

    /// Directory currently being loaded
    pending_load_dir: Option<PathBuf>,
}

impl AsyncContentLoader {
    /// Creates a new loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState { in_progress: false })),
            loading_receiver: None,
            pending_load_dir: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state.lock().unwrap().in_progress
    }

    /// Starts loading a content directory on a background thread.
    ///
    /// Call [`AsyncContentLoader::check_completion`] once per frame to
    /// pick up the result.
    pub fn start_load(&mut self, dir: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_dir = Some(dir.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = load_bundle(&dir).map_err(|err| format!("{:#}", err));

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            // Notify the GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Checks whether background loading has completed.
    ///
    /// Returns the result exactly once; subsequent calls return
    /// [`LoadResult::None`] until the next load.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(bundle) => match self.pending_load_dir.take() {
                        Some(dir) => LoadResult::Success { bundle, dir },
                        None => LoadResult::Error("loading finished without a directory".into()),
                    },
                    Err(error_msg) => {
                        self.pending_load_dir = None;
                        LoadResult::Error(error_msg)
                    }
                };

                self.loading_receiver = None;
                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncContentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_starts_idle() {
        let loader = AsyncContentLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncContentLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_load_round_trip_on_background_thread() {
        let dir = tempfile::tempdir().unwrap();
        clubdesk::ContentWriter::new(dir.path())
            .write_bundle(&clubdesk::sample_bundle(), false)
            .unwrap();

        let ctx = egui::Context::default();
        let mut loader = AsyncContentLoader::new();
        loader.start_load(dir.path().to_path_buf(), &ctx);

        // The load is tiny; poll until the background thread reports.
        let mut result = LoadResult::None;
        for _ in 0..200 {
            result = loader.check_completion();
            if !matches!(result, LoadResult::None) {
                break;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }

        match result {
            LoadResult::Success { bundle, dir: loaded_dir } => {
                assert_eq!(loaded_dir, dir.path());
                assert!(!bundle.schedule.sessions.is_empty());
            }
            LoadResult::Error(err) => panic!("load failed: {}", err),
            LoadResult::None => panic!("load never completed"),
        }
    }

    #[test]
    fn test_missing_directory_reports_error() {
        let ctx = egui::Context::default();
        let mut loader = AsyncContentLoader::new();
        loader.start_load(PathBuf::from("/definitely/not/here"), &ctx);

        let mut result = LoadResult::None;
        for _ in 0..200 {
            result = loader.check_completion();
            if !matches!(result, LoadResult::None) {
                break;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }

        assert!(matches!(result, LoadResult::Error(_)));
    }
}
