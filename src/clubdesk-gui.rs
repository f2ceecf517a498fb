//! Clubdesk GUI application.
//!
//! Desktop companion app for a sports club: renders the club's static
//! content (class schedules, trainer directory, downloadable forms,
//! contact info) from a directory of JSON documents, with a persistent
//! dark/light theme and persistent schedule filters.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Focused state components (content, theme, filters, navigation)
//! - `domain/` - Schedule grouping and narrowing logic
//! - `presentation/` - Color mapping for programs, buttons, and avatars
//! - `rendering/` - Custom painting (trainer avatar placeholders)
//! - `io/` - Background content loading and form export
//! - `ui/` - Panel rendering and input handling
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod domain;
mod io;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::AsyncContentLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point.
fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Optional command-line argument: content directory to load on startup
    let initial_content_dir = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Clubdesk"),
        ..Default::default()
    };

    eframe::run_native(
        "Clubdesk",
        options,
        Box::new(move |cc| Ok(Box::new(ClubdeskApp::new(cc, initial_content_dir)))),
    )
}

/// The main Clubdesk application.
///
/// Most functionality lives in coordinators:
/// - `ApplicationCoordinator` handles content loading and form export
/// - `ThemeCoordinator` handles theme startup and per-frame application
/// - `PanelManager` handles UI panel layout and rendering
struct ClubdeskApp {
    /// Centralized application state
    state: AppState,
    /// Background content loader
    loader: AsyncContentLoader,
    /// Content directory to load on the first frame, if any
    pending_content_load: Option<PathBuf>,
    /// Whether the demo bundle should be loaded on the first frame
    pending_demo_load: bool,
}

impl ClubdeskApp {
    /// Creates the application, restoring persisted preferences.
    ///
    /// Load priority on startup: the directory given on the command line,
    /// then the directory used last time, then the built-in demo content.
    fn new(_cc: &eframe::CreationContext, initial_content_dir: Option<PathBuf>) -> Self {
        let mut state = AppState::new(app::open_preference_store());
        state.initialize();

        let pending_content_load =
            initial_content_dir.or_else(|| state.nav.content_dir().cloned());
        let pending_demo_load = pending_content_load.is_none();

        Self {
            state,
            loader: AsyncContentLoader::new(),
            pending_content_load,
            pending_demo_load,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenContentDirRequested(dir) => {
                ApplicationCoordinator::open_content_dir(
                    &mut self.state,
                    &mut self.loader,
                    dir,
                    ctx,
                );
            }
            PanelInteraction::DemoContentRequested => {
                ApplicationCoordinator::open_demo_content(&mut self.state);
            }
            PanelInteraction::ExportFormRequested { form_id, destination } => {
                ApplicationCoordinator::export_form(&mut self.state, &form_id, &destination);
            }
        }
    }
}

impl eframe::App for ClubdeskApp {
    /// Main update loop: checks background loading, applies the theme,
    /// kicks off the startup load, and renders all panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Startup content load (only on the first frame)
        if let Some(dir) = self.pending_content_load.take() {
            ApplicationCoordinator::open_content_dir(&mut self.state, &mut self.loader, dir, ctx);
        } else if self.pending_demo_load {
            self.pending_demo_load = false;
            ApplicationCoordinator::open_demo_content(&mut self.state);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
