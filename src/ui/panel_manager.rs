//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, section panels, footer) and funnels
//! the interactions that need the application coordinator back to the
//! main loop.

use eframe::egui;

use crate::app::AppState;
use crate::io::AsyncContentLoader;
use crate::state::Section;
use crate::ui::{downloads_panel, footer, header, home_panel, schedule_panel, trainers_panel};

/// Result of panel interactions handled by the application coordinator.
pub enum PanelInteraction {
    /// User picked a content directory to load
    OpenContentDirRequested(std::path::PathBuf),
    /// User asked for the built-in demo content
    DemoContentRequested,
    /// User picked a destination for a downloadable form
    ExportFormRequested {
        form_id: String,
        destination: std::path::PathBuf,
    },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncContentLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenContentDirRequested(dir) => {
                        PanelInteraction::OpenContentDirRequested(dir)
                    }
                    header::HeaderInteraction::DemoContentRequested => {
                        PanelInteraction::DemoContentRequested
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            footer::render_footer(ui, state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if loader.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            match state.nav.section() {
                Section::Home => home_panel::render_home_panel(ui, state),
                Section::Schedule => schedule_panel::render_schedule_panel(ui, state),
                Section::Trainers => trainers_panel::render_trainers_panel(ui, state),
                Section::Downloads => {
                    if let Some(downloads_panel::DownloadsInteraction::ExportFormRequested {
                        form_id,
                        destination,
                    }) = downloads_panel::render_downloads_panel(ui, state)
                    {
                        interaction = Some(PanelInteraction::ExportFormRequested {
                            form_id,
                            destination,
                        });
                    }
                }
            }
        });

        interaction
    }
}
