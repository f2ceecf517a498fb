//! Header panel UI rendering.
//!
//! Top bar with the club name, section navigation, language and theme
//! toggles, and the content source controls.

use std::path::PathBuf;

use eframe::egui;
use egui::RichText;

use clubdesk::{label, ThemePreference};

use crate::app::AppState;
use crate::state::Section;

/// Result of user interaction with the header panel.
pub enum HeaderInteraction {
    /// User picked a content directory to load
    OpenContentDirRequested(PathBuf),
    /// User asked for the built-in demo content
    DemoContentRequested,
}

/// Renders the application header.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let language = state.nav.language();

    ui.horizontal(|ui| {
        let club_name = state
            .content
            .club_info()
            .map(|info| info.name.as_str())
            .unwrap_or("Clubdesk");
        ui.label(RichText::new(club_name).strong().size(18.0));

        ui.separator();

        render_navigation(ui, state);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("📂 …").on_hover_text(open_hint(language)).clicked() {
                let mut dialog = rfd::FileDialog::new();
                if let Some(dir) = state.nav.content_dir() {
                    dialog = dialog.set_directory(dir);
                } else if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }
                if let Some(dir) = dialog.pick_folder() {
                    interaction = Some(HeaderInteraction::OpenContentDirRequested(dir));
                }
            }

            if ui.button("Demo").clicked() {
                interaction = Some(HeaderInteraction::DemoContentRequested);
            }

            ui.separator();

            // Theme toggle shows the theme it switches to
            let theme_icon = match state.theme.preference() {
                ThemePreference::Dark => "☀",
                ThemePreference::Light => "🌙",
            };
            if ui.button(theme_icon).clicked() {
                state.theme.toggle();
            }

            // Language toggle shows the language it switches to
            let next_language = language.toggled();
            if ui
                .button(next_language.code().to_uppercase())
                .clicked()
            {
                state.nav.toggle_language();
                // Option labels are translated, regenerate them
                crate::app::ApplicationCoordinator::refresh_filter_options(state);
            }
        });
    });

    interaction
}

/// Renders the section navigation, preferring the content-provided
/// entries and falling back to the built-in sections.
fn render_navigation(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.nav.language();
    let active = state.nav.section();

    // Map each content entry's anchor onto a section; entries pointing
    // elsewhere (external links, unknown anchors) are skipped.
    let mut entries: Vec<(Section, String)> = state
        .content
        .navigation()
        .iter()
        .filter_map(|item| {
            Section::from_anchor(&item.route_or_anchor).map(|section| (section, item.label.clone()))
        })
        .collect();

    if entries.is_empty() {
        entries = Section::ALL
            .into_iter()
            .map(|section| (section, label(language, section.label_key()).to_string()))
            .collect();
    }

    for (section, item_label) in entries {
        if ui.selectable_label(active == section, item_label).clicked() {
            state.nav.set_section(section);
        }
    }
}

fn open_hint(language: clubdesk::Language) -> &'static str {
    match language {
        clubdesk::Language::De => "Inhaltsordner öffnen",
        clubdesk::Language::En => "Open content folder",
    }
}
