//! Downloads panel UI rendering.
//!
//! List of downloadable forms with category icon, size, revision date,
//! and a save-as export.

use std::path::PathBuf;

use eframe::egui;
use egui::RichText;

use clubdesk::{label, FormCategory};

use crate::app::AppState;
use crate::io;
use crate::utils::format_file_size;

/// Result of user interaction with the downloads panel.
pub enum DownloadsInteraction {
    /// User picked a destination for a form
    ExportFormRequested {
        form_id: String,
        destination: PathBuf,
    },
}

/// Renders the downloads section.
pub fn render_downloads_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
) -> Option<DownloadsInteraction> {
    let language = state.nav.language();
    let colors = state.theme.colors();
    let mut interaction = None;

    ui.add_space(8.0);
    ui.label(
        RichText::new(label(language, "downloads.heading"))
            .strong()
            .size(22.0),
    );
    ui.add_space(8.0);

    let forms = state.content.forms().to_vec();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for form in &forms {
            egui::Frame::group(ui.style())
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(category_icon(form.category)).size(20.0));

                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&form.form_name).strong());
                                ui.label(
                                    RichText::new(format!(
                                        "{} · {}",
                                        form.file_type.to_uppercase(),
                                        format_file_size(form.file_size)
                                    ))
                                    .color(colors.text_dim)
                                    .small(),
                                );
                            });
                            ui.label(&form.description);
                            if let Some(required_for) = &form.required_for {
                                ui.label(
                                    RichText::new(required_for).color(colors.highlight).small(),
                                );
                            }
                            ui.label(
                                RichText::new(format!(
                                    "{}: {}",
                                    label(language, "downloads.updated"),
                                    form.last_updated
                                ))
                                .color(colors.text_dim)
                                .small(),
                            );
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button(label(language, "downloads.save")).clicked() {
                                    let dialog = rfd::FileDialog::new()
                                        .set_directory(io::suggested_directory())
                                        .set_file_name(io::suggested_file_name(form));
                                    if let Some(destination) = dialog.save_file() {
                                        interaction =
                                            Some(DownloadsInteraction::ExportFormRequested {
                                                form_id: form.id.clone(),
                                                destination,
                                            });
                                    }
                                }
                            },
                        );
                    });
                });
            ui.add_space(4.0);
        }
        ui.add_space(16.0);
    });

    interaction
}

fn category_icon(category: FormCategory) -> &'static str {
    match category {
        FormCategory::Membership => "📝",
        FormCategory::Events => "📅",
        FormCategory::General => "📄",
    }
}
