//! Footer panel UI rendering.
//!
//! Bottom bar with the club's contact line, social links, and the
//! current load status or error.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::state::ContentSource;

/// Renders the footer panel at the bottom of the window.
pub fn render_footer(ui: &mut egui::Ui, state: &AppState) {
    let colors = state.theme.colors();

    ui.horizontal(|ui| {
        if let Some(info) = state.content.club_info() {
            ui.label(RichText::new(&info.name).strong());
            ui.label(format!(
                "{}, {} {}",
                info.contact.address.street,
                info.contact.address.postal_code,
                info.contact.address.city
            ));
            ui.hyperlink_to(&info.contact.email, format!("mailto:{}", info.contact.email));
            ui.label(&info.contact.phone);

            for link in &info.social_media {
                ui.hyperlink_to(&link.platform, &link.url);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(error) = &state.error_message {
                ui.label(RichText::new(error).color(colors.danger));
            } else if let Some(status) = &state.status_message {
                ui.label(RichText::new(status).color(colors.success));
            } else if state.content.is_loaded() {
                let origin = match state.content.source() {
                    ContentSource::Directory(dir) => dir.display().to_string(),
                    _ => "Demo".to_string(),
                };
                ui.label(
                    RichText::new(format!(
                        "{} · {} Sessions · {} Trainer",
                        origin,
                        state.content.sessions().len(),
                        state.content.trainers().len()
                    ))
                    .color(colors.text_dim),
                );
            }
        });
    });
}
