//! Home panel UI rendering.
//!
//! Hero section with the club profile, the program overview, the
//! call-to-action buttons, and the contact block.

use eframe::egui;
use egui::RichText;

use clubdesk::{label, ActionType, ProgramType};

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::state::Section;

/// Renders the home section.
pub fn render_home_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let colors = state.theme.colors();
    let language = state.nav.language();

    egui::ScrollArea::vertical().show(ui, |ui| {
        let Some(info) = state.content.club_info().cloned() else {
            ui.add_space(24.0);
            ui.label(RichText::new("—").color(colors.text_dim));
            return;
        };

        ui.add_space(16.0);
        ui.label(
            RichText::new(&info.name)
                .size(30.0)
                .strong()
                .color(colors.text_strong),
        );
        ui.label(RichText::new(&info.tagline).size(16.0).color(colors.primary));
        ui.add_space(8.0);
        ui.label(&info.description);
        ui.label(
            RichText::new(match language {
                clubdesk::Language::De => format!("Gegründet {}", info.founding_year),
                clubdesk::Language::En => format!("Founded in {}", info.founding_year),
            })
            .color(colors.text_dim),
        );

        ui.add_space(16.0);
        ui.separator();

        // Program overview
        ui.add_space(8.0);
        for (index, program) in info.programs.iter().enumerate() {
            let badge = ProgramType::ALL
                .get(index)
                .copied()
                .map(|p| color_mapping::program_color(p, &colors))
                .unwrap_or(colors.primary);
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").color(badge));
                ui.label(RichText::new(&program.name).strong());
                ui.label(RichText::new(&program.description).color(colors.text_dim));
            });
        }

        // Call-to-action row
        if !state.content.actions().is_empty() {
            ui.add_space(16.0);
            let actions = state.content.actions().to_vec();
            ui.horizontal_wrapped(|ui| {
                for action in &actions {
                    let fill = color_mapping::button_color(action.button_style, &colors);
                    let button = egui::Button::new(
                        RichText::new(&action.label).color(egui::Color32::WHITE),
                    )
                    .fill(fill);

                    if ui.add(button).clicked() {
                        activate(ui.ctx(), state, action.action_type, &action.destination);
                    }
                }
            });
        }

        // Contact block
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);
        ui.label(
            RichText::new(label(language, "contact.heading"))
                .strong()
                .size(18.0),
        );
        ui.label(&info.contact.address.street);
        ui.label(format!(
            "{} {}",
            info.contact.address.postal_code, info.contact.address.city
        ));
        ui.label(&info.contact.address.country);
        ui.add_space(4.0);
        ui.hyperlink_to(&info.contact.email, format!("mailto:{}", info.contact.email));
        ui.label(&info.contact.phone);
        ui.add_space(16.0);
    });
}

/// Performs a call-to-action: open a mail draft, open an external URL, or
/// jump to another section.
fn activate(ctx: &egui::Context, state: &mut AppState, action: ActionType, destination: &str) {
    match action {
        ActionType::Mailto => {
            ctx.open_url(egui::OpenUrl::new_tab(format!("mailto:{}", destination)));
        }
        ActionType::External => {
            ctx.open_url(egui::OpenUrl::new_tab(destination));
        }
        ActionType::Route => {
            if let Some(section) = Section::from_anchor(destination) {
                state.nav.set_section(section);
            }
        }
    }
}
