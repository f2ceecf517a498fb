//! Trainers panel UI rendering.
//!
//! Directory of trainer cards in German alphabetical order, each with the
//! gradient photo placeholder, program badges, and special roles.

use eframe::egui;
use egui::RichText;

use clubdesk::{label, loading_strategy, program_label, with_alpha, EAGER_LOAD_COUNT};

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::avatar;

const CARD_WIDTH: f32 = 300.0;
const AVATAR_SIZE: f32 = 64.0;

/// Renders the trainer directory section.
pub fn render_trainers_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.nav.language();
    let colors = state.theme.colors();

    ui.add_space(8.0);
    ui.label(
        RichText::new(label(language, "trainers.heading"))
            .strong()
            .size(22.0),
    );
    ui.add_space(8.0);

    let trainers = state.content.trainers().to_vec();
    if trainers.is_empty() {
        ui.label(RichText::new(label(language, "trainers.load_error")).color(colors.text_dim));
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (index, trainer) in trainers.iter().enumerate() {
                let strategy = loading_strategy(index, EAGER_LOAD_COUNT);

                egui::Frame::group(ui.style())
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);
                        ui.horizontal_top(|ui| {
                            avatar::avatar(ui, trainer, AVATAR_SIZE, strategy);

                            ui.vertical(|ui| {
                                ui.label(RichText::new(trainer.full_name()).strong().size(16.0));

                                ui.horizontal_wrapped(|ui| {
                                    for program in &trainer.programs {
                                        let badge =
                                            color_mapping::program_color(*program, &colors);
                                        ui.label(
                                            RichText::new(program_label(language, *program))
                                                .color(badge)
                                                .background_color(with_alpha(badge, 26))
                                                .small(),
                                        );
                                    }
                                });

                                for role in &trainer.special_roles {
                                    ui.label(
                                        RichText::new(label(
                                            language,
                                            &format!("role.{}", role),
                                        ))
                                        .color(colors.highlight)
                                        .small(),
                                    );
                                }

                                if let Some(bio) = &trainer.bio {
                                    ui.label(RichText::new(bio).color(colors.text_dim).small());
                                }

                                if let Some(email) = &trainer.email {
                                    ui.hyperlink_to(email, format!("mailto:{}", email));
                                }
                            });
                        });
                    });
            }
        });
        ui.add_space(16.0);
    });
}
