//! Schedule panel UI rendering.
//!
//! Weekly training schedule with the filter controls: persisted
//! level/age-group tags, plus session-only program and text narrowing.

use eframe::egui;
use egui::RichText;

use clubdesk::{day_label, filter_label, label, program_label, FilterCategory, ProgramType};

use crate::app::AppState;
use crate::domain::schedule;
use crate::presentation::color_mapping;
use crate::utils::format_time_range;

/// Renders the schedule section.
pub fn render_schedule_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.nav.language();
    let colors = state.theme.colors();

    ui.add_space(8.0);
    ui.label(
        RichText::new(label(language, "schedule.heading"))
            .strong()
            .size(22.0),
    );
    if let Some(updated) = state.content.schedule_updated() {
        ui.label(
            RichText::new(format!("{}: {}", label(language, "downloads.updated"), updated))
                .color(colors.text_dim),
        );
    }
    ui.add_space(8.0);

    render_program_row(ui, state);
    render_search_row(ui, state);
    render_filter_panel(ui, state);

    ui.add_space(8.0);
    ui.separator();

    // Narrow the sessions: persisted tags first, then view-only narrowing
    let sessions = state.filter.apply(state.content.sessions());
    let sessions = schedule::narrow_by_program(&sessions, state.filter.program);
    let sessions = schedule::narrow_by_search(&sessions, &state.filter.search_text);

    if sessions.is_empty() {
        ui.add_space(16.0);
        ui.label(RichText::new(label(language, "schedule.no_sessions")).color(colors.text_dim));
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (day, on_day) in schedule::group_by_day(&sessions) {
            ui.add_space(10.0);
            ui.label(
                RichText::new(day_label(language, day))
                    .strong()
                    .size(16.0),
            );

            egui::Grid::new(("schedule_day", day.key()))
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for session in &on_day {
                        ui.label(format_time_range(&session.start_time, &session.end_time));
                        ui.label(
                            RichText::new(program_label(language, session.program_type))
                                .color(color_mapping::program_color(
                                    session.program_type,
                                    &colors,
                                ))
                                .strong(),
                        );
                        ui.label(format!(
                            "{} · {}",
                            filter_label(language, FilterCategory::Level.key(), &session.level),
                            filter_label(
                                language,
                                FilterCategory::AgeGroup.key(),
                                &session.age_group
                            )
                        ));
                        ui.label(&session.location);
                        ui.label(
                            RichText::new(session.instructor.as_deref().unwrap_or(""))
                                .color(colors.text_dim),
                        );
                        ui.end_row();
                    }
                });
        }
        ui.add_space(16.0);
    });
}

/// Program narrowing row: all programs, or one of them.
fn render_program_row(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.nav.language();

    ui.horizontal(|ui| {
        if ui
            .selectable_label(state.filter.program.is_none(), label(language, "program.all"))
            .clicked()
        {
            state.filter.program = None;
        }
        for program in ProgramType::ALL {
            let selected = state.filter.program == Some(program);
            if ui
                .selectable_label(selected, program_label(language, program))
                .clicked()
            {
                state.filter.program = if selected { None } else { Some(program) };
            }
        }
    });
}

/// Search row: free-text narrowing over location, instructor, and notes.
fn render_search_row(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.nav.language();

    ui.horizontal(|ui| {
        ui.label(label(language, "schedule.filter.search"));
        ui.add(
            egui::TextEdit::singleline(&mut state.filter.search_text).desired_width(220.0),
        );
        if !state.filter.search_text.is_empty() && ui.button("✖").clicked() {
            state.filter.search_text.clear();
        }
    });
}

/// The persisted tag filter: toggle button, checkboxes with counts, and
/// the clear control.
fn render_filter_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.nav.language();
    let active = state.filter.count();

    ui.horizontal(|ui| {
        let heading = if active > 0 {
            format!("{} ({})", label(language, "schedule.filter.heading"), active)
        } else {
            label(language, "schedule.filter.heading").to_string()
        };

        let expanded = state.filter.panel_expanded();
        let arrow = if expanded { "⏷" } else { "⏵" };
        if ui.button(format!("{} {}", arrow, heading)).clicked() {
            state.filter.set_panel_expanded(!expanded);
        }

        if active > 0 && ui.button(label(language, "schedule.filter.clear")).clicked() {
            state.filter.clear();
        }
    });

    if !state.filter.panel_expanded() {
        return;
    }

    ui.add_space(4.0);
    ui.horizontal_top(|ui| {
        render_option_column(
            ui,
            state,
            FilterCategory::Level,
            label(language, "schedule.filter.levels"),
        );
        ui.add_space(24.0);
        render_option_column(
            ui,
            state,
            FilterCategory::AgeGroup,
            label(language, "schedule.filter.age_groups"),
        );
    });
}

fn render_option_column(
    ui: &mut egui::Ui,
    state: &mut AppState,
    category: FilterCategory,
    heading: &str,
) {
    let options = match category {
        FilterCategory::Level => state.filter.level_options().to_vec(),
        FilterCategory::AgeGroup => state.filter.age_options().to_vec(),
    };

    ui.vertical(|ui| {
        ui.label(RichText::new(heading).strong());
        for option in &options {
            let mut checked = state.filter.is_selected(&option.value);
            let text = format!("{} ({})", option.label, option.count);
            if ui.checkbox(&mut checked, text).changed() {
                state.filter.toggle_tag(&option.value);
            }
        }
    });
}
