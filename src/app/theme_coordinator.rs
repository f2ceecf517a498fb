//! Theme application for the GUI.
//!
//! The theme store owns persistence and notification; this coordinator
//! only maps the current preference onto egui visuals each frame. The
//! startup value is resolved once by `AppState::initialize`, so applying
//! it here never re-reads storage.

use clubdesk::{apply_theme, palette};

use crate::app::AppState;

/// Applies the current theme to the egui context.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure the theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let preference = state.theme.preference();
        let colors = palette(preference);

        let mut visuals = if preference.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        apply_theme(&colors, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
