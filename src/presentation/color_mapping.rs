//! Color mapping for programs, buttons, and trainer avatars.
//!
//! Presentation logic separated from domain logic: which accent color a
//! program badge or call-to-action button gets, and the deterministic
//! two-stop gradient behind a trainer's photo placeholder.

use egui::Color32;

use clubdesk::{gradient_hues, hsl_to_color32, ButtonStyle, ProgramType, ThemeColors};

/// Returns the accent color for a program badge.
pub fn program_color(program: ProgramType, colors: &ThemeColors) -> Color32 {
    match program {
        ProgramType::Taekwondo => colors.primary,
        ProgramType::Zumba => colors.accent,
        ProgramType::Deepwork => colors.success,
    }
}

/// Returns the fill color for a call-to-action button.
pub fn button_color(style: ButtonStyle, colors: &ThemeColors) -> Color32 {
    match style {
        ButtonStyle::Primary => colors.primary,
        ButtonStyle::Accent => colors.accent,
        ButtonStyle::Warn => colors.warning,
    }
}

/// Returns the two gradient stops for a trainer's avatar placeholder.
///
/// Derived deterministically from the name so the same trainer keeps the
/// same colors across runs.
pub fn avatar_gradient(first_name: &str, last_name: &str) -> (Color32, Color32) {
    let (top_hue, bottom_hue) = gradient_hues(first_name, last_name);
    (
        hsl_to_color32(top_hue, 0.55, 0.45),
        hsl_to_color32(bottom_hue, 0.55, 0.35),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_gradient_is_stable() {
        let first = avatar_gradient("Hans", "Müller");
        let second = avatar_gradient("Hans", "Müller");
        assert_eq!(first, second);
    }

    #[test]
    fn test_avatar_gradient_stops_differ() {
        let (top, bottom) = avatar_gradient("Hans", "Müller");
        assert_ne!(top, bottom);
    }
}
