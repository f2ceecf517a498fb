//! Visual theme palettes for the clubdesk GUI.
//!
//! Defines the color palettes behind the dark and light preference and
//! helpers for deriving colors (hex parsing, HSL conversion for the
//! trainer-avatar gradients, alpha and brightness adjustments).

use egui::Color32;

use crate::theme_store::ThemePreference;

/// Complete color palette for one theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Accent colors (program badges, buttons, links)
    pub primary: Color32,
    pub accent: Color32,
    pub highlight: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub link: Color32,
}

/// Returns the palette for a theme preference.
pub fn palette(preference: ThemePreference) -> ThemeColors {
    match preference {
        ThemePreference::Dark => dark_palette(),
        ThemePreference::Light => light_palette(),
    }
}

/// The dark palette, the application default.
fn dark_palette() -> ThemeColors {
    ThemeColors {
        background: Color32::from_rgb(24, 26, 31),
        panel_background: Color32::from_rgb(30, 33, 39),
        extreme_background: Color32::from_rgb(16, 17, 20),

        text: Color32::from_rgb(225, 227, 230),
        text_dim: Color32::from_rgb(150, 155, 163),
        text_strong: Color32::from_rgb(255, 255, 255),

        selection: Color32::from_rgb(52, 74, 110),
        hover: Color32::from_rgb(48, 52, 61),
        border: Color32::from_rgb(82, 88, 99),

        primary: hex_to_color32("#2f6fde"),
        accent: hex_to_color32("#d64550"),
        highlight: hex_to_color32("#e8b33c"),
        success: hex_to_color32("#3fae6a"),
        warning: hex_to_color32("#e8913c"),
        danger: hex_to_color32("#e05252"),
        link: hex_to_color32("#6aa5f2"),
    }
}

/// The light palette.
fn light_palette() -> ThemeColors {
    ThemeColors {
        background: Color32::from_rgb(247, 247, 249),
        panel_background: Color32::from_rgb(252, 252, 253),
        extreme_background: Color32::from_rgb(255, 255, 255),

        text: Color32::from_rgb(32, 35, 40),
        text_dim: Color32::from_rgb(110, 115, 124),
        text_strong: Color32::from_rgb(0, 0, 0),

        selection: Color32::from_rgb(183, 205, 242),
        hover: Color32::from_rgb(228, 230, 234),
        border: Color32::from_rgb(176, 180, 188),

        primary: hex_to_color32("#1e56b8"),
        accent: hex_to_color32("#b9303c"),
        highlight: hex_to_color32("#a87b16"),
        success: hex_to_color32("#23824a"),
        warning: hex_to_color32("#b56a1d"),
        danger: hex_to_color32("#c03535"),
        link: hex_to_color32("#1d5fc4"),
    }
}

/// Applies a palette to egui visuals.
pub fn apply_theme(colors: &ThemeColors, visuals: &mut egui::Visuals) {
    visuals.panel_fill = colors.panel_background;
    visuals.window_fill = colors.background;
    visuals.extreme_bg_color = colors.extreme_background;
    visuals.faint_bg_color = colors.hover;

    visuals.override_text_color = Some(colors.text);

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = adjust_brightness(colors.primary, 1.2);

    visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    visuals.widgets.inactive.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = adjust_brightness(colors.hover, 1.1);
    visuals.widgets.active.bg_fill = colors.selection;

    visuals.hyperlink_color = colors.link;

    visuals.error_fg_color = colors.danger;
    visuals.warn_fg_color = colors.warning;
}

/// Converts a hex color string (like "#2f6fde") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Converts an HSL color to Color32.
///
/// `hue` in degrees (wrapped into [0, 360)), `saturation` and `lightness`
/// in [0, 1]. Used for the deterministic trainer-avatar gradients.
pub fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hue = hue.rem_euclid(360.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_sector = hue / 60.0;
    let x = chroma * (1.0 - (hue_sector % 2.0 - 1.0).abs());

    let (r, g, b) = match hue_sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    Color32::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 =
/// brighter, <1.0 = darker).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(hex_to_color32("00ff00"), Color32::from_rgb(0, 255, 0));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_color32(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_to_color32(120.0, 1.0, 0.5), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl_to_color32(240.0, 1.0, 0.5), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_hsl_wraps_hue() {
        assert_eq!(
            hsl_to_color32(360.0, 1.0, 0.5),
            hsl_to_color32(0.0, 1.0, 0.5)
        );
        assert_eq!(
            hsl_to_color32(-120.0, 1.0, 0.5),
            hsl_to_color32(240.0, 1.0, 0.5)
        );
    }

    #[test]
    fn test_hsl_grayscale_ignores_hue() {
        assert_eq!(
            hsl_to_color32(10.0, 0.0, 0.5),
            hsl_to_color32(200.0, 0.0, 0.5)
        );
        assert_eq!(hsl_to_color32(0.0, 0.0, 1.0), Color32::from_rgb(255, 255, 255));
        assert_eq!(hsl_to_color32(0.0, 0.0, 0.0), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_palettes_differ() {
        let dark = palette(ThemePreference::Dark);
        let light = palette(ThemePreference::Light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
    }
}
