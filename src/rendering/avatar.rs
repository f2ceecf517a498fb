//! Trainer avatar placeholder rendering.
//!
//! The trainer directory has no guarantee that a photo exists for every
//! trainer, so every card carries a deterministic placeholder: a two-stop
//! vertical gradient derived from the name, with the initials on top.
//! The gradient is painted as a stack of interpolated strips.

use egui::{Color32, FontId, Rect, Sense, Vec2};

use clubdesk::{initials, LoadingStrategy, Trainer};

use crate::presentation::color_mapping;

/// Number of strips used to approximate the vertical gradient.
const GRADIENT_STEPS: usize = 16;

/// Allocates a square avatar and paints the placeholder for a trainer.
///
/// Eagerly loaded cards (above the fold) always get the full gradient.
/// Lazily loaded cards get it once their rect is on screen; while
/// scrolled away they only pay for a flat fill.
pub fn avatar(
    ui: &mut egui::Ui,
    trainer: &Trainer,
    size: f32,
    strategy: LoadingStrategy,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());

    let full_detail = strategy == LoadingStrategy::Eager || ui.is_rect_visible(rect);
    let (top, bottom) = color_mapping::avatar_gradient(&trainer.first_name, &trainer.last_name);

    if full_detail {
        paint_gradient(ui, rect, top, bottom);

        let text = initials(&trainer.first_name, &trainer.last_name);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            FontId::proportional(size * 0.38),
            Color32::WHITE,
        );
    } else {
        ui.painter().rect_filled(rect, 0.0, top);
    }

    response.on_hover_text(trainer.full_name())
}

fn paint_gradient(ui: &egui::Ui, rect: Rect, top: Color32, bottom: Color32) {
    let step_height = rect.height() / GRADIENT_STEPS as f32;

    for step in 0..GRADIENT_STEPS {
        let t = step as f32 / (GRADIENT_STEPS - 1) as f32;
        let strip = Rect::from_min_size(
            egui::pos2(rect.min.x, rect.min.y + step as f32 * step_height),
            Vec2::new(rect.width(), step_height + 0.5),
        );
        ui.painter().rect_filled(strip, 0.0, lerp_color(top, bottom, t));
    }
}

/// Linear interpolation between two colors.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| -> u8 {
        (x as f32 + (y as f32 - x as f32) * t).round() as u8
    };
    Color32::from_rgb(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
