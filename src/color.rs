use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Medal;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed series colors
// ---------------------------------------------------------------------------

/// Colour for a medal outcome; no-medal points render in a neutral blue.
pub fn medal_color(medal: Option<Medal>) -> Color32 {
    match medal {
        Some(Medal::Gold) => Color32::from_rgb(212, 175, 55),
        Some(Medal::Silver) => Color32::from_rgb(168, 168, 168),
        Some(Medal::Bronze) => Color32::from_rgb(205, 127, 50),
        None => Color32::LIGHT_BLUE,
    }
}

// ---------------------------------------------------------------------------
// Heatmap ramp
// ---------------------------------------------------------------------------

/// Sequential warm ramp for heatmap cells, `t` in 0..=1. Zero cells stay
/// near-white so populated cells stand out.
pub fn heat_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let hsl = Hsl::new(16.0, 0.85, 0.92 - 0.52 * t);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
