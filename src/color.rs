use std::collections::BTreeMap;

use blooming_insights::{Attribute, Species};
use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed palettes
// ---------------------------------------------------------------------------

/// Line colour per attribute, green sepals to pink petals.
pub fn attribute_color(attribute: Attribute) -> Color32 {
    match attribute {
        Attribute::SepalLength => Color32::from_rgb(0x2E, 0x8B, 0x57),
        Attribute::SepalWidth => Color32::from_rgb(0x3C, 0xB3, 0x71),
        Attribute::PetalLength => Color32::from_rgb(0xFF, 0x69, 0xB4),
        Attribute::PetalWidth => Color32::from_rgb(0xFF, 0x14, 0x93),
    }
}

// ---------------------------------------------------------------------------
// Colour mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps each species to its gallery colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Species, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        let mapping = BTreeMap::from([
            (Species::Setosa, Color32::from_rgb(0xFF, 0x6B, 0x6B)),
            (Species::Versicolor, Color32::from_rgb(0x4E, 0xCD, 0xC4)),
            (Species::Virginica, Color32::from_rgb(0x45, 0xB7, 0xD1)),
        ]);
        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl ColorMap {
    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Colour at reduced opacity, for overlapping bars and points.
    pub fn translucent_for(&self, species: Species) -> Color32 {
        self.color_for(species).gamma_multiply(0.7)
    }
}

// ---------------------------------------------------------------------------
// Heatmap gradient
// ---------------------------------------------------------------------------

/// Sequential light-to-sea-green colour for a correlation in [-1, 1].
/// Undefined (NaN) cells are grey.
pub fn heatmap_color(value: f64) -> Color32 {
    if value.is_nan() {
        return Color32::GRAY;
    }
    let t = ((value.clamp(-1.0, 1.0) + 1.0) / 2.0) as f32;
    let hsl = Hsl::new(146.0, 0.5, 0.95 - 0.59 * t);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Black or white annotation text, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let [r, g, b, _] = background.to_array();
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
