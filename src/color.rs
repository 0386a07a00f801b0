use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed outcome colors
// ---------------------------------------------------------------------------

/// Red used for failure slices.
pub const FAILURE_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
/// Green used for success slices.
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

const SATURATION: f32 = 0.75;
const LIGHTNESS: f32 = 0.55;

/// `n` visually distinct colours from evenly spaced hues.
pub fn spaced_hues(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, SATURATION, LIGHTNESS).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Label → colour assignment
// ---------------------------------------------------------------------------

/// Stable colour assignment for a set of category labels (booster version
/// categories in the scatter legend, sites in the aggregate bar chart).
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
    fallback: Color32,
}

impl CategoryColors {
    /// Assign one hue per label, in the given (sorted) label order.
    pub fn new(labels: &[String]) -> Self {
        let hues = spaced_hues(labels.len());
        let mapping = labels
            .iter()
            .cloned()
            .zip(hues)
            .collect::<BTreeMap<String, Color32>>();
        CategoryColors {
            mapping,
            fallback: Color32::GRAY,
        }
    }

    pub fn get(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::{spaced_hues, CategoryColors};
    use eframe::egui::Color32;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let colors = spaced_hues(5);
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_label_gets_fallback() {
        let colors = CategoryColors::new(&["B4".to_string(), "FT".to_string()]);
        assert_ne!(colors.get("B4"), Color32::GRAY);
        assert_eq!(colors.get("no-such-category"), Color32::GRAY);
    }
}
