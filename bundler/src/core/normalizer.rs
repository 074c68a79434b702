//! Free-text category labels mapped onto the storefront taxonomy

use shared::Category;

/// Substring rules checked in order; the first hit wins.
const RULES: &[(&[&str], Category)] = &[
    (&["protein", "whey"], Category::Protein),
    (&["pre"], Category::PreWorkout),
    (&["recover", "bcaa"], Category::Recovery),
    (&["strength", "creatin"], Category::Strength),
    (&["vitamin"], Category::Vitamines),
    (&["omega", "fish"], Category::Performance),
];

/// Normalize a raw category label. Never fails; unknown labels map to Performance.
pub fn normalize(raw_label: &str) -> Category {
    let label = raw_label.to_lowercase();

    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| label.contains(needle)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Performance)
}
