//! Built-in bundle templates used when no custom set is available

use shared::{BundleTemplate, Requirement};

/// The three storefront default bundles, in display order
pub fn default_templates() -> Vec<BundleTemplate> {
    vec![
        BundleTemplate::new("muscle-gain", "Muscle Gain Pack", 15.0)
            .with_description("Protein + Creatine + BCAA for strength and growth")
            .with_item(Requirement::by_category("Protein"))
            .with_item(Requirement::by_category("Strength").with_keyword("creatine"))
            .with_item(Requirement::by_category("Recovery").with_keyword("BCAA")),
        BundleTemplate::new("preworkout-starter", "Pre-Workout Starter", 12.0)
            .with_description("Energy, focus, and recovery essentials")
            .with_item(Requirement::by_category("Pre-Workout"))
            .with_item(Requirement::by_category("Recovery").with_keyword("BCAA")),
        BundleTemplate::new("daily-health", "Daily Health Bundle", 10.0)
            .with_description("Multivitamin + Omega-3 for everyday wellness")
            .with_item(Requirement::by_category("Vitamines").with_keyword("multivitamin"))
            .with_item(Requirement::by_category("Performance").with_keyword("omega")),
    ]
}
