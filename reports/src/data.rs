//! Literal product data: one 43g slice of bread.

use crate::types::{Accent, Dashboard, GroupProfile, ImpactLevel, NutritionFact, WarningList};

/// The dashboard shown by [`crate::components::NutritionPage`].
pub fn bread_slice() -> Dashboard {
    Dashboard {
        heading: "Nutritional Overview".into(),
        serving: "Per Slice – 43g Serving".into(),
        facts: facts(),
        groups_heading: "Impact on Different Groups".into(),
        groups: groups(),
        warnings: warnings(),
    }
}

fn fact(
    label: &str,
    value: &str,
    unit: &str,
    daily_value_percent: Option<u16>,
    icon: &str,
    accent: Accent,
) -> NutritionFact {
    NutritionFact {
        label: label.into(),
        value: value.into(),
        unit: unit.into(),
        daily_value_percent,
        accent,
        icon: icon.into(),
    }
}

fn facts() -> Vec<NutritionFact> {
    vec![
        fact("Calories", "110", "kcal", None, "gauge", Accent::Red),
        fact("Total Fat", "2.5", "g", Some(3), "activity", Accent::Yellow),
        fact("Protein", "4", "g", None, "dumbbell", Accent::Blue),
        fact("Carbohydrates", "19", "g", Some(7), "wheat", Accent::Green),
        fact("Sodium", "230", "mg", Some(10), "sandwich", Accent::Purple),
        fact("Sugars", "0", "g", Some(0), "cookie", Accent::Pink),
    ]
}

/// Every literal profile carries both cautions and a recommendation; the
/// absent paths are only reached by other data.
fn group(
    title: &str,
    icon: &str,
    description: &str,
    cautions: &str,
    recommendation: &str,
    impact: ImpactLevel,
) -> GroupProfile {
    GroupProfile {
        title: title.into(),
        icon: icon.into(),
        description: description.into(),
        cautions: Some(cautions.into()),
        recommendation: Some(recommendation.into()),
        impact,
    }
}

fn groups() -> Vec<GroupProfile> {
    vec![
        group(
            "Children (3-12 years)",
            "baby",
            "Provides essential nutrients for growth and development including protein, fiber, calcium, and iron.",
            "Sodium content (230mg per slice) may be high for younger children if consumed in large quantities.",
            "Suitable in moderation, monitor overall sodium intake.",
            ImpactLevel::Moderate,
        ),
        group(
            "Adults (13-60 years)",
            "users",
            "Provides complex carbohydrates and fiber for sustained energy and digestive health.",
            "Monitor sodium intake, especially with high-sodium diets.",
            "Safe as part of a balanced diet. Pair with protein and healthy fats.",
            ImpactLevel::Good,
        ),
        group(
            "Older Adults (60-70 years)",
            "brain",
            "Contains fiber for digestion and cholesterol control, plus iron and calcium for bone health.",
            "Those with hypertension or kidney disease should limit sodium intake.",
            "Suitable in moderation with other fiber-rich, low-sodium foods.",
            ImpactLevel::Moderate,
        ),
        group(
            "Pregnant Women",
            "baby",
            "Provides protein for fetal growth and fiber to support digestion.",
            "Limited calcium and iron content - supplementation may be needed.",
            "Safe as part of balanced diet with prenatal vitamins.",
            ImpactLevel::Good,
        ),
        group(
            "People with Diabetes",
            "activity",
            "Contains no added sugars and fiber helps moderate blood sugar response.",
            "Contains 19g total carbohydrates - count in meal planning.",
            "Safe in moderation, pair with protein or healthy fats.",
            ImpactLevel::Good,
        ),
        group(
            "High Cholesterol",
            "heart",
            "Low in fat with no saturated fat, contains beneficial fiber.",
            "Consider adding more fiber-rich foods alongside.",
            "Safe and beneficial when part of a heart-healthy diet.",
            ImpactLevel::Good,
        ),
    ]
}

/// Warning lines, in display order.
pub const WARNINGS: [&str; 4] = [
    "People with gluten intolerance or celiac disease",
    "People with sesame allergy",
    "Individuals on strict low-sodium diets",
    "Children under 3 years old (limited portions only)",
];

fn warnings() -> WarningList {
    WarningList {
        heading: "Who Should Avoid This Bread".into(),
        items: WARNINGS.iter().map(|w| (*w).to_string()).collect(),
    }
}
