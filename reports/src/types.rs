//! Dashboard data types.
//!
//! These types define the data model for the dashboard. They're designed to be:
//!
//! - **Serializable** - The literal product data can be exported as JSON
//! - **Clone-friendly** - Components take owned values without borrowing issues
//! - **Immutable in practice** - Built once from literals, read during one render
//!
//! # Example
//!
//! ```rust
//! use nutrition_report::types::{Accent, NutritionFact};
//!
//! let sodium = NutritionFact {
//!     label: "Sodium".into(),
//!     value: "230".into(),
//!     unit: "mg".into(),
//!     daily_value_percent: Some(10),
//!     accent: Accent::Purple,
//!     icon: "sandwich".into(),
//! };
//! assert_eq!(sodium.display_value(), "230mg");
//! assert_eq!(sodium.bar_fill(), Some(10));
//! ```

use serde::{Deserialize, Serialize};

/// Accent color token for a metric card badge and daily-value bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Red accent
    Red,
    /// Yellow accent
    Yellow,
    /// Blue accent
    Blue,
    /// Green accent
    Green,
    /// Purple accent
    Purple,
    /// Pink accent
    Pink,
}

impl Accent {
    /// All accents.
    pub const ALL: [Accent; 6] = [
        Accent::Red,
        Accent::Yellow,
        Accent::Blue,
        Accent::Green,
        Accent::Purple,
        Accent::Pink,
    ];

    /// CSS class carrying the accent background color.
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Red => "accent-red",
            Accent::Yellow => "accent-yellow",
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
            Accent::Pink => "accent-pink",
        }
    }
}

/// One nutrition fact shown as a metric card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionFact {
    /// Human-readable label (e.g. "Total Fat")
    pub label: String,
    /// Literal value as authored (e.g. "2.5")
    pub value: String,
    /// Unit suffix appended to the value (e.g. "g", "kcal")
    pub unit: String,
    /// Percentage of the recommended daily value, when known
    #[serde(default)]
    pub daily_value_percent: Option<u16>,
    /// Badge and bar color
    pub accent: Accent,
    /// Icon token resolved by [`crate::components::resolve_glyph`]
    pub icon: String,
}

impl NutritionFact {
    /// Value and unit joined without a separator ("110kcal").
    pub fn display_value(&self) -> String {
        format!("{}{}", self.value, self.unit)
    }

    /// Width of the daily-value bar in percent, capped at 100.
    ///
    /// `None` when the fact carries no daily value.
    pub fn bar_fill(&self) -> Option<u16> {
        self.daily_value_percent.map(|pct| pct.min(100))
    }

    /// Caption under the bar, showing the literal (uncapped) percentage.
    pub fn daily_value_caption(&self) -> Option<String> {
        self.daily_value_percent.map(|pct| format!("{}% DV", pct))
    }
}

/// Coarse suitability rating of the product for a demographic group.
///
/// Variant order is the display order of the indicator segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// Suitable
    Good,
    /// Suitable with care
    Moderate,
    /// Unsuitable
    Bad,
}

impl ImpactLevel {
    /// All levels in segment order.
    pub const ALL: [ImpactLevel; 3] = [ImpactLevel::Good, ImpactLevel::Moderate, ImpactLevel::Bad];

    /// Capitalized level name.
    pub fn name(self) -> &'static str {
        match self {
            ImpactLevel::Good => "Good",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::Bad => "Bad",
        }
    }

    /// Lowercase key used in CSS classes and data attributes.
    pub fn key(self) -> &'static str {
        match self {
            ImpactLevel::Good => "good",
            ImpactLevel::Moderate => "moderate",
            ImpactLevel::Bad => "bad",
        }
    }

    /// Indicator label, e.g. "Moderate Impact".
    pub fn label(self) -> String {
        format!("{} Impact", self.name())
    }
}

/// Health assessment of the product for one demographic group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupProfile {
    /// Group name (e.g. "Pregnant Women")
    pub title: String,
    /// Icon token for the title badge
    pub icon: String,
    /// Why the product matters for this group
    pub description: String,
    /// Things to watch out for; no block is rendered when absent or empty
    #[serde(default)]
    pub cautions: Option<String>,
    /// Serving advice; no line is rendered when absent or empty
    #[serde(default)]
    pub recommendation: Option<String>,
    /// Overall rating
    pub impact: ImpactLevel,
}

impl GroupProfile {
    /// Cautions text if there is anything to show.
    pub fn visible_cautions(&self) -> Option<&str> {
        non_empty(self.cautions.as_deref())
    }

    /// Recommendation text if there is anything to show.
    pub fn visible_recommendation(&self) -> Option<&str> {
        non_empty(self.recommendation.as_deref())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Ordered warnings rendered verbatim in the alert region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningList {
    /// Alert heading
    pub heading: String,
    /// Warning lines, in display order
    pub items: Vec<String>,
}

/// Everything the page shows for one product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Page heading
    pub heading: String,
    /// Serving caption under the heading
    pub serving: String,
    /// Metric cards, in display order
    pub facts: Vec<NutritionFact>,
    /// Heading above the group grid
    pub groups_heading: String,
    /// Group cards, in display order
    pub groups: Vec<GroupProfile>,
    /// Alert region below the grids
    pub warnings: WarningList,
}

impl Dashboard {
    /// Pretty-printed JSON export of the dashboard data.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fact(daily_value_percent: Option<u16>) -> NutritionFact {
        NutritionFact {
            label: "Iron".into(),
            value: "1.2".into(),
            unit: "mg".into(),
            daily_value_percent,
            accent: Accent::Red,
            icon: "heart".into(),
        }
    }

    #[test]
    fn bar_fill_is_capped_but_caption_is_literal() {
        let f = fact(Some(140));
        assert_eq!(f.bar_fill(), Some(100));
        assert_eq!(f.daily_value_caption().as_deref(), Some("140% DV"));
    }

    #[test]
    fn missing_daily_value_has_no_bar() {
        let f = fact(None);
        assert_eq!(f.bar_fill(), None);
        assert_eq!(f.daily_value_caption(), None);
    }

    #[test]
    fn impact_labels() {
        let labels: Vec<String> = ImpactLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(labels, vec!["Good Impact", "Moderate Impact", "Bad Impact"]);
    }

    #[test]
    fn blank_optional_text_is_hidden() {
        let profile = GroupProfile {
            title: "Athletes".into(),
            icon: "dumbbell".into(),
            description: "Quick carbohydrates.".into(),
            cautions: Some("   ".into()),
            recommendation: None,
            impact: ImpactLevel::Good,
        };
        assert_eq!(profile.visible_cautions(), None);
        assert_eq!(profile.visible_recommendation(), None);
    }

    #[test]
    fn impact_level_serializes_lowercase() {
        let json = serde_json::to_string(&ImpactLevel::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let back: ImpactLevel = serde_json::from_str("\"bad\"").unwrap();
        assert_eq!(back, ImpactLevel::Bad);
    }
}
