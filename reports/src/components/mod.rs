//! Leptos UI components for rendering the dashboard.
//!
//! Every component is a stateless `#[component]` function from owned input
//! data to markup. Nothing is reactive; the tree is rendered once to HTML.
//!
//! # Component Hierarchy
//!
//! ```text
//! DashboardDocument
//! └── NutritionPage (literal data)
//!     └── DashboardView
//!         ├── MetricDisplay × 6
//!         ├── GroupAssessment × 6
//!         │   └── ImpactIndicator
//!         └── WarningRegion
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_dashboard`], but
//! can be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use nutrition_report::components::ImpactIndicator;
//! use nutrition_report::types::ImpactLevel;
//!
//! view! { <ImpactIndicator level=ImpactLevel::Moderate /> }
//! ```

mod document;
mod group_assessment;
mod icons;
mod impact_indicator;
mod metric_display;
mod page;

pub use document::DashboardDocument;
pub use group_assessment::GroupAssessment;
pub use icons::*;
pub use impact_indicator::ImpactIndicator;
pub use metric_display::MetricDisplay;
pub use page::{DashboardView, NutritionPage, WarningRegion};
