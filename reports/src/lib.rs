//! # nutrition-report
//!
//! Leptos SSR renderer for a static nutrition dashboard.
//!
//! The dashboard shows the nutrition facts of one serving of a product, a
//! health impact assessment per demographic group, and a list of people who
//! should avoid the product. All values are literal; rendering is a pure
//! function from that data to an HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use nutrition_report::{render_dashboard, RenderOptions};
//!
//! let html = render_dashboard(&RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("110kcal"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for facts, profiles and warnings
//! - [`data`] - The literal product data
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`error`] - Rendering faults
//!
//! No reactive runtime or hydration is involved: views are turned into
//! strings with Leptos 0.8's `RenderHtml::to_html`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod data;
pub mod error;
pub mod styles;
pub mod types;

use components::DashboardDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Default document `<title>`.
pub const DEFAULT_TITLE: &str = "Nutrition Dashboard";

/// Render the complete dashboard document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
/// Output is identical for identical options.
///
/// # Example
///
/// ```rust
/// use nutrition_report::{render_dashboard, RenderOptions};
///
/// let options = RenderOptions {
///     title: "Bread".into(),
///     ..Default::default()
/// };
/// let html = render_dashboard(&options);
/// assert!(html.contains("<title>Bread</title>"));
/// ```
pub fn render_dashboard(options: &RenderOptions) -> String {
    tracing::debug!(title = %options.title, "rendering dashboard");

    let doc = view! { <DashboardDocument options=options.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Document-level settings that do not touch the page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document `<title>`
    pub title: String,
    /// Stylesheet appended after the built-in one
    pub extra_css: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            extra_css: None,
        }
    }
}
