//! CSS styles for the dashboard.
//!
//! The page is a static document with an inlined stylesheet; no external
//! fonts, scripts or images are loaded.
//!
//! # Customization
//!
//! To extend or override styles, pass extra CSS through
//! [`crate::RenderOptions::extra_css`]; it is emitted after this stylesheet.
//!
//! ```rust
//! use nutrition_report::styles::DASHBOARD_CSS;
//!
//! let my_css = ".metric-value { font-size: 2rem; }";
//! let combined = format!("{}\n{}", DASHBOARD_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```
//!
//! # Breakpoints
//!
//! - Metric grid: 1 column, 2 from 640px, 3 from 1024px, 4 from 1280px
//! - Group grid: 1 column, 2 from 768px

/// Complete CSS for the dashboard - light card layout.
pub const DASHBOARD_CSS: &str = r#"
:root {
    --bg-page: #f9fafb;
    --bg-card: #ffffff;
    --text-main: #111827;
    --text-muted: #4b5563;
    --text-faint: #6b7280;
    --track: #e5e7eb;
    --radius-card: 12px;
    --container-max: 1280px;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

    --red-500: #ef4444;
    --yellow-500: #eab308;
    --blue-500: #3b82f6;
    --green-500: #22c55e;
    --purple-500: #a855f7;
    --pink-500: #ec4899;

    --emerald-500: #10b981;
    --emerald-600: #059669;
    --amber-500: #f59e0b;
    --amber-600: #d97706;
    --red-600: #dc2626;
    --red-700: #b91c1c;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.5;
    margin: 0;
}

h1, h2, h3, h4, p {
    margin: 0;
}

.muted {
    color: var(--text-muted);
}

/* Layout */
.page {
    min-height: 100vh;
    padding: 16px;
}

.page-inner {
    max-width: var(--container-max);
    margin: 0 auto;
}

.page-header {
    margin-bottom: 32px;
}

.page-header h1 {
    font-size: 1.875rem;
    font-weight: 700;
    margin-bottom: 8px;
}

.section-title {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 24px;
}

.metric-grid,
.group-grid {
    display: grid;
    grid-template-columns: repeat(1, minmax(0, 1fr));
    gap: 16px;
}

.metric-grid {
    margin-bottom: 48px;
}

/* Cards */
.card {
    background: var(--bg-card);
    border-radius: var(--radius-card);
    padding: 24px;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

.card-head {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 16px;
}

.card-title {
    font-size: 1.125rem;
    font-weight: 600;
}

.icon-badge {
    display: flex;
    padding: 12px;
    border-radius: 8px;
    color: #ffffff;
}

.group-badge {
    background: #dbeafe;
    color: #2563eb;
}

.icon-missing {
    display: inline-block;
    width: 24px;
    height: 24px;
    border: 2px dashed currentColor;
    border-radius: 4px;
    opacity: 0.6;
}

/* Accents */
.accent-red { background: var(--red-500); }
.accent-yellow { background: var(--yellow-500); }
.accent-blue { background: var(--blue-500); }
.accent-green { background: var(--green-500); }
.accent-purple { background: var(--purple-500); }
.accent-pink { background: var(--pink-500); }

/* Metric card */
.metric-body {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.metric-value {
    font-size: 1.5rem;
    font-weight: 700;
}

.daily-value {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.daily-value-title {
    font-size: 0.875rem;
    color: var(--text-faint);
}

.dv-track {
    width: 100%;
    height: 8px;
    background: var(--track);
    border-radius: 9999px;
    overflow: hidden;
}

.dv-fill {
    height: 8px;
    border-radius: 9999px;
}

.dv-caption {
    font-size: 0.875rem;
    color: var(--text-muted);
}

/* Group card */
.group-description {
    margin-bottom: 16px;
}

.group-cautions {
    margin-bottom: 16px;
}

.cautions-head {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--amber-600);
    margin-bottom: 8px;
    font-weight: 600;
}

.group-recommendation {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--emerald-600);
    font-size: 0.875rem;
    margin-bottom: 12px;
}

/* Impact indicator */
.impact-indicator {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-top: 12px;
}

.impact-segments {
    display: flex;
    gap: 4px;
}

.impact-segment {
    height: 8px;
    width: 32px;
    border-radius: 4px;
}

.segment-good { background: var(--emerald-500); }
.segment-moderate { background: var(--amber-500); }
.segment-bad { background: var(--red-500); }
.segment-inactive { background: var(--track); }

.impact-label {
    font-size: 0.875rem;
}

.impact-text-good { color: var(--emerald-600); }
.impact-text-moderate { color: var(--amber-600); }
.impact-text-bad { color: var(--red-600); }

/* Warning region */
.alert-region {
    margin-top: 48px;
    background: #fef2f2;
    border: 1px solid #fecaca;
    border-radius: var(--radius-card);
    padding: 24px;
    color: var(--red-700);
}

.alert-heading {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 1.25rem;
    font-weight: 700;
    margin-bottom: 16px;
}

.warning-list {
    list-style: disc inside;
    margin: 0;
    padding: 0;
}

.warning-item + .warning-item {
    margin-top: 8px;
}

/* Breakpoints */
@media (min-width: 640px) {
    .page { padding: 32px; }
    .metric-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .metric-grid, .group-grid { gap: 24px; }
}

@media (min-width: 768px) {
    .group-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
    .metric-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

@media (min-width: 1280px) {
    .metric-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}
"#;

/// Content Security Policy for the generated document: inline styles only.
pub const CSP: &str = "default-src 'none'; img-src 'self' data:; style-src 'unsafe-inline'; script-src 'none';";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grids_reach_their_widest_layout() {
        assert!(DASHBOARD_CSS.contains("repeat(4, minmax(0, 1fr))"));
        assert!(DASHBOARD_CSS.contains(".group-grid { grid-template-columns: repeat(2"));
    }

    #[test]
    fn every_accent_has_a_rule() {
        use crate::types::Accent;
        for accent in Accent::ALL {
            assert!(DASHBOARD_CSS.contains(&format!(".{} {{", accent.css_class())));
        }
    }
}
