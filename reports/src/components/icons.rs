//! SVG icon components and the glyph provider.
//!
//! Glyphs are outline icons drawn on a 24x24 grid with a round 2px stroke,
//! in the style of the [Lucide](https://lucide.dev/) set. Icon tokens used by
//! the dashboard data are resolved here with [`resolve_glyph`].

use leptos::prelude::*;

use crate::error::IconError;

/// Renders an inline SVG outline icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_HEART size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon looked up by token.
///
/// Unknown tokens render an empty placeholder carrying the token instead of
/// failing the page.
#[component]
pub fn TokenIcon(
    /// Icon token, e.g. "wheat"
    token: String,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    match resolve_glyph(&token) {
        Ok(path) => view! { <Icon path=path size=size class=class /> }.into_any(),
        Err(err) => {
            tracing::warn!(%err, "rendering icon placeholder");
            view! { <span class="icon-missing" data-icon=token></span> }.into_any()
        }
    }
}

/// Resolve an icon token to SVG path data.
pub fn resolve_glyph(token: &str) -> Result<&'static str, IconError> {
    let path = match token {
        "gauge" => ICON_GAUGE,
        "activity" => ICON_ACTIVITY,
        "dumbbell" => ICON_DUMBBELL,
        "wheat" => ICON_WHEAT,
        "sandwich" => ICON_SANDWICH,
        "cookie" => ICON_COOKIE,
        "baby" => ICON_BABY,
        "users" => ICON_USERS,
        "brain" => ICON_BRAIN,
        "heart" => ICON_HEART,
        "alert-triangle" => ICON_ALERT_TRIANGLE,
        "scroll-text" => ICON_SCROLL_TEXT,
        _ => return Err(IconError::UnknownSymbol(token.to_string())),
    };
    Ok(path)
}

// =============================================================================
// Outline glyphs (24x24, stroke)
// =============================================================================

/// Speedometer gauge (calories)
pub const ICON_GAUGE: &str = "m12 14 4-4M3.34 19a10 10 0 1 1 17.32 0";

/// Pulse line (fat, diabetes)
pub const ICON_ACTIVITY: &str = "M22 12h-4l-3 9L9 3l-3 9H2";

/// Dumbbell (protein)
pub const ICON_DUMBBELL: &str = "m6.5 6.5 11 11m3.5 3.5-1-1M3 3l1 1m14 18 4-4M2 6l4-4M3 10l7-7m4 18 7-7";

/// Wheat ear (carbohydrates)
pub const ICON_WHEAT: &str = "M2 22 16 8M3.47 12.53 5 11l1.53 1.53a3.5 3.5 0 0 1 0 4.94L5 19l-1.53-1.53a3.5 3.5 0 0 1 0-4.94ZM7.47 8.53 9 7l1.53 1.53a3.5 3.5 0 0 1 0 4.94L9 15l-1.53-1.53a3.5 3.5 0 0 1 0-4.94ZM11.47 4.53 13 3l1.53 1.53a3.5 3.5 0 0 1 0 4.94L13 11l-1.53-1.53a3.5 3.5 0 0 1 0-4.94ZM20 2h2v2a4 4 0 0 1-4 4h-2V6a4 4 0 0 1 4-4Z";

/// Layered sandwich (sodium)
pub const ICON_SANDWICH: &str = "M3 11v3a1 1 0 0 0 1 1h16a1 1 0 0 0 1-1v-3M12 19H4a1 1 0 0 1-1-1v-2a1 1 0 0 1 1-1h16a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1h-3.83m-13.17-8 7.77-6.04a2 2 0 0 1 2.46 0L21 11H3Z";

/// Bitten cookie (sugars)
pub const ICON_COOKIE: &str = "M12 2a10 10 0 1 0 10 10 4 4 0 0 1-5-5 4 4 0 0 1-5-5M8.5 8.5v.01M16 15.5v.01M12 12v.01M11 17v.01M7 14v.01";

/// Baby face (children, pregnancy)
pub const ICON_BABY: &str = "M9 12h.01M15 12h.01M10 16c.5.3 1.2.5 2 .5s1.5-.2 2-.5M19 6.3a9 9 0 0 1 1.8 3.9 2 2 0 0 1 0 3.6 9 9 0 0 1-17.6 0 2 2 0 0 1 0-3.6A9 9 0 0 1 12 3c2 0 3.5 1.1 3.5 2.5s-.9 2.5-2 2.5c-.8 0-1.5-.4-1.5-1";

/// Two people (adults)
pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

/// Brain (older adults)
pub const ICON_BRAIN: &str = "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18ZM12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z";

/// Heart (cholesterol)
pub const ICON_HEART: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

/// Warning triangle (cautions, alert region)
pub const ICON_ALERT_TRIANGLE: &str = "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3ZM12 9v4M12 17h.01";

/// Scroll with text lines (recommendations)
pub const ICON_SCROLL_TEXT: &str = "M15 12h-5M15 8h-5M19 17V5a2 2 0 0 0-2-2H4M8 21h12a2 2 0 0 0 2-2v-1a1 1 0 0 0-1-1H11a1 1 0 0 0-1 1v1a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v2a1 1 0 0 0 1 1h3";
