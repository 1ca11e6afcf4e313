//! Root document component - the complete HTML page

use super::NutritionPage;
use crate::RenderOptions;
use crate::styles::{CSP, DASHBOARD_CSS};
use leptos::prelude::*;

/// The complete HTML document wrapping [`NutritionPage`].
#[component]
pub fn DashboardDocument(options: RenderOptions) -> impl IntoView {
    let RenderOptions { title, extra_css } = options;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{DASHBOARD_CSS}</style>
                // Appended last so it can override the built-in rules
                {extra_css.map(|css| view! { <style class="extra-css">{css}</style> })}
            </head>
            <body>
                <NutritionPage />
            </body>
        </html>
    }
}
