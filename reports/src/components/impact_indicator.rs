//! Impact indicator - three-segment severity bar with a label

use leptos::prelude::*;

use crate::types::ImpactLevel;

/// Three segments in fixed order (good, moderate, bad) with the one matching
/// `level` drawn in its color, followed by e.g. "Moderate Impact".
///
/// Color coding:
/// - Emerald: good
/// - Amber: moderate
/// - Red: bad
/// - Gray: inactive segment
#[component]
pub fn ImpactIndicator(level: ImpactLevel) -> impl IntoView {
    let segments = ImpactLevel::ALL
        .into_iter()
        .map(|segment| {
            let active = segment == level;
            let state = if active { "true" } else { "false" };
            let class = if active {
                format!("impact-segment segment-{}", segment.key())
            } else {
                "impact-segment segment-inactive".to_string()
            };
            view! {
                <div
                    class=class
                    data-level=segment.key()
                    data-active=state
                ></div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="impact-indicator" data-impact=level.key()>
            <div class="impact-segments">{segments}</div>
            <span class=format!("impact-label impact-text-{}", level.key())>
                {level.label()}
            </span>
        </div>
    }
}
