//! Nutrition metric card - one fact with an optional daily-value bar

use leptos::prelude::*;

use super::TokenIcon;
use crate::types::NutritionFact;

/// Card showing one nutrition fact.
///
/// The daily-value block (caption, bar, percentage) only exists when the fact
/// carries a daily value. The bar is capped at 100% wide; the percentage text
/// is not.
#[component]
pub fn MetricDisplay(fact: NutritionFact) -> impl IntoView {
    let accent = fact.accent.css_class();
    let display_value = fact.display_value();
    let label = fact.label.clone();

    let daily_value = fact
        .bar_fill()
        .zip(fact.daily_value_caption())
        .map(|(fill, caption)| {
            view! {
                <div class="daily-value">
                    <p class="daily-value-title">"Daily Value"</p>
                    <div class="dv-track">
                        <div
                            class=format!("dv-fill {}", accent)
                            data-fill=fill.to_string()
                            style=format!("width: {}%", fill)
                        ></div>
                    </div>
                    <p class="dv-caption">{caption}</p>
                </div>
            }
        });

    view! {
        <div class="card metric-card" data-metric=label>
            <div class="card-head">
                <div class=format!("icon-badge {}", accent)>
                    <TokenIcon token=fact.icon class="icon-on-accent" />
                </div>
                <h3 class="card-title">{fact.label}</h3>
            </div>
            <div class="metric-body">
                <p class="metric-value">{display_value}</p>
                {daily_value}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Accent;
    use leptos::tachys::view::RenderHtml;

    fn render(daily_value_percent: Option<u16>) -> String {
        let fact = NutritionFact {
            label: "Vitamin C".into(),
            value: "90".into(),
            unit: "mg".into(),
            daily_value_percent,
            accent: Accent::Green,
            icon: "heart".into(),
        };
        view! { <MetricDisplay fact=fact /> }.to_html()
    }

    #[test]
    fn shows_value_with_unit() {
        let html = render(None);
        assert!(html.contains("Vitamin C"));
        assert!(html.contains("90mg"));
        assert!(html.contains("icon-badge accent-green"));
    }

    #[test]
    fn no_daily_value_means_no_bar() {
        let html = render(None);
        assert!(!html.contains("daily-value"));
        assert!(!html.contains("dv-fill"));
        assert!(!html.contains("% DV"));
    }

    #[test]
    fn over_one_hundred_caps_the_bar_only() {
        let html = render(Some(250));
        assert!(html.contains("data-fill=\"100\""));
        assert!(html.contains("width: 100%"));
        assert!(html.contains("250% DV"));
        assert!(!html.contains("width: 250%"));
    }

    #[test]
    fn zero_daily_value_still_renders_bar() {
        let html = render(Some(0));
        assert!(html.contains("data-fill=\"0\""));
        assert!(html.contains("0% DV"));
    }
}
