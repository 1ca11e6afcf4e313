//! Demographic group card - description, cautions, recommendation, impact.

use leptos::prelude::*;

use super::{ICON_ALERT_TRIANGLE, ICON_SCROLL_TEXT, Icon, ImpactIndicator, TokenIcon};
use crate::types::GroupProfile;

/// Card with the assessment for one demographic group.
///
/// Cautions and recommendation are omitted entirely when absent or blank.
#[component]
pub fn GroupAssessment(profile: GroupProfile) -> impl IntoView {
    let cautions = profile.visible_cautions().map(|text| {
        let text = text.to_string();
        view! {
            <div class="group-cautions">
                <div class="cautions-head">
                    <Icon path=ICON_ALERT_TRIANGLE size="20" />
                    <h4>"Cautions"</h4>
                </div>
                <p class="muted">{text}</p>
            </div>
        }
    });

    let recommendation = profile.visible_recommendation().map(|text| {
        let text = text.to_string();
        view! {
            <div class="group-recommendation">
                <Icon path=ICON_SCROLL_TEXT size="20" />
                <p>{text}</p>
            </div>
        }
    });

    let impact = profile.impact;
    let title = profile.title.clone();

    view! {
        <div class="card group-card" data-group=title>
            <div class="card-head">
                <div class="icon-badge group-badge">
                    <TokenIcon token=profile.icon />
                </div>
                <h3 class="card-title">{profile.title}</h3>
            </div>
            <p class="muted group-description">{profile.description}</p>
            {cautions}
            {recommendation}
            <ImpactIndicator level=impact />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImpactLevel;
    use leptos::tachys::view::RenderHtml;

    fn profile(cautions: Option<&str>, recommendation: Option<&str>) -> GroupProfile {
        GroupProfile {
            title: "Athletes".into(),
            icon: "dumbbell".into(),
            description: "Fast carbohydrates before training.".into(),
            cautions: cautions.map(Into::into),
            recommendation: recommendation.map(Into::into),
            impact: ImpactLevel::Bad,
        }
    }

    fn render(profile: GroupProfile) -> String {
        view! { <GroupAssessment profile=profile /> }.to_html()
    }

    #[test]
    fn renders_all_present_sections() {
        let html = render(profile(Some("Low in protein."), Some("Add eggs.")));
        assert!(html.contains("Athletes"));
        assert!(html.contains("Fast carbohydrates before training."));
        assert!(html.contains("group-cautions"));
        assert!(html.contains("Low in protein."));
        assert!(html.contains("group-recommendation"));
        assert!(html.contains("Add eggs."));
        assert!(html.contains("Bad Impact"));
    }

    #[test]
    fn absent_cautions_leave_no_trace() {
        let html = render(profile(None, Some("Add eggs.")));
        assert!(!html.contains("group-cautions"));
        assert!(!html.contains("Cautions"));
        assert!(html.contains("group-recommendation"));
    }

    #[test]
    fn empty_cautions_leave_no_trace() {
        let html = render(profile(Some(""), None));
        assert!(!html.contains("group-cautions"));
    }

    #[test]
    fn absent_recommendation_leaves_no_trace() {
        let html = render(profile(Some("Low in protein."), None));
        assert!(!html.contains("group-recommendation"));
        assert!(!html.contains(ICON_SCROLL_TEXT));
    }

    #[test]
    fn impact_indicator_is_always_present() {
        let html = render(profile(None, None));
        assert!(html.contains("impact-indicator"));
        assert!(html.contains("data-impact=\"bad\""));
    }
}
