//! Page layout - metric grid, group grid and the warning region.

use leptos::prelude::*;

use super::{GroupAssessment, ICON_ALERT_TRIANGLE, Icon, MetricDisplay};
use crate::data;
use crate::types::{Dashboard, WarningList};

/// The product page. Takes no input: everything shown is literal data.
#[component]
pub fn NutritionPage() -> impl IntoView {
    view! { <DashboardView dashboard=data::bread_slice() /> }
}

/// Lays out one dashboard.
///
/// Grid column counts follow the viewport width (see `.metric-grid` and
/// `.group-grid` in [`crate::styles::DASHBOARD_CSS`]).
#[component]
pub fn DashboardView(dashboard: Dashboard) -> impl IntoView {
    let Dashboard {
        heading,
        serving,
        facts,
        groups_heading,
        groups,
        warnings,
    } = dashboard;

    view! {
        <div class="page">
            <div class="page-inner">
                <header class="page-header">
                    <h1>{heading}</h1>
                    <p class="muted">{serving}</p>
                </header>

                <section class="metric-grid">
                    {facts.into_iter().map(|fact| view! {
                        <MetricDisplay fact=fact />
                    }).collect::<Vec<_>>()}
                </section>

                <h2 class="section-title">{groups_heading}</h2>
                <section class="group-grid">
                    {groups.into_iter().map(|profile| view! {
                        <GroupAssessment profile=profile />
                    }).collect::<Vec<_>>()}
                </section>

                <WarningRegion warnings=warnings />
            </div>
        </div>
    }
}

/// Alert box listing who should avoid the product.
#[component]
pub fn WarningRegion(warnings: WarningList) -> impl IntoView {
    view! {
        <div class="alert-region" role="alert">
            <h2 class="alert-heading">
                <Icon path=ICON_ALERT_TRIANGLE />
                {warnings.heading}
            </h2>
            <ul class="warning-list">
                {warnings.items.into_iter().map(|item| view! {
                    <li class="warning-item">{item}</li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
