//! KPI Card Component
//!
//! One headline figure on the dashboard.

use leptos::prelude::*;

#[component]
pub fn KpiCard(
    title: &'static str,
    value: Signal<String>,
    unit: &'static str,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <p class="kpi-card-title">{title}</p>
            <div class="kpi-card-figure">
                <span class="kpi-card-value">{move || value.get()}</span>
                <span class="kpi-card-unit">{unit}</span>
            </div>
        </div>
    }
}
