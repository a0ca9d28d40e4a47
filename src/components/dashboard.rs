//! Dashboard Component
//!
//! Headline cards and charts over the campaign-filtered data set.

use leptos::prelude::*;

use crate::aggregate::{filter_by_campaign, latest, total, CampaignFilter};
use crate::components::{format_quantity, CategoryPieChart, KpiCard, MonthlyBarChart};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(CampaignFilter::All);

    let filtered = Memo::new(move |_| filter_by_campaign(&store.kpi_data().get(), filter.get()));

    let latest_value = move |metric: &'static str| {
        Signal::derive(move || {
            latest(&filtered.get(), metric)
                .map(|point| format_quantity(point.quantity))
                .unwrap_or_else(|| "N/A".to_string())
        })
    };
    let total_value = move |metric: &'static str| {
        Signal::derive(move || format_quantity(total(&filtered.get(), metric)))
    };

    let on_filter_change = move |ev| {
        let value = event_target_value(&ev);
        let next = if value == "all" {
            CampaignFilter::All
        } else {
            value
                .parse()
                .map(CampaignFilter::Campaign)
                .unwrap_or(CampaignFilter::All)
        };
        set_filter.set(next);
    };

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h2>"PAO Dashboard"</h2>
                <label class="campaign-filter">
                    "Filter by Campaign:"
                    <select on:change=on_filter_change>
                        <option value="all">"All Campaigns"</option>
                        <For
                            each=move || store.campaigns().get()
                            key=|campaign| campaign.id
                            children=move |campaign| {
                                view! {
                                    <option value=campaign.id.to_string()>
                                        {campaign.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
            </div>

            <div class="kpi-card-grid">
                <KpiCard
                    title="Media Pickups (Latest)"
                    value=latest_value("Media pickups")
                    unit="pickups"
                />
                <KpiCard
                    title="Social Engagement (Latest)"
                    value=latest_value("Engagement rate")
                    unit="%"
                />
                <KpiCard
                    title="News Releases (Total)"
                    value=total_value("News release")
                    unit="releases"
                />
                <KpiCard
                    title="Video Views (Latest)"
                    value=latest_value("Video views")
                    unit="views"
                />
            </div>

            <div class="chart-grid">
                <div class="panel">
                    <h3>"Monthly Media Pickups"</h3>
                    <MonthlyBarChart data=filtered metric="Media pickups" />
                </div>
                <div class="panel">
                    <h3>"Entries by Type"</h3>
                    <CategoryPieChart data=filtered />
                </div>
            </div>
        </div>
    }
}
