//! KPI Table Component
//!
//! Data explorer with click-to-sort column headers.

use leptos::prelude::*;

use crate::components::format_quantity;
use crate::sort::{request_sort, sorted, SortConfig, SortDirection, SortKey};
use crate::store::{use_app_store, AppStateStoreFields};

const COLUMNS: [SortKey; 5] = [
    SortKey::Date,
    SortKey::EntryType,
    SortKey::Metric,
    SortKey::Quantity,
    SortKey::Link,
];

#[component]
pub fn KpiTable() -> impl IntoView {
    let store = use_app_store();
    let (sort_config, set_sort_config) = signal::<Option<SortConfig>>(None);

    let rows = Memo::new(move |_| sorted(&store.kpi_data().get(), sort_config.get()));

    view! {
        <div class="panel">
            <h2>"KPI Data Explorer"</h2>
            <div class="table-wrap">
                <table class="kpi-table">
                    <thead>
                        <tr>
                            {COLUMNS
                                .iter()
                                .map(|key| {
                                    let key = *key;
                                    let indicator = move || match sort_config.get() {
                                        Some(cfg) if cfg.key == key => {
                                            match cfg.direction {
                                                SortDirection::Ascending => " \u{25b2}",
                                                SortDirection::Descending => " \u{25bc}",
                                            }
                                        }
                                        _ => "",
                                    };
                                    view! {
                                        <th on:click=move |_| {
                                            set_sort_config
                                                .update(|cfg| *cfg = Some(request_sort(*cfg, key)))
                                        }>
                                            {key.label()}
                                            {indicator}
                                        </th>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|point| point.id
                            children=move |point| {
                                let link_cell = match point.link.clone() {
                                    Some(link) => view! {
                                        <a href=link.clone() target="_blank" rel="noopener noreferrer">
                                            {link.clone()}
                                        </a>
                                    }
                                    .into_any(),
                                    None => view! { <span>"N/A"</span> }.into_any(),
                                };
                                view! {
                                    <tr>
                                        <td>{point.date.clone()}</td>
                                        <td>{point.entry_type.as_str()}</td>
                                        <td class="metric-cell">{point.metric.clone()}</td>
                                        <td>{format_quantity(point.quantity)}</td>
                                        <td class="link-cell">{link_cell}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
