//! Data Entry Component
//!
//! Form for recording one KPI observation. Live mode inserts through the
//! backend and jumps to the table; demo mode assigns a local id and
//! prepends in place.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::constants::metric_options;
use crate::context::AppContext;
use crate::demo;
use crate::models::{EntryType, NewKpiDataPoint, View};
use crate::store::{
    store_prepend_data_point, store_set_active_view, use_app_store, AppStateStoreFields,
};
use crate::supabase::tables;

use super::today_iso;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Required fields first, then the quantity parse; the user is told about
/// the missing fields before anything about the quantity's shape.
fn validate_entry(date: &str, metric: &str, quantity: &str) -> Result<f64, String> {
    if date.is_empty() || metric.is_empty() {
        return Err("Please fill all required fields.".to_string());
    }
    quantity
        .trim()
        .parse::<f64>()
        .map_err(|_| "Quantity must be a number.".to_string())
}

#[component]
pub fn DataEntry() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();

    let (date, set_date) = signal(today_iso());
    let (entry_type, set_entry_type) = signal(EntryType::Output);
    let (metric, set_metric) = signal(metric_options(EntryType::Output)[0].to_string());
    let (custom_metric, set_custom_metric) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (link, set_link) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (campaign_id, set_campaign_id) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (saved, set_saved) = signal(false);

    // Only campaigns still running are offered for linkage.
    let active_campaigns = Memo::new(move |_| {
        let today = today_iso();
        store
            .campaigns()
            .get()
            .into_iter()
            .filter(|c| c.end_date >= today)
            .collect::<Vec<_>>()
    });

    let on_type_change = move |ev| {
        if let Some(selected) = EntryType::parse(&event_target_value(&ev)) {
            set_entry_type.set(selected);
            set_metric.set(metric_options(selected)[0].to_string());
            set_custom_metric.set(String::new());
        }
    };

    let on_metric_change = move |ev| {
        let selected = event_target_value(&ev);
        if selected != "Other" {
            set_custom_metric.set(String::new());
        }
        set_metric.set(selected);
    };

    let reset_form = move || {
        set_date.set(today_iso());
        set_entry_type.set(EntryType::Output);
        set_metric.set(metric_options(EntryType::Output)[0].to_string());
        set_custom_metric.set(String::new());
        set_quantity.set(String::new());
        set_link.set(String::new());
        set_notes.set(String::new());
        set_campaign_id.set(String::new());
    };

    let flash_saved = move || {
        set_saved.set(true);
        spawn_local(async move {
            TimeoutFuture::new(2_500).await;
            set_saved.set(false);
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let final_metric = if metric.get() == "Other" {
            custom_metric.get().trim().to_string()
        } else {
            metric.get()
        };
        let qty = match validate_entry(&date.get(), &final_metric, &quantity.get()) {
            Ok(qty) => qty,
            Err(e) => {
                set_error.set(e);
                return;
            }
        };

        let point = NewKpiDataPoint {
            date: date.get(),
            entry_type: entry_type.get(),
            metric: final_metric,
            quantity: qty,
            notes: non_empty(notes.get()),
            campaign_id: campaign_id.get().parse().ok(),
            link: non_empty(link.get()),
        };
        reset_form();

        if config::is_configured() {
            let Some(session) = store.session().get_untracked() else {
                web_sys::console::error_1(&"No user session found. Cannot add KPI data.".into());
                return;
            };
            spawn_local(async move {
                match tables::insert_kpi_data(&session, &point).await {
                    Ok(()) => {
                        ctx.reload();
                        store_set_active_view(&store, View::Table);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Error inserting KPI data: {e}").into());
                        set_error.set(e);
                    }
                }
            });
        } else {
            let id = demo::next_data_point_id(&store.kpi_data().get_untracked());
            store_prepend_data_point(&store, point.with_id(id));
            flash_saved();
        }
    };

    view! {
        <div class="panel entry-form-panel">
            <h2>"Add New KPI Entry"</h2>
            <form class="entry-form" on:submit=submit>
                <div class="form-row">
                    <label>
                        "Date"
                        <input
                            type="date"
                            required
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Type"
                        <select on:change=on_type_change prop:value=move || entry_type.get().as_str()>
                            {EntryType::ALL
                                .iter()
                                .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>

                <div class="form-row">
                    <label>
                        "Metric"
                        <select on:change=on_metric_change prop:value=move || metric.get()>
                            {move || {
                                metric_options(entry_type.get())
                                    .iter()
                                    .map(|m| view! { <option value=*m>{*m}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label>
                        "Quantity"
                        <input
                            type="number"
                            step="any"
                            required
                            placeholder="e.g., 152"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <Show when=move || metric.get() == "Other">
                    <label>
                        "Custom Metric"
                        <input
                            type="text"
                            required
                            placeholder="Specify your metric"
                            prop:value=move || custom_metric.get()
                            on:input=move |ev| set_custom_metric.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <div class="form-row">
                    <label>
                        "Campaign (Optional)"
                        <select
                            prop:value=move || campaign_id.get()
                            on:change=move |ev| set_campaign_id.set(event_target_value(&ev))
                        >
                            <option value="">"None"</option>
                            <For
                                each=move || active_campaigns.get()
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
                    <label>
                        "Link (Optional)"
                        <input
                            type="url"
                            placeholder="https://example.com"
                            prop:value=move || link.get()
                            on:input=move |ev| set_link.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <label>
                    "Notes (Optional)"
                    <textarea
                        rows="3"
                        prop:value=move || notes.get()
                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || !error.get().is_empty()>
                    <div class="form-message error">{move || error.get()}</div>
                </Show>
                <Show when=move || saved.get()>
                    <div class="form-message success">"Entry saved."</div>
                </Show>

                <div class="form-actions">
                    <button type="submit">"Save Entry"</button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate_entry;

    #[test]
    fn test_missing_required_fields_reported_before_quantity() {
        let err = validate_entry("2024-09-10", "", "").unwrap_err();
        assert_eq!(err, "Please fill all required fields.");
    }

    #[test]
    fn test_bad_quantity_reported_when_fields_present() {
        let err = validate_entry("2024-09-10", "Media pickups", "lots").unwrap_err();
        assert_eq!(err, "Quantity must be a number.");
    }

    #[test]
    fn test_valid_entry_parses_quantity() {
        assert_eq!(validate_entry("2024-09-10", "Media pickups", " 4.8 "), Ok(4.8));
    }
}
