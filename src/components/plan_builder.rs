//! Plan Builder Component
//!
//! Chief-only scratchpad for sketching a communication plan: an objective,
//! an audience, and a list of tactic rows drawn from the metric catalog.
//! Plans live only in component state and are never persisted.

use leptos::prelude::*;

use crate::constants::metric_options;
use crate::models::EntryType;

#[derive(Debug, Clone, PartialEq)]
struct PlanRow {
    id: u32,
    entry_type: EntryType,
    metric: String,
    target: String,
}

#[component]
pub fn PlanBuilder() -> impl IntoView {
    let (objective, set_objective) = signal(String::new());
    let (audience, set_audience) = signal(String::new());
    let (rows, set_rows) = signal(Vec::<PlanRow>::new());

    let (row_type, set_row_type) = signal(EntryType::Output);
    let (row_metric, set_row_metric) = signal(metric_options(EntryType::Output)[0].to_string());
    let (row_target, set_row_target) = signal(String::new());

    let on_type_change = move |ev| {
        if let Some(selected) = EntryType::parse(&event_target_value(&ev)) {
            set_row_type.set(selected);
            set_row_metric.set(metric_options(selected)[0].to_string());
        }
    };

    let add_row = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_rows.update(|rows| {
            let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            rows.push(PlanRow {
                id,
                entry_type: row_type.get(),
                metric: row_metric.get(),
                target: row_target.get().trim().to_string(),
            });
        });
        set_row_target.set(String::new());
    };

    let remove_row = move |id: u32| {
        set_rows.update(|rows| rows.retain(|r| r.id != id));
    };

    view! {
        <div class="panel plan-builder">
            <h2>"Communication Plan Builder"</h2>
            <p class="plan-note">"A working scratchpad. Nothing here is saved."</p>

            <div class="form-row">
                <label>
                    "Objective"
                    <input
                        type="text"
                        placeholder="What should this plan achieve?"
                        prop:value=move || objective.get()
                        on:input=move |ev| set_objective.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Audience"
                    <input
                        type="text"
                        placeholder="Who is this plan for?"
                        prop:value=move || audience.get()
                        on:input=move |ev| set_audience.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <form class="plan-add-row" on:submit=add_row>
                <select on:change=on_type_change prop:value=move || row_type.get().as_str()>
                    {EntryType::ALL
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                        .collect_view()}
                </select>
                <select
                    prop:value=move || row_metric.get()
                    on:change=move |ev| set_row_metric.set(event_target_value(&ev))
                >
                    {move || {
                        metric_options(row_type.get())
                            .iter()
                            .map(|m| view! { <option value=*m>{*m}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    type="text"
                    placeholder="Target (e.g., 10 pickups)"
                    prop:value=move || row_target.get()
                    on:input=move |ev| set_row_target.set(event_target_value(&ev))
                />
                <button type="submit">"Add Tactic"</button>
            </form>

            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <p class="plan-empty">"No tactics yet."</p> }
            >
                <table class="kpi-table">
                    <thead>
                        <tr>
                            <th>"Type"</th>
                            <th>"Metric"</th>
                            <th>"Target"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id
                            children=move |row| {
                                let id = row.id;
                                view! {
                                    <tr>
                                        <td>{row.entry_type.as_str()}</td>
                                        <td>{row.metric.clone()}</td>
                                        <td>{row.target.clone()}</td>
                                        <td>
                                            <button
                                                type="button"
                                                class="row-remove"
                                                on:click=move |_| remove_row(id)
                                            >
                                                "Remove"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
