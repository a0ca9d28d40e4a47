//! Campaign Manager Component
//!
//! Chief-only view: create campaigns and browse existing ones.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::context::AppContext;
use crate::demo;
use crate::models::NewCampaign;
use crate::store::{store_prepend_campaign, use_app_store, AppStateStoreFields};
use crate::supabase::tables;

use super::today_iso;

#[component]
pub fn CampaignManager() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (start_date, set_start_date) = signal(today_iso());
    let (end_date, set_end_date) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        if name.get().trim().is_empty()
            || description.get().trim().is_empty()
            || start_date.get().is_empty()
            || end_date.get().is_empty()
        {
            set_error.set("Please fill out all fields.".to_string());
            return;
        }

        let campaign = NewCampaign {
            name: name.get().trim().to_string(),
            description: description.get().trim().to_string(),
            start_date: start_date.get(),
            end_date: end_date.get(),
        };
        set_name.set(String::new());
        set_description.set(String::new());
        set_start_date.set(today_iso());
        set_end_date.set(String::new());

        if config::is_configured() {
            let Some(session) = store.session().get_untracked() else {
                web_sys::console::error_1(&"No user session found. Cannot add campaign.".into());
                return;
            };
            spawn_local(async move {
                match tables::insert_campaign(&session, &campaign).await {
                    Ok(()) => ctx.reload(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Error inserting campaign: {e}").into());
                        set_error.set(e);
                    }
                }
            });
        } else {
            let id = demo::next_campaign_id(&store.campaigns().get_untracked());
            store_prepend_campaign(&store, campaign.with_id(id));
        }
    };

    view! {
        <div class="campaigns-layout">
            <div class="panel">
                <h2>"Create Campaign"</h2>
                <form class="entry-form" on:submit=submit>
                    <label>
                        "Campaign Name"
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            rows="3"
                            required
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label>
                            "Start Date"
                            <input
                                type="date"
                                required
                                prop:value=move || start_date.get()
                                on:input=move |ev| set_start_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "End Date"
                            <input
                                type="date"
                                required
                                prop:value=move || end_date.get()
                                on:input=move |ev| set_end_date.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <div class="form-message error">{move || error.get()}</div>
                    </Show>

                    <div class="form-actions">
                        <button type="submit">"Create Campaign"</button>
                    </div>
                </form>
            </div>

            <div class="panel campaigns-list">
                <h2>"Existing Campaigns"</h2>
                <ul>
                    <For
                        each=move || store.campaigns().get()
                        key=|campaign| campaign.id
                        children=move |campaign| {
                            view! {
                                <li class="campaign-entry">
                                    <h3>{campaign.name.clone()}</h3>
                                    <p>{campaign.description.clone()}</p>
                                    <p class="campaign-dates">
                                        <strong>"Duration: "</strong>
                                        {format!("{} to {}", campaign.start_date, campaign.end_date)}
                                    </p>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
