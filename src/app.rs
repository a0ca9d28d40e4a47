//! PAO KPI Tracker App
//!
//! Top-level coordinator: owns the store, resolves the session into a role,
//! keeps both collections fresh, and gates which view renders.

use futures::future;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::access;
use crate::components::{
    AuthForm, CampaignManager, Dashboard, DataEntry, Header, KpiTable, PlanBuilder, Sidebar,
};
use crate::config;
use crate::context::AppContext;
use crate::demo;
use crate::models::{Role, View};
use crate::store::{
    store_apply_role, store_clear_session_state, store_set_active_view, store_set_campaigns,
    store_set_kpi_data, store_set_loading, use_app_store, AppState, AppStateStoreFields, AppStore,
};
use crate::supabase::auth::Session;
use crate::supabase::{auth, tables};

/// Fetch both collections concurrently; each failure is logged and absorbed
/// independently so one bad fetch never blocks the other.
async fn refresh_collections(store: AppStore, session: &Session, disposed: StoredValue<bool>) {
    let (kpi_data, campaigns) = future::join(
        tables::fetch_kpi_data(session),
        tables::fetch_campaigns(session),
    )
    .await;
    if disposed.get_value() {
        return;
    }
    match kpi_data {
        Ok(data) => store_set_kpi_data(&store, data),
        Err(e) => web_sys::console::error_1(&format!("Error fetching KPI data: {e}").into()),
    }
    match campaigns {
        Ok(data) => store_set_campaigns(&store, data),
        Err(e) => web_sys::console::error_1(&format!("Error fetching campaigns: {e}").into()),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let configured = config::is_configured();
    let initial_session = if configured { auth::stored_session() } else { None };

    let store = Store::new(AppState::new(initial_session));
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // No store writes may land after this scope is torn down.
    let disposed = StoredValue::new(false);
    on_cleanup(move || disposed.set_value(true));

    if configured {
        // Session/role resolver: runs on mount for the restored session and
        // again on every session change routed through the store (login,
        // logout).
        Effect::new(move |_| {
            let session = store.session().get();
            store_set_loading(&store, true);
            spawn_local(async move {
                match session {
                    Some(session) => {
                        let role = match tables::fetch_profile_role(&session).await {
                            Ok(Some(role)) => role,
                            // No profile row: fall back to the default role.
                            Ok(None) => Role::Staff,
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Error fetching user role: {e}").into(),
                                );
                                Role::Staff
                            }
                        };
                        if disposed.get_value() {
                            return;
                        }
                        store_apply_role(&store, role);
                        refresh_collections(store, &session, disposed).await;
                    }
                    None => {
                        if disposed.get_value() {
                            return;
                        }
                        store_clear_session_state(&store);
                    }
                }
                if disposed.get_value() {
                    return;
                }
                store_set_loading(&store, false);
            });
        });

        // Refetch both collections after an insert.
        Effect::new(move |_| {
            if reload_trigger.get() == 0 {
                return;
            }
            let Some(session) = store.session().get_untracked() else {
                return;
            };
            spawn_local(async move {
                refresh_collections(store, &session, disposed).await;
            });
        });
    } else {
        web_sys::console::warn_1(
            &"No backend credentials configured; running on demo data.".into(),
        );
        store_set_kpi_data(&store, demo::sample_kpi_data());
        store_set_campaigns(&store, demo::sample_campaigns());
        store_apply_role(&store, Role::Chief);
        store_set_loading(&store, false);
    }

    // Correct the stored view when a role change revokes it.
    Effect::new(move |_| {
        let role = store.role().get();
        let active = store.active_view().get();
        if let Some(corrected) = access::corrected_view(role, active) {
            store_set_active_view(&store, corrected);
        }
    });

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <div class="loading-screen">"Loading..."</div> }
        >
            <Show
                when=move || !configured || store.session().get().is_some()
                fallback=|| view! { <AuthForm /> }
            >
                <div class="app-layout">
                    <Sidebar />
                    <div class="content-column">
                        <Header />
                        <main class="main-content">
                            <ActiveView />
                        </main>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

/// Renders the permitted view. A denied or unresolved view falls back to
/// dashboard content without touching the stored active view, so a later
/// role upgrade lands back where the user was.
#[component]
fn ActiveView() -> impl IntoView {
    let store = use_app_store();
    move || {
        let role = store.role().get();
        let active = store.active_view().get();
        match access::view_to_render(role, active) {
            View::Dashboard => view! { <Dashboard /> }.into_any(),
            View::Table => view! { <KpiTable /> }.into_any(),
            View::DataEntry => view! { <DataEntry /> }.into_any(),
            View::PlanBuilder => view! { <PlanBuilder /> }.into_any(),
            View::Campaigns => view! { <CampaignManager /> }.into_any(),
        }
    }
}
