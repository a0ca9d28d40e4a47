//! Header Component
//!
//! Signed-in identity and sign-out, or the demo-data notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::store::{store_apply_session, use_app_store, AppStateStoreFields};
use crate::supabase::auth;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let sign_out = move |_| {
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = auth::sign_out(&session).await {
                // The local session is discarded regardless.
                web_sys::console::error_1(&format!("Error signing out: {e}").into());
            }
            auth::clear_session();
            store_apply_session(&store, None);
        });
    };

    view! {
        <header class="app-header">
            <h1 class="app-title">"PAO KPI Tracker"</h1>
            <div class="header-right">
                {move || {
                    if !config::is_configured() {
                        view! {
                            <span class="header-note">
                                "Viewing " <strong>"demo data"</strong>
                            </span>
                        }
                        .into_any()
                    } else {
                        let email = store
                            .session()
                            .get()
                            .map(|s| s.user.email)
                            .unwrap_or_default();
                        view! {
                            <span class="header-note">
                                "Signed in as " <strong>{email}</strong>
                            </span>
                            <button class="sign-out-btn" on:click=sign_out>
                                "Sign Out"
                            </button>
                        }
                        .into_any()
                    }
                }}
            </div>
        </header>
    }
}
