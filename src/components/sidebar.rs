//! Sidebar Component
//!
//! Navigation buttons filtered by the resolved role.

use leptos::prelude::*;

use crate::access::visible_nav_items;
use crate::store::{store_set_active_view, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"USACE"</div>
            <nav class="sidebar-nav">
                {move || {
                    let role = store.role().get();
                    visible_nav_items(role)
                        .into_iter()
                        .map(|item| {
                            let id = item.id;
                            let is_active = move || store.active_view().get() == id;
                            view! {
                                <button
                                    class=move || {
                                        if is_active() { "nav-btn active" } else { "nav-btn" }
                                    }
                                    on:click=move |_| store_set_active_view(&store, id)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <p class="sidebar-footer">"PAO Communications"</p>
        </aside>
    }
}
