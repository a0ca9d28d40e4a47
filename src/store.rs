//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All
//! session-derived state lives here, owned by the top-level App component;
//! mutation goes through the narrow helpers below, never raw field writes
//! from views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Campaign, KpiDataPoint, Role, View};
use crate::supabase::auth::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// KPI observations, newest first
    pub kpi_data: Vec<KpiDataPoint>,
    /// Campaigns, newest first
    pub campaigns: Vec<Campaign>,
    /// Current auth session (None = signed out)
    pub session: Option<Session>,
    /// Role resolved from the profile lookup (None until resolved)
    pub role: Option<Role>,
    /// Currently selected view
    pub active_view: View,
    /// True while the session/role pipeline is in flight
    pub loading: bool,
}

impl AppState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Login-result / logout entry point: adopt a new session value.
pub fn store_apply_session(store: &AppStore, session: Option<Session>) {
    *store.session().write() = session;
}

pub fn store_apply_role(store: &AppStore, role: Role) {
    *store.role().write() = Some(role);
}

/// Session ended: clear role and both collections.
pub fn store_clear_session_state(store: &AppStore) {
    *store.role().write() = None;
    store.kpi_data().write().clear();
    store.campaigns().write().clear();
}

pub fn store_set_kpi_data(store: &AppStore, data: Vec<KpiDataPoint>) {
    *store.kpi_data().write() = data;
}

pub fn store_set_campaigns(store: &AppStore, campaigns: Vec<Campaign>) {
    *store.campaigns().write() = campaigns;
}

/// Insert-result entry point: newest records go to the front.
pub fn store_prepend_data_point(store: &AppStore, point: KpiDataPoint) {
    store.kpi_data().write().insert(0, point);
}

pub fn store_prepend_campaign(store: &AppStore, campaign: Campaign) {
    store.campaigns().write().insert(0, campaign);
}

pub fn store_set_active_view(store: &AppStore, view: View) {
    *store.active_view().write() = view;
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    *store.loading().write() = loading;
}
