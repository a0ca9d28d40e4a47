//! Application Context
//!
//! Shared triggers provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch both collections from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch both collections from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a refetch of KPI data and campaigns
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
