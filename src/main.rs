//! PAO KPI Tracker Frontend Entry Point

mod access;
mod aggregate;
mod app;
mod components;
mod config;
mod constants;
mod context;
mod demo;
mod models;
mod sort;
mod store;
mod supabase;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
