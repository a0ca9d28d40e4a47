//! Backend Configuration
//!
//! Supabase credentials are injected at compile time. When either is
//! missing the app runs in demo mode on static sample data.

pub const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");
pub const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

/// True when a live backend is configured; false selects demo mode.
pub fn is_configured() -> bool {
    SUPABASE_URL.is_some() && SUPABASE_ANON_KEY.is_some()
}

pub fn base_url() -> &'static str {
    SUPABASE_URL.unwrap_or("")
}

pub fn anon_key() -> &'static str {
    SUPABASE_ANON_KEY.unwrap_or("")
}
