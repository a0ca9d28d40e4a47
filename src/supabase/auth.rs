//! Auth Endpoints
//!
//! Password sign-in/sign-up/sign-out against the hosted auth service, plus
//! session persistence in localStorage so a reload restores the session.

use serde::{Deserialize, Serialize};

use super::{error_message, request};
use crate::config;

const SESSION_STORAGE_KEY: &str = "kpi-tracker.session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// The slice of the auth service's session payload this app consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub user: AuthUser,
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let url = format!("{}/auth/v1/token?grant_type=password", config::base_url());
    let body = serde_json::json!({ "email": email, "password": password });
    let (status, value) = request("POST", &url, None, Some(&body), None).await?;
    if status == 200 {
        serde_json::from_value(value).map_err(|e| e.to_string())
    } else {
        Err(error_message(&value).unwrap_or_else(|| "Sign in failed".to_string()))
    }
}

/// Registers the account; the backend creates the profile row via trigger.
/// Email confirmation happens out of band, so no session comes back here.
pub async fn sign_up(email: &str, password: &str) -> Result<(), String> {
    let url = format!("{}/auth/v1/signup", config::base_url());
    let body = serde_json::json!({ "email": email, "password": password });
    let (status, value) = request("POST", &url, None, Some(&body), None).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_message(&value).unwrap_or_else(|| "Sign up failed".to_string()))
    }
}

pub async fn sign_out(session: &Session) -> Result<(), String> {
    let url = format!("{}/auth/v1/logout", config::base_url());
    let (status, value) = request("POST", &url, Some(&session.access_token), None, None).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_message(&value).unwrap_or_else(|| "Sign out failed".to_string()))
    }
}

// ========================
// Session Persistence
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn persist_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if storage.set_item(SESSION_STORAGE_KEY, &json).is_err() {
                web_sys::console::warn_1(&"Failed to persist session".into());
            }
        }
        Err(e) => web_sys::console::warn_1(&format!("Failed to encode session: {e}").into()),
    }
}

/// Session restored from a previous page load, if any. A stale or
/// unreadable entry is discarded.
pub fn stored_session() -> Option<Session> {
    let storage = local_storage()?;
    let json = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(_) => {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
