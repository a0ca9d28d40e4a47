//! Supabase REST Client
//!
//! Thin fetch plumbing shared by the auth and table endpoints. Every
//! request carries the project apikey; authenticated calls add the session
//! bearer token. Responses come back as (status, JSON body) so callers can
//! branch on backend error payloads.

pub mod auth;
pub mod tables;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Issue one request against the configured backend. An empty response
/// body (204, Prefer: return=minimal) surfaces as `Value::Null`.
pub(crate) async fn request(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: Option<&serde_json::Value>,
    prefer: Option<&str>,
) -> Result<(u16, serde_json::Value), String> {
    let headers = Headers::new().map_err(js_error)?;
    headers.append("apikey", config::anon_key()).map_err(js_error)?;
    let token = bearer.unwrap_or_else(|| config::anon_key());
    headers
        .append("Authorization", &format!("Bearer {token}"))
        .map_err(js_error)?;
    if let Some(prefer) = prefer {
        headers.append("Prefer", prefer).map_err(js_error)?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        headers
            .append("Content-Type", "application/json")
            .map_err(js_error)?;
        let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;
        opts.set_body(&JsValue::from_str(&payload));
    }
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or("no window object")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text.as_string().unwrap_or_default();
    let value = if text.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&text).map_err(|e| e.to_string())?
    };
    Ok((status, value))
}

/// Pull the human-readable message out of a backend error payload.
pub(crate) fn error_message(value: &serde_json::Value) -> Option<String> {
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
