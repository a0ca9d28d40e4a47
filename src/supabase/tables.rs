//! Table Endpoints
//!
//! Inserts and ordered list fetches for the kpi_data and campaigns tables,
//! plus the profile role lookup. Rows are normalized individually so one
//! malformed row cannot sink a whole fetch.

use serde::Serialize;

use super::auth::Session;
use super::{error_message, request};
use crate::config;
use crate::models::{
    campaign_from_row, data_point_from_row, Campaign, KpiDataPoint, NewCampaign, NewKpiDataPoint,
    Role,
};

fn rest_error(value: &serde_json::Value) -> String {
    error_message(value).unwrap_or_else(|| "Request failed".to_string())
}

fn normalize_rows<T>(
    value: serde_json::Value,
    table: &str,
    normalize: fn(serde_json::Value) -> Result<T, String>,
) -> Result<Vec<T>, String> {
    let serde_json::Value::Array(rows) = value else {
        return Err(format!("unexpected {table} response shape"));
    };
    Ok(rows
        .into_iter()
        .filter_map(|row| match normalize(row) {
            Ok(record) => Some(record),
            Err(e) => {
                web_sys::console::warn_1(&format!("Skipping malformed {table} row: {e}").into());
                None
            }
        })
        .collect())
}

pub async fn fetch_kpi_data(session: &Session) -> Result<Vec<KpiDataPoint>, String> {
    let url = format!("{}/rest/v1/kpi_data?select=*&order=date.desc", config::base_url());
    let (status, value) = request("GET", &url, Some(&session.access_token), None, None).await?;
    if status != 200 {
        return Err(rest_error(&value));
    }
    normalize_rows(value, "kpi_data", data_point_from_row)
}

pub async fn fetch_campaigns(session: &Session) -> Result<Vec<Campaign>, String> {
    let url = format!(
        "{}/rest/v1/campaigns?select=*&order=start_date.desc",
        config::base_url()
    );
    let (status, value) = request("GET", &url, Some(&session.access_token), None, None).await?;
    if status != 200 {
        return Err(rest_error(&value));
    }
    normalize_rows(value, "campaigns", campaign_from_row)
}

/// Ok(None) means no profile row exists for the user, which callers treat
/// as "use the default role" rather than as an error.
pub async fn fetch_profile_role(session: &Session) -> Result<Option<Role>, String> {
    let url = format!(
        "{}/rest/v1/profiles?id=eq.{}&select=role",
        config::base_url(),
        session.user.id
    );
    let (status, value) = request("GET", &url, Some(&session.access_token), None, None).await?;
    if status != 200 {
        return Err(rest_error(&value));
    }
    let rows = value.as_array().ok_or("unexpected profiles response shape")?;
    match rows.first() {
        None => Ok(None),
        Some(row) => {
            let raw = row.get("role").and_then(|v| v.as_str()).unwrap_or("");
            Ok(Some(Role::from_profile(raw)))
        }
    }
}

#[derive(Serialize)]
struct InsertKpiRow<'a> {
    #[serde(flatten)]
    point: &'a NewKpiDataPoint,
    user_id: &'a str,
}

#[derive(Serialize)]
struct InsertCampaignRow<'a> {
    #[serde(flatten)]
    campaign: &'a NewCampaign,
    user_id: &'a str,
}

pub async fn insert_kpi_data(session: &Session, point: &NewKpiDataPoint) -> Result<(), String> {
    let url = format!("{}/rest/v1/kpi_data", config::base_url());
    let body = serde_json::to_value(InsertKpiRow { point, user_id: &session.user.id })
        .map_err(|e| e.to_string())?;
    let (status, value) = request(
        "POST",
        &url,
        Some(&session.access_token),
        Some(&body),
        Some("return=minimal"),
    )
    .await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(rest_error(&value))
    }
}

pub async fn insert_campaign(session: &Session, campaign: &NewCampaign) -> Result<(), String> {
    let url = format!("{}/rest/v1/campaigns", config::base_url());
    let body = serde_json::to_value(InsertCampaignRow { campaign, user_id: &session.user.id })
        .map_err(|e| e.to_string())?;
    let (status, value) = request(
        "POST",
        &url,
        Some(&session.access_token),
        Some(&body),
        Some("return=minimal"),
    )
    .await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(rest_error(&value))
    }
}
