//! Frontend Models
//!
//! Canonical record shapes, plus normalization of raw backend rows whose
//! field names may arrive in either snake_case or camelCase.

use serde::{Deserialize, Serialize};

/// Place of an observation in the communications-effectiveness model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Output,
    Outtake,
    Outcome,
}

impl EntryType {
    pub const ALL: [EntryType; 3] = [EntryType::Output, EntryType::Outtake, EntryType::Outcome];

    pub fn parse(raw: &str) -> Option<EntryType> {
        match raw {
            "Output" => Some(EntryType::Output),
            "Outtake" => Some(EntryType::Outtake),
            "Outcome" => Some(EntryType::Outcome),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Output => "Output",
            EntryType::Outtake => "Outtake",
            EntryType::Outcome => "Outcome",
        }
    }
}

/// One reported metric observation.
///
/// Collections are kept newest-first; records are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDataPoint {
    pub id: u32,
    /// ISO 8601 calendar date, "YYYY-MM-DD" (no time component).
    pub date: String,
    #[serde(rename = "type", alias = "entry_type")]
    pub entry_type: EntryType,
    pub metric: String,
    pub quantity: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "campaignId", alias = "campaign_id", default)]
    pub campaign_id: Option<u32>,
    #[serde(alias = "url", default)]
    pub link: Option<String>,
}

/// A named outreach effort with a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "startDate", alias = "start_date")]
    pub start_date: String,
    #[serde(rename = "endDate", alias = "end_date")]
    pub end_date: String,
}

/// A data point as submitted by the entry form, before an identifier is
/// assigned (by the backend, or locally in demo mode).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewKpiDataPoint {
    pub date: String,
    pub entry_type: EntryType,
    pub metric: String,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl NewKpiDataPoint {
    pub fn with_id(self, id: u32) -> KpiDataPoint {
        KpiDataPoint {
            id,
            date: self.date,
            entry_type: self.entry_type,
            metric: self.metric,
            quantity: self.quantity,
            notes: self.notes,
            campaign_id: self.campaign_id,
            link: self.link,
        }
    }
}

/// A campaign as submitted by the create form, before an identifier is
/// assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCampaign {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl NewCampaign {
    pub fn with_id(self, id: u32) -> Campaign {
        Campaign {
            id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Access level resolved once per session from the profile lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Chief,
    Staff,
}

impl Role {
    /// Map a raw profile role string; anything unrecognized degrades to Staff.
    pub fn from_profile(raw: &str) -> Role {
        match raw {
            "chief" => Role::Chief,
            _ => Role::Staff,
        }
    }
}

/// One named screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Table,
    DataEntry,
    PlanBuilder,
    Campaigns,
}

/// Normalize a raw backend row into a canonical data point.
///
/// Key resolution only; a row whose values cannot coerce is an Err for the
/// caller to report.
pub fn data_point_from_row(row: serde_json::Value) -> Result<KpiDataPoint, String> {
    serde_json::from_value(row).map_err(|e| e.to_string())
}

/// Normalize a raw backend row into a canonical campaign.
pub fn campaign_from_row(row: serde_json::Value) -> Result<Campaign, String> {
    serde_json::from_value(row).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_point_snake_case_row() {
        let row = json!({
            "id": 7,
            "date": "2024-09-10",
            "entry_type": "Output",
            "metric": "News release",
            "quantity": 3.0,
            "campaign_id": 1,
            "url": "https://example.com/release"
        });
        let point = data_point_from_row(row).expect("normalize failed");
        assert_eq!(point.entry_type, EntryType::Output);
        assert_eq!(point.campaign_id, Some(1));
        assert_eq!(point.link.as_deref(), Some("https://example.com/release"));
        assert_eq!(point.notes, None);
    }

    #[test]
    fn test_data_point_camel_case_row() {
        let row = json!({
            "id": 8,
            "date": "2024-08-28",
            "type": "Outtake",
            "metric": "Engagement rate",
            "quantity": 4.8,
            "campaignId": 2,
            "link": "https://example.com/post",
            "notes": "Average across channels"
        });
        let point = data_point_from_row(row).expect("normalize failed");
        assert_eq!(point.entry_type, EntryType::Outtake);
        assert_eq!(point.campaign_id, Some(2));
        assert_eq!(point.notes.as_deref(), Some("Average across channels"));
    }

    #[test]
    fn test_data_point_optional_fields_absent() {
        let row = json!({
            "id": 9,
            "date": "2024-03-18",
            "entry_type": "Outcome",
            "metric": "Awareness lift",
            "quantity": 18.0
        });
        let point = data_point_from_row(row).expect("normalize failed");
        assert_eq!(point.campaign_id, None);
        assert_eq!(point.link, None);
        assert_eq!(point.notes, None);
    }

    #[test]
    fn test_campaign_rows_both_conventions() {
        let snake = json!({
            "id": 1,
            "name": "Flood Risk Awareness",
            "description": "Spring preparedness education.",
            "start_date": "2024-02-15",
            "end_date": "2024-04-30"
        });
        let camel = json!({
            "id": 2,
            "name": "Navigation Safety",
            "description": "Seasonal river outreach.",
            "startDate": "2024-05-01",
            "endDate": "2024-09-30"
        });
        let a = campaign_from_row(snake).expect("snake_case row");
        let b = campaign_from_row(camel).expect("camelCase row");
        assert_eq!(a.start_date, "2024-02-15");
        assert_eq!(b.end_date, "2024-09-30");
    }

    #[test]
    fn test_malformed_row_is_reported_not_coerced() {
        let row = json!({
            "id": 10,
            "date": "2024-01-01",
            "entry_type": "Something else",
            "metric": "Reach/Impressions",
            "quantity": 100.0
        });
        assert!(data_point_from_row(row).is_err());
    }

    #[test]
    fn test_role_from_profile_defaults_to_staff() {
        assert_eq!(Role::from_profile("chief"), Role::Chief);
        assert_eq!(Role::from_profile("staff"), Role::Staff);
        assert_eq!(Role::from_profile("intern"), Role::Staff);
    }
}
