//! Demo Data Provider
//!
//! Static sample collections used when no backend credentials are compiled
//! in. Each call returns fresh owned copies so view-layer inserts never
//! alias the fixtures. Demo mode runs with the Chief role and no login gate.

use crate::models::{Campaign, EntryType, KpiDataPoint};

pub fn sample_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Snake River Navigation Safety".to_string(),
            description: "Seasonal outreach encouraging safe recreation along the Lower Snake River."
                .to_string(),
            start_date: "2024-05-01".to_string(),
            end_date: "2024-09-30".to_string(),
        },
        Campaign {
            id: 2,
            name: "Mill Creek Flood Risk Awareness".to_string(),
            description: "Community education campaign focused on spring flood preparedness."
                .to_string(),
            start_date: "2024-02-15".to_string(),
            end_date: "2024-04-30".to_string(),
        },
    ]
}

pub fn sample_kpi_data() -> Vec<KpiDataPoint> {
    vec![
        KpiDataPoint {
            id: 101,
            date: "2024-09-10".to_string(),
            entry_type: EntryType::Outtake,
            metric: "Media pickups".to_string(),
            quantity: 14.0,
            notes: Some("Regional outlets covered the new lock operations schedule.".to_string()),
            campaign_id: Some(1),
            link: None,
        },
        KpiDataPoint {
            id: 102,
            date: "2024-09-05".to_string(),
            entry_type: EntryType::Output,
            metric: "News release".to_string(),
            quantity: 3.0,
            notes: Some("Safety reminder releases distributed to local media partners.".to_string()),
            campaign_id: Some(1),
            link: Some("https://example.com/releases/snake-river-safety".to_string()),
        },
        KpiDataPoint {
            id: 103,
            date: "2024-08-28".to_string(),
            entry_type: EntryType::Outtake,
            metric: "Engagement rate".to_string(),
            quantity: 4.8,
            notes: Some("Average engagement across campaign social content.".to_string()),
            campaign_id: Some(1),
            link: None,
        },
        KpiDataPoint {
            id: 104,
            date: "2024-03-18".to_string(),
            entry_type: EntryType::Outcome,
            metric: "Awareness lift".to_string(),
            quantity: 18.0,
            notes: Some("Post-event survey showed increased awareness of flood risks.".to_string()),
            campaign_id: Some(2),
            link: None,
        },
        KpiDataPoint {
            id: 105,
            date: "2024-03-12".to_string(),
            entry_type: EntryType::Outtake,
            metric: "Video views".to_string(),
            quantity: 1260.0,
            notes: Some("Preparedness PSA performance on social channels.".to_string()),
            campaign_id: Some(2),
            link: None,
        },
    ]
}

/// Locally assigned identifier: one greater than the current maximum, or 1
/// for an empty collection.
pub fn next_data_point_id(data: &[KpiDataPoint]) -> u32 {
    data.iter().map(|d| d.id).max().unwrap_or(0) + 1
}

pub fn next_campaign_id(campaigns: &[Campaign]) -> u32 {
    campaigns.iter().map(|c| c.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_max_plus_one() {
        let data = sample_kpi_data();
        assert_eq!(next_data_point_id(&data), 106);
    }

    #[test]
    fn test_next_id_on_empty_collection() {
        assert_eq!(next_data_point_id(&[]), 1);
        assert_eq!(next_campaign_id(&[]), 1);
    }

    #[test]
    fn test_next_id_survives_unordered_ids() {
        let mut data = sample_kpi_data();
        data.reverse();
        assert_eq!(next_data_point_id(&data), 106);
        assert_eq!(next_campaign_id(&sample_campaigns()), 3);
    }

    #[test]
    fn test_samples_are_independent_copies() {
        let mut first = sample_kpi_data();
        first[0].quantity = 999.0;
        let second = sample_kpi_data();
        assert_eq!(second[0].quantity, 14.0);
    }
}
