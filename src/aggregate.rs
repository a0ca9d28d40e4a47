//! Data Aggregation Helpers
//!
//! Pure functions deriving dashboard figures from a data-point collection.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{EntryType, KpiDataPoint};

/// Dashboard campaign selector; `All` bypasses filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampaignFilter {
    #[default]
    All,
    Campaign(u32),
}

/// One month's summed quantity for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    /// Display label, e.g. "Sep 24".
    pub label: String,
    pub total: f64,
}

pub fn filter_by_campaign(data: &[KpiDataPoint], filter: CampaignFilter) -> Vec<KpiDataPoint> {
    match filter {
        CampaignFilter::All => data.to_vec(),
        CampaignFilter::Campaign(id) => data
            .iter()
            .filter(|d| d.campaign_id == Some(id))
            .cloned()
            .collect(),
    }
}

/// The matching point with the maximum date, or None if no point matches.
///
/// On a date tie the earliest-positioned element wins; collections are kept
/// newest-first, so that is the most recently entered record.
pub fn latest<'a>(data: &'a [KpiDataPoint], metric: &str) -> Option<&'a KpiDataPoint> {
    data.iter()
        .filter(|d| d.metric == metric)
        .reduce(|best, d| if d.date > best.date { d } else { best })
}

/// Sum of quantities among points matching the metric name exactly.
pub fn total(data: &[KpiDataPoint], metric: &str) -> f64 {
    data.iter()
        .filter(|d| d.metric == metric)
        .map(|d| d.quantity)
        .sum()
}

/// Matching points grouped by calendar month, summed, chronologically
/// ascending. Points with unparseable dates are skipped.
pub fn monthly_bucket_sum(data: &[KpiDataPoint], metric: &str) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for point in data.iter().filter(|d| d.metric == metric) {
        let Ok(date) = NaiveDate::parse_from_str(&point.date, "%Y-%m-%d") else {
            continue;
        };
        use chrono::Datelike;
        *buckets.entry((date.year(), date.month())).or_insert(0.0) += point.quantity;
    }
    buckets
        .into_iter()
        .map(|((year, month), total)| {
            // First of the month is a safe anchor for the label.
            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b %y").to_string())
                .unwrap_or_else(|| format!("{year}-{month:02}"));
            MonthBucket { label, total }
        })
        .collect()
}

/// Count of points per category, zero-count categories omitted.
pub fn count_by_category(data: &[KpiDataPoint]) -> Vec<(EntryType, usize)> {
    EntryType::ALL
        .iter()
        .map(|ty| (*ty, data.iter().filter(|d| d.entry_type == *ty).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_point(id: u32, date: &str, entry_type: EntryType, metric: &str, quantity: f64) -> KpiDataPoint {
        KpiDataPoint {
            id,
            date: date.to_string(),
            entry_type,
            metric: metric.to_string(),
            quantity,
            notes: None,
            campaign_id: None,
            link: None,
        }
    }

    #[test]
    fn test_latest_none_when_no_match() {
        let data = vec![make_point(1, "2024-09-10", EntryType::Output, "News release", 3.0)];
        assert!(latest(&data, "Media pickups").is_none());
    }

    #[test]
    fn test_latest_picks_maximum_date() {
        let data = vec![
            make_point(1, "2024-09-05", EntryType::Outtake, "Media pickups", 3.0),
            make_point(2, "2024-09-10", EntryType::Outtake, "Media pickups", 14.0),
            make_point(3, "2024-09-12", EntryType::Output, "News release", 1.0),
        ];
        let found = latest(&data, "Media pickups").expect("should match");
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_latest_tie_keeps_earliest_position() {
        // Newest-first collection: the first element is the most recently entered.
        let data = vec![
            make_point(5, "2024-09-10", EntryType::Outtake, "Media pickups", 9.0),
            make_point(4, "2024-09-10", EntryType::Outtake, "Media pickups", 2.0),
        ];
        assert_eq!(latest(&data, "Media pickups").unwrap().id, 5);
    }

    #[test]
    fn test_total_zero_when_no_match() {
        let data = vec![make_point(1, "2024-09-10", EntryType::Output, "News release", 3.0)];
        assert_eq!(total(&data, "Video views"), 0.0);
    }

    #[test]
    fn test_total_is_order_invariant() {
        let mut data = vec![
            make_point(1, "2024-09-05", EntryType::Output, "News release", 3.0),
            make_point(2, "2024-09-10", EntryType::Output, "News release", 2.0),
            make_point(3, "2024-08-01", EntryType::Outtake, "Video views", 100.0),
        ];
        let forward = total(&data, "News release");
        data.reverse();
        assert_eq!(forward, total(&data, "News release"));
        assert_eq!(forward, 5.0);
    }

    #[test]
    fn test_monthly_bucket_sums_across_categories() {
        let data = vec![
            make_point(1, "2024-09-10", EntryType::Outtake, "Media pickups", 14.0),
            make_point(2, "2024-09-05", EntryType::Output, "Media pickups", 3.0),
        ];
        let buckets = monthly_bucket_sum(&data, "Media pickups");
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, "Sep 24");
        assert_eq!(buckets[0].total, 17.0);
    }

    #[test]
    fn test_monthly_buckets_ascending_and_skip_bad_dates() {
        let data = vec![
            make_point(1, "2024-09-10", EntryType::Outtake, "Media pickups", 5.0),
            make_point(2, "2024-03-12", EntryType::Outtake, "Media pickups", 7.0),
            make_point(3, "not-a-date", EntryType::Outtake, "Media pickups", 99.0),
        ];
        let buckets = monthly_bucket_sum(&data, "Media pickups");
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "Mar 24");
        assert_eq!(buckets[1].label, "Sep 24");
    }

    #[test]
    fn test_filter_by_campaign() {
        let mut a = make_point(1, "2024-09-10", EntryType::Outtake, "Media pickups", 14.0);
        a.campaign_id = Some(1);
        let b = make_point(2, "2024-09-05", EntryType::Output, "News release", 3.0);
        let data = vec![a, b];

        assert_eq!(filter_by_campaign(&data, CampaignFilter::All).len(), 2);
        let filtered = filter_by_campaign(&data, CampaignFilter::Campaign(1));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_count_by_category_omits_empty() {
        let data = vec![
            make_point(1, "2024-09-10", EntryType::Outtake, "Media pickups", 14.0),
            make_point(2, "2024-09-05", EntryType::Outtake, "Video views", 120.0),
            make_point(3, "2024-09-01", EntryType::Output, "News release", 1.0),
        ];
        let counts = count_by_category(&data);
        assert_eq!(counts, vec![(EntryType::Output, 1), (EntryType::Outtake, 2)]);
    }
}
