//! Table Sort Controller
//!
//! Column-header sort state for the data explorer. The initial state is
//! "no sort applied"; once a key is chosen it only toggles between
//! ascending and descending, never back to unsorted.

use std::cmp::Ordering;

use crate::models::KpiDataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    EntryType,
    Metric,
    Quantity,
    Link,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::EntryType => "type",
            SortKey::Metric => "metric",
            SortKey::Quantity => "quantity",
            SortKey::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Next sort state after a click on a column header. Re-clicking the key
/// while ascending flips to descending; anything else starts ascending.
pub fn request_sort(current: Option<SortConfig>, key: SortKey) -> SortConfig {
    let direction = match current {
        Some(cfg) if cfg.key == key && cfg.direction == SortDirection::Ascending => {
            SortDirection::Descending
        }
        _ => SortDirection::Ascending,
    };
    SortConfig { key, direction }
}

/// Comparable projection of a record field. Absent values coerce to the
/// empty string, matching how they render.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

fn sort_value(point: &KpiDataPoint, key: SortKey) -> SortValue {
    match key {
        SortKey::Date => SortValue::Text(point.date.clone()),
        SortKey::EntryType => SortValue::Text(point.entry_type.as_str().to_string()),
        SortKey::Metric => SortValue::Text(point.metric.clone()),
        SortKey::Quantity => SortValue::Number(point.quantity),
        SortKey::Link => SortValue::Text(point.link.clone().unwrap_or_default()),
    }
}

/// New ordered view of the input; the input itself is not mutated. Equal
/// values keep their relative order (stable sort).
pub fn sorted(data: &[KpiDataPoint], config: Option<SortConfig>) -> Vec<KpiDataPoint> {
    let mut items = data.to_vec();
    if let Some(cfg) = config {
        items.sort_by(|a, b| {
            let ord = sort_value(a, cfg.key).compare(&sort_value(b, cfg.key));
            match cfg.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;

    fn make_point(id: u32, date: &str, quantity: f64, link: Option<&str>) -> KpiDataPoint {
        KpiDataPoint {
            id,
            date: date.to_string(),
            entry_type: EntryType::Outtake,
            metric: "Media pickups".to_string(),
            quantity,
            notes: None,
            campaign_id: None,
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn test_direction_toggles_and_never_unsets() {
        let first = request_sort(None, SortKey::Date);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = request_sort(Some(first), SortKey::Date);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = request_sort(Some(second), SortKey::Date);
        assert_eq!(third.key, SortKey::Date);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_key_change_resets_to_ascending() {
        let date_desc = SortConfig { key: SortKey::Date, direction: SortDirection::Descending };
        let next = request_sort(Some(date_desc), SortKey::Quantity);
        assert_eq!(next.key, SortKey::Quantity);
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_no_config_preserves_input_order() {
        let data = vec![
            make_point(2, "2024-09-10", 14.0, None),
            make_point(1, "2024-09-05", 3.0, None),
        ];
        let out = sorted(&data, None);
        assert_eq!(out[0].id, 2);
        assert_eq!(out[1].id, 1);
    }

    #[test]
    fn test_sort_by_date_both_directions() {
        let data = vec![
            make_point(2, "2024-09-10", 14.0, None),
            make_point(1, "2024-09-05", 3.0, None),
            make_point(3, "2024-10-01", 7.0, None),
        ];
        let asc = sorted(&data, Some(SortConfig { key: SortKey::Date, direction: SortDirection::Ascending }));
        assert_eq!(asc.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let desc = sorted(&data, Some(SortConfig { key: SortKey::Date, direction: SortDirection::Descending }));
        assert_eq!(desc.iter().map(|d| d.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_by_quantity_is_numeric() {
        let data = vec![
            make_point(1, "2024-09-01", 120.0, None),
            make_point(2, "2024-09-02", 4.8, None),
            make_point(3, "2024-09-03", 18.0, None),
        ];
        let asc = sorted(&data, Some(SortConfig { key: SortKey::Quantity, direction: SortDirection::Ascending }));
        assert_eq!(asc.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_link_sorts_as_empty_string() {
        let data = vec![
            make_point(1, "2024-09-01", 1.0, Some("https://example.com/a")),
            make_point(2, "2024-09-02", 1.0, None),
        ];
        let asc = sorted(&data, Some(SortConfig { key: SortKey::Link, direction: SortDirection::Ascending }));
        assert_eq!(asc[0].id, 2);
    }

    #[test]
    fn test_equal_values_keep_relative_order() {
        let data = vec![
            make_point(10, "2024-09-10", 5.0, None),
            make_point(11, "2024-09-10", 5.0, None),
            make_point(12, "2024-09-10", 5.0, None),
        ];
        let asc = sorted(&data, Some(SortConfig { key: SortKey::Date, direction: SortDirection::Ascending }));
        assert_eq!(asc.iter().map(|d| d.id).collect::<Vec<_>>(), vec![10, 11, 12]);
    }

    #[test]
    fn test_sorting_does_not_mutate_input() {
        let data = vec![
            make_point(2, "2024-09-10", 14.0, None),
            make_point(1, "2024-09-05", 3.0, None),
        ];
        let _ = sorted(&data, Some(SortConfig { key: SortKey::Date, direction: SortDirection::Ascending }));
        assert_eq!(data[0].id, 2);
    }
}
