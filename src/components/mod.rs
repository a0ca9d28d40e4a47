//! UI Components
//!
//! Leptos components for each view of the tracker.

mod auth_form;
mod bar_chart;
mod campaign_manager;
mod dashboard;
mod data_entry;
mod header;
mod kpi_card;
mod kpi_table;
mod pie_chart;
mod plan_builder;
mod sidebar;

pub use auth_form::AuthForm;
pub use bar_chart::MonthlyBarChart;
pub use campaign_manager::CampaignManager;
pub use dashboard::Dashboard;
pub use data_entry::DataEntry;
pub use header::Header;
pub use kpi_card::KpiCard;
pub use kpi_table::KpiTable;
pub use pie_chart::CategoryPieChart;
pub use plan_builder::PlanBuilder;
pub use sidebar::Sidebar;

/// Render a quantity the way the tables and cards expect: whole numbers
/// grouped by thousands without a decimal point, fractional values as-is.
pub(crate) fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        let raw = format!("{quantity:.0}");
        let (sign, digits) = match raw.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", raw.as_str()),
        };
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{sign}{grouped}")
    } else {
        format!("{quantity}")
    }
}

/// Today's calendar date, "YYYY-MM-DD", from the browser clock.
pub(crate) fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::format_quantity;

    #[test]
    fn test_whole_quantities_group_thousands() {
        assert_eq!(format_quantity(14.0), "14");
        assert_eq!(format_quantity(1260.0), "1,260");
        assert_eq!(format_quantity(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_fractional_quantities_render_as_is() {
        assert_eq!(format_quantity(4.8), "4.8");
    }

    #[test]
    fn test_negative_whole_quantity() {
        assert_eq!(format_quantity(-1260.0), "-1,260");
    }
}
