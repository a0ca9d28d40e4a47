//! Monthly Bar Chart Component
//!
//! Inline SVG bar chart of month-bucketed sums for one metric.

use leptos::prelude::*;

use crate::aggregate::monthly_bucket_sum;
use crate::components::format_quantity;
use crate::models::KpiDataPoint;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const MARGIN: f64 = 20.0;
const BASELINE: f64 = 220.0;
const MAX_BAR_HEIGHT: f64 = 190.0;

#[component]
pub fn MonthlyBarChart(
    data: Memo<Vec<KpiDataPoint>>,
    metric: &'static str,
) -> impl IntoView {
    let buckets = Memo::new(move |_| monthly_bucket_sum(&data.get(), metric));

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
        >
            <line
                x1=format!("{MARGIN}")
                y1=format!("{BASELINE}")
                x2=format!("{}", WIDTH - MARGIN)
                y2=format!("{BASELINE}")
                class="chart-axis"
            />
            {move || {
                let buckets = buckets.get();
                if buckets.is_empty() {
                    return view! {
                        <text x="300" y="130" text-anchor="middle" class="chart-empty">
                            "No data for this selection"
                        </text>
                    }
                    .into_any();
                }
                let max = buckets.iter().map(|b| b.total).fold(0.0_f64, f64::max).max(1.0);
                let slot = (WIDTH - 2.0 * MARGIN) / buckets.len() as f64;
                let bar_width = (slot * 0.6).min(64.0);
                buckets
                    .iter()
                    .enumerate()
                    .map(|(i, bucket)| {
                        let height = (bucket.total / max) * MAX_BAR_HEIGHT;
                        let x = MARGIN + i as f64 * slot + (slot - bar_width) / 2.0;
                        let y = BASELINE - height;
                        let center = x + bar_width / 2.0;
                        view! {
                            <g>
                                <rect
                                    x=format!("{x:.1}")
                                    y=format!("{y:.1}")
                                    width=format!("{bar_width:.1}")
                                    height=format!("{height:.1}")
                                    class="bar"
                                />
                                <text
                                    x=format!("{center:.1}")
                                    y=format!("{:.1}", y - 6.0)
                                    text-anchor="middle"
                                    class="bar-value"
                                >
                                    {format_quantity(bucket.total)}
                                </text>
                                <text
                                    x=format!("{center:.1}")
                                    y=format!("{:.1}", BASELINE + 18.0)
                                    text-anchor="middle"
                                    class="bar-label"
                                >
                                    {bucket.label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </svg>
    }
}
