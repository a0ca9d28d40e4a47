//! Category Pie Chart Component
//!
//! Inline SVG pie of entry counts per category.

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::aggregate::count_by_category;
use crate::models::{EntryType, KpiDataPoint};

const CX: f64 = 130.0;
const CY: f64 = 130.0;
const RADIUS: f64 = 100.0;

fn category_color(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Output => "#003366",
        EntryType::Outtake => "#d42127",
        EntryType::Outcome => "#7195b9",
    }
}

fn point_on_circle(angle: f64) -> (f64, f64) {
    (CX + RADIUS * angle.cos(), CY + RADIUS * angle.sin())
}

/// SVG path for one pie slice spanning [start, end) as fractions of the
/// whole circle, starting at twelve o'clock.
fn slice_path(start: f64, end: f64) -> String {
    let start_angle = start * 2.0 * PI - PI / 2.0;
    let end_angle = end * 2.0 * PI - PI / 2.0;
    let (x1, y1) = point_on_circle(start_angle);
    let (x2, y2) = point_on_circle(end_angle);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {CX:.1} {CY:.1} L {x1:.2} {y1:.2} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

#[component]
pub fn CategoryPieChart(data: Memo<Vec<KpiDataPoint>>) -> impl IntoView {
    let counts = Memo::new(move |_| count_by_category(&data.get()));

    view! {
        <div class="pie-chart-wrap">
            <svg class="pie-chart" viewBox="0 0 260 260" preserveAspectRatio="xMidYMid meet">
                {move || {
                    let counts = counts.get();
                    let total: usize = counts.iter().map(|(_, n)| n).sum();
                    if total == 0 {
                        return view! {
                            <text x="130" y="130" text-anchor="middle" class="chart-empty">
                                "No entries"
                            </text>
                        }
                        .into_any();
                    }
                    if counts.len() == 1 {
                        // A single slice is the full disc; an SVG arc with
                        // coincident endpoints renders nothing.
                        let color = category_color(counts[0].0);
                        return view! {
                            <circle cx="130" cy="130" r=format!("{RADIUS}") fill=color />
                        }
                        .into_any();
                    }
                    let mut cursor = 0.0;
                    counts
                        .iter()
                        .map(|(entry_type, count)| {
                            let fraction = *count as f64 / total as f64;
                            let path = slice_path(cursor, cursor + fraction);
                            cursor += fraction;
                            view! { <path d=path fill=category_color(*entry_type) /> }
                        })
                        .collect_view()
                        .into_any()
                }}
            </svg>
            <ul class="pie-legend">
                {move || {
                    let counts = counts.get();
                    let total: usize = counts.iter().map(|(_, n)| n).sum::<usize>().max(1);
                    counts
                        .iter()
                        .map(|(entry_type, count)| {
                            let percent = (*count as f64 / total as f64 * 100.0).round();
                            view! {
                                <li>
                                    <span
                                        class="legend-swatch"
                                        style=format!("background:{}", category_color(*entry_type))
                                    />
                                    {format!("{}: {percent:.0}%", entry_type.as_str())}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
