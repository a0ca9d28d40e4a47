//! Static Tables
//!
//! Navigation allow-lists and the per-type metric catalog.

use crate::models::{EntryType, Role, View};

/// One sidebar entry with its role allow-list.
pub struct NavItem {
    pub id: View,
    pub label: &'static str,
    pub roles: &'static [Role],
}

pub const NAVIGATION_ITEMS: &[NavItem] = &[
    NavItem { id: View::Dashboard, label: "Dashboard", roles: &[Role::Chief, Role::Staff] },
    NavItem { id: View::Table, label: "Data Explorer", roles: &[Role::Chief, Role::Staff] },
    NavItem { id: View::DataEntry, label: "Add Entry", roles: &[Role::Chief, Role::Staff] },
    NavItem { id: View::Campaigns, label: "Campaigns", roles: &[Role::Chief] },
    NavItem { id: View::PlanBuilder, label: "Plan Builder", roles: &[Role::Chief] },
];

/// Metric catalog per entry type. Every list ends with "Other", which the
/// entry form turns into a free-text custom metric.
pub fn metric_options(entry_type: EntryType) -> &'static [&'static str] {
    match entry_type {
        EntryType::Output => &[
            "News release",
            "Media advisory",
            "Media engagement (interviews/briefs)",
            "Web article/Feature",
            "DVIDS upload (photo/video)",
            "Social posts (FB/X/IG/LI)",
            "Infographic",
            "Factsheet/One-pager",
            "FAQ/Q&A",
            "Video package/Reel/Short",
            "Photo set",
            "Public meeting/Open house",
            "Stakeholder briefing deck",
            "Talking points/Speech",
            "Newsletter (internal/external)",
            "Public notice",
            "Blog post",
            "Radio PSA/Podcast guest",
            "Op-ed",
            "Email to distro/Workforce note",
            "Congressional update",
            "Other",
        ],
        EntryType::Outtake => &[
            "Reach/Impressions",
            "Engagement rate",
            "Reactions/Comments/Shares",
            "Click-through rate",
            "Video views",
            "Average watch time",
            "Web sessions",
            "Time on page",
            "Bounce rate",
            "Media pickups",
            "Share of voice",
            "Earned sentiment",
            "Event attendance",
            "Questions received",
            "Call/email volume",
            "Newsletter",
            "Other",
        ],
        EntryType::Outcome => &[
            "Awareness lift",
            "Understanding of issue/process",
            "Trust/credibility indicators",
            "Intent to participate/comply",
            "Permit/application completeness",
            "Public meeting civility/productivity",
            "Rumor reduction/Misinfo countered",
            "Safety behavior adoption (e.g., life jacket use)",
            "Preparedness actions taken",
            "Support for decisions/policies",
            "Stakeholder collaboration",
            "Other",
        ],
    }
}
