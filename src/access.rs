//! View-Access Gate
//!
//! Pure (role, view) -> permission mapping driven by the navigation table.

use crate::constants::{NavItem, NAVIGATION_ITEMS};
use crate::models::{Role, View};

/// True iff the view's allow-list contains the role. With no resolved role
/// nothing is permitted.
pub fn is_view_allowed(role: Option<Role>, view: View) -> bool {
    let Some(role) = role else {
        return false;
    };
    NAVIGATION_ITEMS
        .iter()
        .find(|item| item.id == view)
        .map(|item| item.roles.contains(&role))
        .unwrap_or(false)
}

/// The correction a role change demands, if any: a resolved role whose
/// allow-list no longer covers the active view falls back to the dashboard.
/// An unresolved role corrects nothing; the stored view waits for it.
pub fn corrected_view(role: Option<Role>, active: View) -> Option<View> {
    if role.is_some() && !is_view_allowed(role, active) {
        Some(View::Dashboard)
    } else {
        None
    }
}

/// The view whose content should render: the active view when permitted,
/// dashboard content otherwise. Pure fallback; the stored active view is
/// left alone so a later role upgrade lands back where the user was.
pub fn view_to_render(role: Option<Role>, active: View) -> View {
    if is_view_allowed(role, active) {
        active
    } else {
        View::Dashboard
    }
}

/// Sidebar entries visible to the role, in table order.
pub fn visible_nav_items(role: Option<Role>) -> Vec<&'static NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    NAVIGATION_ITEMS
        .iter()
        .filter(|item| item.roles.contains(&role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VIEWS: [View; 5] = [
        View::Dashboard,
        View::Table,
        View::DataEntry,
        View::PlanBuilder,
        View::Campaigns,
    ];

    #[test]
    fn test_no_role_is_never_allowed() {
        for view in ALL_VIEWS {
            assert!(!is_view_allowed(None, view));
        }
    }

    #[test]
    fn test_allowed_iff_in_allow_list() {
        for item in NAVIGATION_ITEMS {
            for role in [Role::Chief, Role::Staff] {
                assert_eq!(is_view_allowed(Some(role), item.id), item.roles.contains(&role));
            }
        }
    }

    #[test]
    fn test_staff_denied_chief_views() {
        assert!(!is_view_allowed(Some(Role::Staff), View::Campaigns));
        assert!(!is_view_allowed(Some(Role::Staff), View::PlanBuilder));
        assert!(is_view_allowed(Some(Role::Staff), View::Dashboard));
        assert!(is_view_allowed(Some(Role::Staff), View::Table));
        assert!(is_view_allowed(Some(Role::Staff), View::DataEntry));
    }

    #[test]
    fn test_chief_sees_every_nav_item() {
        let items = visible_nav_items(Some(Role::Chief));
        assert_eq!(items.len(), NAVIGATION_ITEMS.len());
    }

    #[test]
    fn test_staff_nav_items_exclude_chief_only() {
        let items = visible_nav_items(Some(Role::Staff));
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.id != View::Campaigns && item.id != View::PlanBuilder));
    }

    #[test]
    fn test_no_role_sees_nothing() {
        assert!(visible_nav_items(None).is_empty());
    }

    #[test]
    fn test_role_change_revoking_active_view_corrects_to_dashboard() {
        assert_eq!(corrected_view(Some(Role::Staff), View::Campaigns), Some(View::Dashboard));
        assert_eq!(corrected_view(Some(Role::Staff), View::PlanBuilder), Some(View::Dashboard));
        assert_eq!(corrected_view(Some(Role::Chief), View::Campaigns), None);
        assert_eq!(corrected_view(Some(Role::Staff), View::Table), None);
    }

    #[test]
    fn test_unresolved_role_corrects_nothing() {
        for view in ALL_VIEWS {
            assert_eq!(corrected_view(None, view), None);
        }
    }

    #[test]
    fn test_denied_view_renders_dashboard_content() {
        assert_eq!(view_to_render(Some(Role::Staff), View::Campaigns), View::Dashboard);
        assert_eq!(view_to_render(None, View::Table), View::Dashboard);
    }

    #[test]
    fn test_permitted_view_renders_itself() {
        assert_eq!(view_to_render(Some(Role::Chief), View::PlanBuilder), View::PlanBuilder);
        assert_eq!(view_to_render(Some(Role::Staff), View::DataEntry), View::DataEntry);
    }
}
