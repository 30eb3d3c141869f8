use shared_types::UserRole;

use super::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Timetable,
    Assignments,
    Profile,
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavLink {
    fn new(route: Route, label: &'static str, icon: NavIcon) -> Self {
        Self { route, label, icon }
    }

    /// Whether this entry should be highlighted while `current` is shown.
    pub fn is_active(&self, current: &Route) -> bool {
        if &self.route == current {
            return true;
        }
        // A single assignment belongs under the assignment list.
        self.route == Route::StudentAssignments {}
            && matches!(current, Route::StudentAssignment { .. })
    }
}

/// Sidebar entries for `role`, in display order.
pub fn nav_links(role: UserRole) -> Vec<NavLink> {
    let mut links = vec![NavLink::new(
        Route::dashboard_for(role),
        "Dashboard",
        NavIcon::Dashboard,
    )];

    match role {
        UserRole::Student => {
            links.push(NavLink::new(Route::StudentTimetable {}, "Timetable", NavIcon::Timetable));
            links.push(NavLink::new(
                Route::StudentAssignments {},
                "Assignments",
                NavIcon::Assignments,
            ));
        }
        UserRole::Teacher => {
            links.push(NavLink::new(
                Route::TeacherAssignments {},
                "Assignments",
                NavIcon::Assignments,
            ));
        }
        UserRole::Admin | UserRole::Parent => {}
    }

    links.push(NavLink::new(Route::profile_for(role), "Profile", NavIcon::Profile));
    links
}
