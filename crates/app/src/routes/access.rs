//! Who may enter which route, and what happens when they may not.

use shared_types::routing::{self, LOGIN_PATH};
use shared_types::{Session, UserRole};

use super::Route;

/// Access rule attached to every route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Rendered for everyone, signed in or not.
    Public,
    /// Requires a session; the route itself only redirects into the role subtree.
    Authenticated,
    /// Requires a session with exactly this role.
    Role(UserRole),
    /// Catch-all for paths that match nothing.
    Unmatched,
}

/// Outcome of a navigation decision.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Render,
    /// Show the login view in place of the requested route.
    Login,
    Redirect(Route),
    NotFound,
}

impl Route {
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Login {} | Route::Logout {} => RouteAccess::Public,
            Route::Dashboard {} | Route::Profile {} => RouteAccess::Authenticated,
            Route::StudentDashboard {}
            | Route::StudentTimetable {}
            | Route::StudentAssignments {}
            | Route::StudentAssignment { .. }
            | Route::StudentProfile {} => RouteAccess::Role(UserRole::Student),
            Route::TeacherDashboard {} | Route::TeacherAssignments {} | Route::TeacherProfile {} => {
                RouteAccess::Role(UserRole::Teacher)
            }
            Route::AdminDashboard {} | Route::AdminProfile {} => RouteAccess::Role(UserRole::Admin),
            Route::ParentDashboard {} | Route::ParentProfile {} => {
                RouteAccess::Role(UserRole::Parent)
            }
            Route::NotFound { .. } => RouteAccess::Unmatched,
        }
    }

    pub fn dashboard_for(role: UserRole) -> Route {
        match role {
            UserRole::Admin => Route::AdminDashboard {},
            UserRole::Teacher => Route::TeacherDashboard {},
            UserRole::Student => Route::StudentDashboard {},
            UserRole::Parent => Route::ParentDashboard {},
        }
    }

    pub fn profile_for(role: UserRole) -> Route {
        match role {
            UserRole::Admin => Route::AdminProfile {},
            UserRole::Teacher => Route::TeacherProfile {},
            UserRole::Student => Route::StudentProfile {},
            UserRole::Parent => Route::ParentProfile {},
        }
    }

    /// Parse a path produced by the resolver. Unknown paths land on `NotFound`.
    pub fn from_path(path: &str) -> Route {
        path.parse::<Route>().unwrap_or_else(|_| Route::NotFound {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    /// Title shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} | Route::Logout {} => "Sign In",
            Route::Dashboard {}
            | Route::StudentDashboard {}
            | Route::TeacherDashboard {}
            | Route::AdminDashboard {}
            | Route::ParentDashboard {} => "Dashboard",
            Route::StudentTimetable {} => "Timetable",
            Route::StudentAssignments {} | Route::TeacherAssignments {} => "Assignments",
            Route::StudentAssignment { .. } => "Assignment",
            Route::Profile {}
            | Route::StudentProfile {}
            | Route::TeacherProfile {}
            | Route::AdminProfile {}
            | Route::ParentProfile {} => "Profile",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

/// Decide what to do with a navigation to `route` under `session`.
///
/// Never mutates the session. A `Redirect` target always evaluates to
/// `Render` for the same session.
pub fn navigate(route: &Route, session: &Session) -> Navigation {
    match route.access() {
        RouteAccess::Public => Navigation::Render,
        RouteAccess::Unmatched => Navigation::NotFound,
        RouteAccess::Authenticated => {
            if !session.logged_in {
                return Navigation::Login;
            }
            let resolved = match route {
                Route::Profile {} => routing::profile_path(session),
                _ => routing::dashboard_path(session),
            };
            let path = resolved.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "cannot resolve role route, falling back to login");
                LOGIN_PATH.to_string()
            });
            Navigation::Redirect(Route::from_path(&path))
        }
        RouteAccess::Role(required) => {
            if !session.logged_in {
                return Navigation::Login;
            }
            match session.role() {
                Ok(role) if role == required => Navigation::Render,
                Ok(role) => {
                    tracing::debug!(%role, %required, "role mismatch, redirecting to own dashboard");
                    Navigation::Redirect(Route::dashboard_for(role))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "unknown role on role-scoped route");
                    Navigation::Login
                }
            }
        }
    }
}
