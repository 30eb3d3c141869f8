//! Role-to-route resolution.
//!
//! Pure functions over a [`Session`]; the router decides what to do with
//! the result.

use crate::error::PortalError;
use crate::models::{Session, UserRole};

/// Where anonymous visitors land. The login view is served at the root.
pub const LOGIN_PATH: &str = "/";

/// Generic dashboard entry point that redirects to the role dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Explicit logout path; renders the login view.
pub const LOGOUT_PATH: &str = "/auth/logout";

pub fn role_dashboard_path(role: UserRole) -> String {
    format!("/{}/dashboard", role.as_str())
}

pub fn role_profile_path(role: UserRole) -> String {
    format!("/{}/profile", role.as_str())
}

/// Canonical dashboard for `session`.
///
/// Returns `"/" + role + "/dashboard"` for a signed-in session and
/// [`LOGIN_PATH`] otherwise. A signed-in session with an unrecognized role
/// is an [`PortalError::UnknownRole`] error.
pub fn dashboard_path(session: &Session) -> Result<String, PortalError> {
    if !session.logged_in {
        return Ok(LOGIN_PATH.to_string());
    }
    session.role().map(role_dashboard_path)
}

/// Canonical profile page for `session`, with the same rules as [`dashboard_path`].
pub fn profile_path(session: &Session) -> Result<String, PortalError> {
    if !session.logged_in {
        return Ok(LOGIN_PATH.to_string());
    }
    session.role().map(role_profile_path)
}

/// [`dashboard_path`] with unknown roles recovered to [`LOGIN_PATH`].
pub fn resolve_dashboard(session: &Session) -> String {
    dashboard_path(session).unwrap_or_else(|_| LOGIN_PATH.to_string())
}
