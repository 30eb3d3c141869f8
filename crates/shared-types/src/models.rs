use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PortalError;

/// Role of a portal user. Determines which dashboard subtree a session may enter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Parent,
}

/// Every known role, in sidebar/display order.
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::Admin,
    UserRole::Teacher,
    UserRole::Student,
    UserRole::Parent,
];

impl UserRole {
    /// Parse a role string as sent by the auth service (`"Student"`, `"teacher"`, ...).
    pub fn parse(s: &str) -> Result<Self, PortalError> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            "parent" => Ok(UserRole::Parent),
            _ => Err(PortalError::UnknownRole(s.to_string())),
        }
    }

    /// Lowercase path segment for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
            UserRole::Parent => "parent",
        }
    }

    /// Heading shown at the top of the role's dashboard shell.
    pub fn dashboard_label(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN DASHBOARD",
            UserRole::Teacher => "TEACHER DASHBOARD",
            UserRole::Student => "STUDENT DASHBOARD",
            UserRole::Parent => "PARENT DASHBOARD",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Teacher => "Teacher",
            UserRole::Student => "Student",
            UserRole::Parent => "Parent",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::parse(s)
    }
}

/// The in-memory record of who is signed in.
///
/// Field names follow the auth service's `user_info` payload. An anonymous
/// visitor is represented by `logged_in == false`; such a session never
/// enters a role-scoped route regardless of `user_type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

impl Session {
    /// The session every client starts with and returns to after logout.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_name: user_name.into(),
            user_type: role.as_str().to_string(),
            logged_in: true,
            dob: None,
        }
    }

    pub fn with_dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = Some(dob.into());
        self
    }

    /// Parsed role, or `UnknownRole` when `user_type` is not one we route.
    pub fn role(&self) -> Result<UserRole, PortalError> {
        UserRole::parse(&self.user_type)
    }

    /// Role of a signed-in session; `None` when anonymous or the role is unknown.
    pub fn active_role(&self) -> Option<UserRole> {
        if self.logged_in {
            self.role().ok()
        } else {
            None
        }
    }

    /// Date of birth when the auth service sent a non-empty one.
    pub fn dob(&self) -> Option<&str> {
        self.dob.as_deref().filter(|d| !d.trim().is_empty())
    }
}
