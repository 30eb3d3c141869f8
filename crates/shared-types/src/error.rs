use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure talking to the authentication service.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthCallError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The service answered 2xx but the body was not the expected JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Errors surfaced by the portal client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortalError {
    /// The session carries a `userType` the router has no subtree for.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),
    /// No route matches the requested path.
    #[error("no route matches {0}")]
    RouteNotFound(String),
    #[error("logout failed: {0}")]
    Logout(AuthCallError),
    #[error("login failed: {0}")]
    Login(AuthCallError),
}

impl PortalError {
    /// Text suitable for showing to the user.
    pub fn friendly_message(&self) -> String {
        match self {
            PortalError::UnknownRole(_) => {
                "Your account type is not supported by this portal.".to_string()
            }
            PortalError::RouteNotFound(path) => format!("The page {path} could not be found."),
            PortalError::Logout(AuthCallError::Network(_)) => {
                "Could not reach the server to sign you out. Please try again.".to_string()
            }
            PortalError::Login(AuthCallError::Network(_)) => {
                "Could not reach the server. Please try again.".to_string()
            }
            PortalError::Logout(AuthCallError::Rejected { message, .. })
            | PortalError::Login(AuthCallError::Rejected { message, .. })
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            PortalError::Logout(_) => "Sign out failed. Please try again.".to_string(),
            PortalError::Login(_) => "Sign in failed. Please try again.".to_string(),
        }
    }
}
