use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AuthCallError, PortalError};
use crate::models::Session;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Response envelope used by every auth endpoint.
///
/// `flashes` and `errors` arrive either as a single string or a list of
/// strings; both are normalized to a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "one_or_many")]
    pub flashes: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Session>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Nothing,
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Nothing => Vec::new(),
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

/// Interpret a raw auth-service reply.
///
/// 2xx bodies must parse as [`AuthResponse`]. Other statuses become
/// [`AuthCallError::Rejected`], carrying the service's own message when the
/// body has one.
pub fn decode_auth_response(status: u16, body: &str) -> Result<AuthResponse, AuthCallError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| AuthCallError::Malformed(e.to_string()));
    }

    let message = serde_json::from_str::<AuthResponse>(body)
        .ok()
        .and_then(|r| r.errors.into_iter().chain(r.flashes).next())
        .unwrap_or_default();

    Err(AuthCallError::Rejected { status, message })
}

/// Apply the outcome of a logout call to `session`.
///
/// Only a confirmed success resets the session; any failure leaves it
/// untouched and is reported as [`PortalError::Logout`].
pub fn apply_logout(
    session: &mut Session,
    outcome: Result<AuthResponse, AuthCallError>,
) -> Result<Vec<String>, PortalError> {
    let response = outcome.map_err(PortalError::Logout)?;
    *session = Session::anonymous();
    Ok(response.flashes)
}

/// Apply the outcome of a login call to `session`.
///
/// A reply without a signed-in `user_info` is treated as a rejection.
pub fn apply_login(
    session: &mut Session,
    outcome: Result<AuthResponse, AuthCallError>,
) -> Result<Vec<String>, PortalError> {
    let response = outcome.map_err(PortalError::Login)?;
    match response.user_info {
        Some(user) if user.logged_in => {
            *session = user;
            Ok(response.flashes)
        }
        _ => Err(PortalError::Login(AuthCallError::Rejected {
            status: 200,
            message: response
                .errors
                .into_iter()
                .chain(response.flashes)
                .next()
                .unwrap_or_default(),
        })),
    }
}
