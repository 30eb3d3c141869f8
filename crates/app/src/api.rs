//! HTTP client for the authentication service.

use dioxus::prelude::*;
use reqwest::{Client, RequestBuilder};
use shared_types::{decode_auth_response, ApiConfig, AuthCallError, AuthResponse, LoginRequest};

use crate::config::portal_config;

/// Thin wrapper over the three auth endpoints the client uses.
///
/// Clones share one connection pool and, on native targets, one cookie jar,
/// so the session cookie from sign-in is sent on sign-out.
#[derive(Clone, Debug)]
pub struct AuthClient {
    http: Client,
    api: ApiConfig,
}

impl AuthClient {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            http: build_http_client(),
            api,
        }
    }

    /// Client pointed at the configured auth service.
    pub fn from_config() -> Self {
        Self::new(portal_config().api.clone())
    }

    pub fn url(&self, endpoint: &str) -> String {
        self.api.endpoint(endpoint)
    }

    /// `GET /login`: reports the session the service already holds for us, if any.
    pub async fn current_session(&self) -> Result<AuthResponse, AuthCallError> {
        tracing::debug!("fetching current session");
        self.send(self.http.get(self.url("login"))).await
    }

    /// `POST /login` with credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthCallError> {
        tracing::info!(email = %request.email, "signing in");
        self.send(self.http.post(self.url("login")).json(request)).await
    }

    /// `GET /logout`. No request body.
    pub async fn logout(&self) -> Result<AuthResponse, AuthCallError> {
        tracing::info!("signing out");
        self.send(self.http.get(self.url("logout"))).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<AuthResponse, AuthCallError> {
        // The session lives in a cookie; the browser only attaches it when asked.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request
            .send()
            .await
            .map_err(|e| AuthCallError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthCallError::Network(e.to_string()))?;

        let decoded = decode_auth_response(status, &body);
        if let Err(e) = &decoded {
            tracing::warn!(status, error = %e, "auth service call failed");
        }
        decoded
    }
}

/// Hook to access the client provided at the root.
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder().cookie_store(true).build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "cookie-enabled HTTP client unavailable, using default");
        Client::new()
    })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}
