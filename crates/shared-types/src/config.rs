use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_AUTH_PREFIX: &str = "/api/auth";
const DEFAULT_BRAND: &str = "Gradder";

/// Location of the authentication service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_auth_prefix")]
    pub auth_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_prefix: default_auth_prefix(),
        }
    }
}

impl ApiConfig {
    /// Absolute URL of an auth endpoint, e.g. `endpoint("logout")`.
    pub fn endpoint(&self, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.auth_prefix.trim_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
        }
    }
}

/// Top-level structure of `portal.toml`. Every section is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_auth_prefix() -> String {
    DEFAULT_AUTH_PREFIX.to_string()
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}
