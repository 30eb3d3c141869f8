use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// `portal.toml` is compiled in; the browser build has no filesystem to read it from.
const BUNDLED_CONFIG: &str = include_str!("../portal.toml");

/// Build-time override for `api.base_url`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("PORTAL_API_BASE");

/// Parse a config document, falling back to defaults if it is malformed.
pub fn parse_config(contents: &str, api_base_override: Option<&str>) -> PortalConfig {
    let mut config: PortalConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse portal.toml, using defaults");
        PortalConfig::default()
    });

    if let Some(base) = api_base_override.filter(|b| !b.trim().is_empty()) {
        config.api.base_url = base.trim().to_string();
    }

    config
}

/// Process-wide configuration. Parsed once on first use.
pub fn portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(BUNDLED_CONFIG, API_BASE_OVERRIDE);
        tracing::info!(api = %config.api.base_url, "portal configuration loaded");
        config
    })
}
