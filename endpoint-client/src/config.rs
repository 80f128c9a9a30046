use std::path::Path;
use serde::Deserialize;
use anyhow::{Context, Result};
use shared::protocol::{ADMIN_UI_URL_ENV, UI_CLIENTS_ROUTE, UI_FLOWS_SEGMENT};

/// Process-wide settings, loaded once at startup and only read afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Base URL of the admin UI, e.g. "https://admin.example.com"
    #[serde(default)]
    pub admin_ui_url: Option<String>,
}

impl ProcessConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ProcessConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Build configuration from the environment alone
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ADMIN_UI_URL_ENV) {
            tracing::debug!("Admin UI URL overridden by {}", ADMIN_UI_URL_ENV);
            self.ui.admin_ui_url = Some(url);
        }
        self
    }

    /// Admin UI base URL without trailing slashes; None when unset or blank
    pub fn admin_ui_url(&self) -> Option<&str> {
        self.ui
            .admin_ui_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// Deep link to a flow in the admin UI, if a base URL is configured
    pub fn flow_url(&self, client_id: &str, flow_id: &str) -> Option<String> {
        self.admin_ui_url().map(|base| {
            format!("{base}/{UI_CLIENTS_ROUTE}/{client_id}/{UI_FLOWS_SEGMENT}/{flow_id}")
        })
    }
}
