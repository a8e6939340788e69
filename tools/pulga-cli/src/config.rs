//! CLI configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use pulga_client::ClientConfig;
use serde::{Deserialize, Serialize};

pub const API_URL_VAR: &str = "PULGA_API_URL";
pub const DETAIL_URL_VAR: &str = "PULGA_DETAIL_URL";

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["pulga.toml", ".pulga.toml", "pulga.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// API endpoints and paging.
    #[serde(default)]
    pub api: ClientConfig,

    /// Token persistence.
    #[serde(default)]
    pub session: SessionConfig,

    /// Environment-specific overrides.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environments: HashMap<String, EnvironmentConfig>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Config with the named environment's overrides merged in.
    pub fn for_environment(&self, env: &str) -> Result<CliConfig> {
        let Some(overrides) = self.environments.get(env) else {
            let mut known: Vec<_> = self.environments.keys().cloned().collect();
            known.sort();
            bail!(
                "Unknown environment '{}' (known: {})",
                env,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            );
        };

        let mut config = self.clone();
        if let Some(url) = &overrides.api_url {
            config.api.api_url = url.clone();
        }
        if let Some(url) = &overrides.detail_url {
            config.api.detail_url = url.clone();
        }
        if let Some(path) = &overrides.store_path {
            config.session.store_path = Some(path.clone());
        }
        Ok(config)
    }

    /// Apply `PULGA_API_URL` / `PULGA_DETAIL_URL` from `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            self.api.api_url = url;
        }
        if let Some(url) = lookup(DETAIL_URL_VAR).filter(|v| !v.trim().is_empty()) {
            self.api.detail_url = url;
        }
    }

    /// Where the session file lives.
    pub fn store_path(&self) -> PathBuf {
        self.session
            .store_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_store_path)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Token persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file (default: `$HOME/.local/share/pulga/session.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,
}

/// Environment-specific configuration overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,
}

/// `$HOME/.local/share/pulga/session.json`.
pub fn default_store_path() -> PathBuf {
    let base = match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".local").join("share"),
        None => std::env::temp_dir(),
    };
    base.join("pulga").join("session.json")
}

/// Generate a default pulga.toml config file.
pub fn generate_default_config() -> String {
    r#"# Pulga storefront client configuration

[api]
api_url = "http://localhost:5610"
detail_url = "http://localhost:4040"
page_size = 20
random_sample_size = 20
popular_limit = 6

[session]
# store_path = "/home/me/.local/share/pulga/session.json"

[environments.staging]
api_url = "https://staging-api.pulga.example"
detail_url = "https://staging.pulga.example"

[environments.production]
api_url = "https://api.pulga.example"
detail_url = "https://pulga.example"
"#
    .to_string()
}
