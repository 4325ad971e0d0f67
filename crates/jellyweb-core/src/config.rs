use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::actions::DEFAULT_DETACH_CONFIRM_TEMPLATE;
use crate::query::LookupMode;
use crate::signin::{SignInSettings, DEFAULT_CSRF_HEADER};

/// HTTP timeouts (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Whole-request timeout.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/jellyweb/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JellyWebConfig {
    /// Site root that endpoint paths are resolved against.
    pub base_url: String,
    /// Redirect target after sign-in when the page has no `next`.
    pub default_redirect: String,
    /// "substring" (default, matches existing pages) or "structural".
    #[serde(default)]
    pub lookup_mode: LookupMode,
    /// Header carrying the anti-forgery token.
    pub csrf_header: String,
    pub star_path: String,
    pub detach_path: String,
    /// Detach prompt; `{name}` is replaced with the profile name.
    #[serde(default = "default_detach_confirm_template")]
    pub detach_confirm_template: String,
    /// Optional timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

fn default_detach_confirm_template() -> String {
    DEFAULT_DETACH_CONFIRM_TEMPLATE.to_string()
}

impl Default for JellyWebConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".to_string(),
            default_redirect: "/".to_string(),
            lookup_mode: LookupMode::default(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            star_path: "api/ar/channel/star".to_string(),
            detach_path: "api/ar/profile/detach".to_string(),
            detach_confirm_template: default_detach_confirm_template(),
            http: None,
        }
    }
}

impl JellyWebConfig {
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }

    pub fn sign_in_settings(&self) -> SignInSettings {
        SignInSettings {
            csrf_header: self.csrf_header.clone(),
            lookup_mode: self.lookup_mode,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jellyweb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JellyWebConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = JellyWebConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<JellyWebConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: JellyWebConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
