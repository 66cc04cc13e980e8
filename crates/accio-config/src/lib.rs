//! Configuration for the accio terminal browser.
//!
//! Layered loading (built-in defaults, TOML file, `ACCIO_` environment
//! variables), validation, and translation to `accio_core::ClientConfig`.
//! Command-line overrides are applied by the binary on top of the result.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;
use thiserror::Error;
use url::Url;

use accio_core::{ClientConfig, Tab};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub view: ViewSection,
}

/// `[api]`: where data comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSection {
    /// API root, e.g. "https://hp-api.onrender.com/api".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// `[view]`: paging, search and startup behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewSection {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_debounce")]
    pub search_debounce_ms: u64,

    /// One of "characters", "students", "staff", "houses", "spells".
    #[serde(default = "default_start_tab")]
    pub start_tab: String,
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_debounce(),
            start_tab: default_start_tab(),
        }
    }
}

fn default_base_url() -> String {
    accio_core::DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_page_size() -> usize {
    accio_core::paginate::DEFAULT_PAGE_SIZE
}
fn default_debounce() -> u64 {
    200
}
fn default_start_tab() -> String {
    Tab::default().as_str().into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "accio", "accio").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("accio");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ACCIO_").split("__"))
}

/// Load from the platform config file (if present) and environment.
pub fn load_config() -> Result<Config, ConfigError> {
    Ok(figment(&config_path()).extract()?)
}

/// Load from an explicit file, which must exist, plus environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    std::fs::metadata(path)?;
    Ok(figment(path).extract()?)
}

// ── Validation / translation ────────────────────────────────────────

/// Parse a tab name, listing the valid names on failure.
pub fn parse_tab(name: &str) -> Result<Tab, ConfigError> {
    Tab::from_str(name.trim()).map_err(|_| ConfigError::Validation {
        field: "start_tab".into(),
        reason: format!("unknown tab '{name}', expected one of: {}", Tab::VARIANTS.join(", ")),
    })
}

/// Parse and sanity-check an API base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url: Url = raw.trim().parse().map_err(|e| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(url)
}

impl Config {
    /// Validate and build the runtime configuration.
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigError> {
        let base_url = parse_base_url(&self.api.base_url)?;

        if self.view.page_size == 0 {
            return Err(ConfigError::Validation {
                field: "page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }

        let mut config = ClientConfig::new(base_url);
        config.timeout = Duration::from_secs(self.api.timeout_secs);
        config.page_size = self.view.page_size;
        config.search_debounce = Duration::from_millis(self.view.search_debounce_ms);
        config.start_tab = parse_tab(&self.view.start_tab)?;
        Ok(config)
    }

    /// Render as TOML, e.g. to show the effective configuration.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
