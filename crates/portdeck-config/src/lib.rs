//! TOML configuration for the portdeck console: operator defaults, the
//! session role flag, and the site VLAN catalogue.
//!
//! Core never sees these types — it receives a pre-built [`VlanRegistry`]
//! and an [`AccessPolicy`](portdeck_core::AccessPolicy). Loading merges the
//! config file with `PORTDECK_*` environment variables via figment.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use portdeck_core::{VlanDefinition, VlanRegistry};

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot determine a config directory for this platform")]
    NoConfigDir,

    #[error("Failed to load config: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Failed to write config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config structs ──────────────────────────────────────────────────

/// Operator configuration. Everything has a workable default so a missing
/// config file is never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vendor profile used when `generate` is called without `--vendor`.
    pub default_vendor: Option<String>,

    /// Open every session read-only (policy gate, not authentication).
    #[serde(default)]
    pub read_only: bool,

    /// Where the inventory draft lives. Defaults next to the config file.
    pub inventory_path: Option<PathBuf>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Site VLAN catalogue. Empty means "use the built-in catalogue".
    #[serde(default)]
    pub vlans: Vec<VlanEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_vendor: None,
            read_only: false,
            inventory_path: None,
            defaults: Defaults::default(),
            vlans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// One `[[vlans]]` entry in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlanEntry {
    pub id: u16,
    pub name: String,
    #[serde(default = "default_vlan_color")]
    pub color: String,
}

fn default_vlan_color() -> String {
    "#6b7280".into()
}

// ── Paths ───────────────────────────────────────────────────────────

/// Platform config file path (`~/.config/portdeck/config.toml` on Linux).
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("dev", "portdeck", "portdeck").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Default draft inventory path, next to the config file.
pub fn default_inventory_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("dev", "portdeck", "portdeck").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.data_dir().join("inventory.json"))
}

// ── Load / save ─────────────────────────────────────────────────────

/// Load config from an explicit path, merged with `PORTDECK_*` env vars.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PORTDECK_").split("__"))
        .extract()
        .map_err(Box::new)?;
    Ok(config)
}

/// Load from the platform path; a missing file yields the defaults.
pub fn load_config_or_default() -> Config {
    config_path()
        .and_then(|path| load_from(&path))
        .unwrap_or_default()
}

/// Persist config to the platform path, creating parent directories.
pub fn save_config(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
    }
    let body = toml::to_string_pretty(config)?;
    std::fs::write(&path, body).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

// ── Catalogue resolution ────────────────────────────────────────────

/// Build the process-wide VLAN registry: configured entries when present,
/// otherwise the compiled-in catalogue.
pub fn vlan_catalogue(config: &Config) -> VlanRegistry {
    if config.vlans.is_empty() {
        return VlanRegistry::builtin();
    }
    VlanRegistry::new(
        config
            .vlans
            .iter()
            .map(|v| VlanDefinition::new(v.id, v.name.clone(), v.color.clone())),
    )
}
