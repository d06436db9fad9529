//! Draft persistence — the console's side of the bargain.
//!
//! The core treats inventory persistence as an external concern, so the
//! console owns it: one JSON file holding the whole `Inventory`, loaded
//! before a command runs and written back after a successful mutation.

use std::path::{Path, PathBuf};

use tracing::debug;

use portdeck_core::{AccessPolicy, Inventory};

use crate::error::CliError;

/// Load the draft, or start empty when the file does not exist yet.
/// The session policy is re-armed after load; it never round-trips.
pub fn load(path: &Path, policy: AccessPolicy) -> Result<Inventory, CliError> {
    if !path.exists() {
        debug!(path = %path.display(), "no draft yet, starting empty");
        return Ok(Inventory::new(policy));
    }

    let body = std::fs::read_to_string(path).map_err(|source| CliError::DraftRead {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;
    let mut inventory: Inventory =
        serde_json::from_str(&body).map_err(|source| CliError::DraftRead {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
    inventory.set_policy(policy);
    debug!(path = %path.display(), switches = inventory.len(), "loaded draft");
    Ok(inventory)
}

/// Write the draft back, creating parent directories on first save.
pub fn save(path: &Path, inventory: &Inventory) -> Result<(), CliError> {
    let write_err = |source: Box<dyn std::error::Error + Send + Sync>| CliError::DraftWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_err(Box::new(e)))?;
    }
    let body = serde_json::to_string_pretty(inventory).map_err(|e| write_err(Box::new(e)))?;
    std::fs::write(path, body).map_err(|e| write_err(Box::new(e)))?;
    debug!(path = %path.display(), "saved draft");
    Ok(())
}

/// Resolve the draft path: flag > config > platform default.
pub fn resolve_path(
    flag: Option<&PathBuf>,
    config: &portdeck_config::Config,
) -> Result<PathBuf, CliError> {
    if let Some(path) = flag {
        return Ok(path.clone());
    }
    if let Some(path) = &config.inventory_path {
        return Ok(path.clone());
    }
    Ok(portdeck_config::default_inventory_path()?)
}
