//! popsicle configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::importer::DEFAULT_ROSTER_PATTERN;

/// Environment variable that overrides `db_path`.
pub const DB_ENV_VAR: &str = "POPSICLE_DB";

/// Top-level popsicle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopsicleConfig {
    /// Where the roster document lives.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// File-name regex used to find a roster export when `load` is run
    /// without a path.
    #[serde(default = "default_roster_pattern")]
    pub roster_pattern: String,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("db.json")
}

fn default_roster_pattern() -> String {
    DEFAULT_ROSTER_PATTERN.to_string()
}

impl Default for PopsicleConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            roster_pattern: default_roster_pattern(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `popsicle.toml` in the current directory
/// 2. `~/.config/popsicle/config.toml`
///
/// `POPSICLE_DB` overrides the database path.
pub fn load_config_from(path: Option<&Path>) -> Result<PopsicleConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            return Err(RosterError::io(
                p,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            ))
        }
        None => {
            let local = PathBuf::from("popsicle.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("reading config from {}", path.display());
            let content =
                std::fs::read_to_string(&path).map_err(|e| RosterError::io(&path, e))?;
            parse_config(&content, &path)?
        }
        None => PopsicleConfig::default(),
    };

    if let Ok(db) = std::env::var(DB_ENV_VAR) {
        if !db.trim().is_empty() {
            config.db_path = PathBuf::from(db);
        }
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PopsicleConfig> {
    toml::from_str(content).map_err(|source| RosterError::Config {
        path: source_path.to_path_buf(),
        source,
    })
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("popsicle"))
}
