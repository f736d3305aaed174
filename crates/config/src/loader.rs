use std::{
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use tracing::{debug, warn};

use crate::{env_subst::substitute_env, schema::CasitaConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["casita.toml", "casita.yaml", "casita.yml", "casita.json"];

static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);
static DATA_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Override the config directory for this process (`--config-dir`).
pub fn set_config_dir(path: impl Into<PathBuf>) {
    *CONFIG_DIR_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(path.into());
}

/// Override the data directory for this process (`--data-dir`).
pub fn set_data_dir(path: impl Into<PathBuf>) {
    *DATA_DIR_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(path.into());
}

fn override_of(slot: &RwLock<Option<PathBuf>>) -> Option<PathBuf> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// The directory config files are discovered in, after the working dir.
/// Default `~/.config/casita/`.
pub fn config_dir() -> PathBuf {
    override_of(&CONFIG_DIR_OVERRIDE)
        .or_else(|| {
            directories::ProjectDirs::from("", "", "casita")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The directory mutable state (the SQLite session store) lives in.
/// Default `~/.local/share/casita/`.
pub fn data_dir() -> PathBuf {
    override_of(&DATA_DIR_OVERRIDE)
        .or_else(|| {
            directories::ProjectDirs::from("", "", "casita")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<CasitaConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./casita.{toml,yaml,yml,json}` (project-local)
/// 2. the config dir (default `~/.config/casita/`)
///
/// Returns `CasitaConfig::default()` if no config file is found.
pub fn discover_and_load() -> CasitaConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    CasitaConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    // Project-local
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    let dir = config_dir();
    for name in CONFIG_FILENAMES {
        let p = dir.join(name);
        if p.exists() {
            return Some(p);
        }
    }

    None
}

/// Returns the path of an existing config file, or the default TOML path.
pub fn find_or_default_config_path() -> PathBuf {
    find_config_file().unwrap_or_else(|| config_dir().join("casita.toml"))
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<CasitaConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}
