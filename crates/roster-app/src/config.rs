use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use roster_core::StatWindows;
use serde::Deserialize;

use crate::auth::AdminCredentials;
use crate::employee_store::DEFAULT_STORAGE_KEY;

const APP_DIR: &str = "roster";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration loaded from `<config dir>/roster/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AdminCredentials,
    #[serde(default)]
    pub dashboard: StatWindows,
}

impl RosterConfig {
    /// Load configuration from `explicit` or the per-user default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a known file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            bail!("storage.key must not be empty");
        }
        if let Err(err) = roster_store::validate_key(&self.storage.key) {
            bail!("storage.key must be a plain file name of letters, digits, '-', '_' or '.': {err}");
        }
        if self.dashboard.contract_warning_days == 0 {
            bail!("dashboard.contract_warning_days must be positive");
        }
        if self.dashboard.new_hire_days == 0 {
            bail!("dashboard.new_hire_days must be positive");
        }
        Ok(())
    }
}

/// `[storage]` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the storage files; defaults to the per-user data dir.
    pub dir: Option<PathBuf>,
    /// Storage key holding the employee collection.
    pub key: String,
    /// Install demo employees when nothing is stored yet.
    pub seed_demo: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: DEFAULT_STORAGE_KEY.to_owned(),
            seed_demo: true,
        }
    }
}

impl StorageConfig {
    /// Resolve the storage directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|base| base.join(APP_DIR))
            .ok_or_else(|| anyhow!("failed to resolve a data directory; set storage.dir"))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR).join(CONFIG_FILE))
}
