//! Resolver configuration
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! database_url = "https://example.org/modlists/DatabaseInfo.json"
//! installer_dir = "/opt/modinstaller"
//! ```

use crate::modlist::constants::{CONFIG_DIR, CONFIG_FILE, FULL_URL_MARKER};
use crate::modlist::error::{ModListError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for the mod-list service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModListConfig {
    /// URL of the database document listing every mod list
    pub database_url: String,
    /// Base directory for local mod-list paths
    #[serde(default = "default_installer_dir")]
    pub installer_dir: PathBuf,
    /// User-Agent override for HTTP requests
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Local paths resolve against the working directory unless configured
fn default_installer_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ModListConfig {
    /// Create a configuration with default installer directory and User-Agent
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            installer_dir: default_installer_dir(),
            user_agent: None,
        }
    }

    pub fn with_installer_dir(mut self, installer_dir: impl Into<PathBuf>) -> Self {
        self.installer_dir = installer_dir.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Default config file location (`<config dir>/modlist-resolver/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load and validate a configuration file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ModListError::Config {
            detail: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content).map_err(|e| ModListError::Config {
            detail: format!("{}: {e}", path.display()),
        })
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ModListError::Config {
            detail: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The database document must be addressed by a full URL
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.contains(FULL_URL_MARKER) {
            return Err(ModListError::Config {
                detail: format!(
                    "database_url '{}' is not a full https URL",
                    self.database_url
                ),
            });
        }
        Ok(())
    }
}
