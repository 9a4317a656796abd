//! Admin client configuration
//!
//! Settings are read from `admin.toml`, either a path given on the command
//! line or `<config dir>/winrepo/admin.toml`:
//!
//! ```toml
//! [server]
//! url = "https://pulp.example.com/pulp/api"
//! verify_ssl = true
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_DIR: &str = "winrepo";
const CONFIG_FILE: &str = "admin.toml";

/// Connection settings for the repository server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the REST API, up to and including the API prefix
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "https://localhost/pulp/api".to_string()
}

fn default_verify_ssl() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            verify_ssl: default_verify_ssl(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Top-level admin configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

impl AdminConfig {
    /// Parse configuration text; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded admin configuration");
        Self::parse(&content, path)
    }

    /// Load from `explicit` when given, otherwise from the default location
    /// if a file exists there, otherwise fall back to defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/winrepo/admin.toml` for the current user
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
