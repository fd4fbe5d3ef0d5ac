//! Configuration management
//!
//! Credentials and the API endpoint resolve per setting from the command
//! line first, then `ZOTMETA_*` environment variables, then the config file
//! (default `~/.config/zotmeta/config.toml`, overridable with
//! `ZOTMETA_CONFIG`). A missing config file is fine; a malformed one is not.

use crate::error::{Result, ZotmetaError};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "https://api.zotero.org";

/// Whether the library belongs to a user or a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    User,
    Group,
}

impl LibraryType {
    /// URL path segment for this library kind
    pub fn path_prefix(&self) -> &'static str {
        match self {
            LibraryType::User => "users",
            LibraryType::Group => "groups",
        }
    }
}

impl FromStr for LibraryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(LibraryType::User),
            "group" => Ok(LibraryType::Group),
            other => Err(format!("Invalid library type: {}", other)),
        }
    }
}

/// On-disk config file contents; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub key: Option<String>,
    pub library_id: Option<String>,
    pub library_type: Option<LibraryType>,
    pub api_base: Option<String>,
}

impl ConfigFile {
    /// Load from the default location (or `ZOTMETA_CONFIG`).
    /// A missing file yields the empty config.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(ConfigFile::default()),
        }
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            ZotmetaError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ZOTMETA_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("zotmeta").join("config.toml"))
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub key: Option<String>,
    pub library_id: String,
    pub library_type: LibraryType,
    pub api_base: String,
}

impl Settings {
    /// Resolve settings from CLI values, the environment, and the config file
    pub fn resolve(
        key: Option<String>,
        library_id: Option<String>,
        library_type: Option<LibraryType>,
        api_base: Option<String>,
    ) -> Result<Self> {
        let file = ConfigFile::load()?;
        let env_type = match std::env::var("ZOTMETA_LIBRARY_TYPE") {
            Ok(raw) => Some(<LibraryType as FromStr>::from_str(&raw).map_err(ZotmetaError::Config)?),
            Err(_) => None,
        };
        Self::merge(
            key,
            library_id,
            library_type,
            api_base,
            std::env::var("ZOTMETA_KEY").ok(),
            std::env::var("ZOTMETA_LIBRARY_ID").ok(),
            env_type,
            std::env::var("ZOTMETA_API_BASE").ok(),
            file,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn merge(
        cli_key: Option<String>,
        cli_id: Option<String>,
        cli_type: Option<LibraryType>,
        cli_base: Option<String>,
        env_key: Option<String>,
        env_id: Option<String>,
        env_type: Option<LibraryType>,
        env_base: Option<String>,
        file: ConfigFile,
    ) -> Result<Self> {
        let library_id = cli_id
            .or(env_id)
            .or(file.library_id)
            .ok_or_else(|| ZotmetaError::Config("no library id given".to_string()))?;
        let library_type = cli_type
            .or(env_type)
            .or(file.library_type)
            .ok_or_else(|| ZotmetaError::Config("no library type given".to_string()))?;

        Ok(Settings {
            key: cli_key.or(env_key).or(file.key),
            library_id,
            library_type,
            api_base: cli_base
                .or(env_base)
                .or(file.api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}
