//! CLI configuration.
//!
//! The config file is YAML and currently carries only the default spec
//! location. It is looked up from the `--config` flag, then the
//! `SPECGRAPH_CONFIG` environment variable, then
//! `$HOME/.specgraph/config.yml`.
//!
//! The spec path itself is resolved from the positional argument, then
//! `SPECGRAPH_SPECS_PATH`, then `specs_path` in the config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SPECGRAPH_CONFIG";

/// Environment variable naming the spec path.
pub const SPECS_PATH_ENV: &str = "SPECGRAPH_SPECS_PATH";

/// Contents of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Where the specs live when no path is given on the command line.
    pub specs_path: Option<PathBuf>,
}

/// Where a config file was found and whether the operator asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Set for `--config` and `SPECGRAPH_CONFIG`. A missing explicit file is
    /// an error; a missing default file is an empty config.
    pub explicit: bool,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

impl CliConfig {
    /// Load the config file selected by `flag`, the environment, or the
    /// default location.
    pub fn load(flag: Option<&Path>) -> Result<Self, ConfigError> {
        let location = locate(flag, env_path(CONFIG_ENV), home_dir());
        match location {
            Some(location) => Self::load_from(&location),
            None => Ok(Self::default()),
        }
    }

    /// Load from a located file, honouring whether it was explicit.
    pub fn load_from(location: &ConfigLocation) -> Result<Self, ConfigError> {
        if !location.path.exists() {
            if location.explicit {
                return Err(ConfigError::NotFound(location.path.clone()));
            }
            tracing::debug!(path = %location.path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&location.path)
    }

    /// Parse a YAML config file. An empty file is the default config.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// The spec path to validate, given the optional positional argument.
    pub fn specs_path(&self, arg: Option<&Path>) -> Option<PathBuf> {
        resolve_specs_path(arg, env_path(SPECS_PATH_ENV), self)
    }
}

/// Pick the config file: the flag, then the env value, then under `home`.
pub fn locate(
    flag: Option<&Path>,
    env: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<ConfigLocation> {
    if let Some(path) = flag {
        return Some(ConfigLocation {
            path: path.to_path_buf(),
            explicit: true,
        });
    }
    if let Some(path) = env {
        return Some(ConfigLocation {
            path,
            explicit: true,
        });
    }
    home.map(|home| ConfigLocation {
        path: home.join(".specgraph").join("config.yml"),
        explicit: false,
    })
}

/// Pick the spec path: the argument, then the env value, then the config.
pub fn resolve_specs_path(
    arg: Option<&Path>,
    env: Option<PathBuf>,
    config: &CliConfig,
) -> Option<PathBuf> {
    arg.map(Path::to_path_buf)
        .or(env)
        .or_else(|| config.specs_path.clone())
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn home_dir() -> Option<PathBuf> {
    env_path("HOME")
}
