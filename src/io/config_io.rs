use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::ClientConfig;

pub const CONFIG_FILE: &str = "taskdeck.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Find `taskdeck.toml` by walking up from `start`. Returns None when no
/// config exists anywhere up the tree; defaults apply then.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read and parse a config file. A parse error is reported, not defaulted.
pub fn read_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the effective config: explicit path if given, otherwise the
/// discovered file, otherwise built-in defaults. A command-line API URL
/// overrides whatever the file says.
pub fn load_config(
    explicit: Option<&str>,
    api_url: Option<&str>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = match explicit {
        Some(path) => read_config(Path::new(path))?,
        None => {
            let discovered = std::env::current_dir()
                .ok()
                .and_then(|cwd| discover_config(&cwd));
            match discovered {
                Some(path) => read_config(&path)?,
                None => ClientConfig::default(),
            }
        }
    };
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }
    Ok(config)
}
