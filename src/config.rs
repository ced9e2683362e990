use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::core::resolver::DEFAULT_RESOLVER;

pub const CONFIG_FILE_NAME: &str = ".ldwrc.json";

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_resolver")]
    pub resolver: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub lib_path: Option<PathBuf>,
}

fn default_resolver() -> String {
    DEFAULT_RESOLVER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver: default_resolver(),
            ignores: Vec::new(),
            lib_path: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// resolver command is empty.
    pub fn validate(&self) -> Result<()> {
        if self.resolver.trim().is_empty() {
            anyhow::bail!("'resolver' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

/// Search `start_dir` and its ancestors for a config file.
///
/// The search stops at a directory containing `.git`. A relative
/// `start_dir` is made absolute first so its ancestors are reachable.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = fs::canonicalize(start_dir)
        .or_else(|_| std::path::absolute(start_dir))
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load the nearest config file at or above `start_dir`.
///
/// A relative `libPath` is resolved against the config file's directory.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let mut config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;

            if let Some(base) = path.parent() {
                config.lib_path = config
                    .lib_path
                    .take()
                    .map(|lib| if lib.is_relative() { base.join(lib) } else { lib });
            }

            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
