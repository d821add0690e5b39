//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--dir`, `--no-color`; handled at the call-site)
//! 2. Environment variables prefixed `ASSETOPT_`, `__` between sections
//!    (`ASSETOPT_OPTIMIZER__DIST_DIR`, `ASSETOPT_OPTIMIZER__EXTENSIONS=js,css`)
//! 3. The TOML file passed with `--config`
//! 4. Built-in defaults (always present)
//!
//! With no file and no `ASSETOPT_` variables the defaults reproduce the
//! zero-configuration behaviour exactly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use assetopt_core::domain::{AssetFilter, DomainError};

use crate::error::{CliError, CliResult};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "ASSETOPT";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// What gets optimized.
    pub optimizer: OptimizerConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Build output directory; relative paths resolve against the CWD.
    pub dist_dir: Option<PathBuf>,
    /// Matched-file extensions, with or without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            dist_dir: None,
            extensions: vec!["js".into(), "css".into()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the optional file and the process environment.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::load_from(config_file, None)
    }

    /// Like [`Self::load`], reading variables from `env` instead of the
    /// process environment when given.
    fn load_from(
        config_file: Option<&PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> CliResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("optimizer.extensions")
                .try_parsing(true)
                .source(env),
        );

        let settings = builder.build().map_err(|e| CliError::ConfigError {
            message: match config_file {
                Some(path) => format!("Failed to load '{}'", path.display()),
                None => "Failed to read configuration".into(),
            },
            source: Some(Box::new(e)),
        })?;

        settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("Invalid configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Build the asset filter from the configured extensions.
    pub fn asset_filter(&self) -> Result<AssetFilter, DomainError> {
        AssetFilter::new(&self.optimizer.extensions)
    }

    /// Pick the build output directory: `--dir`, then `optimizer.dist_dir`,
    /// then `<exe-dir>/../dist`. The result is always absolute.
    pub fn resolve_dist_dir(&self, cli_dir: Option<&Path>) -> CliResult<PathBuf> {
        let chosen = cli_dir
            .map(Path::to_path_buf)
            .or_else(|| self.optimizer.dist_dir.clone());

        match chosen {
            Some(dir) => std::path::absolute(&dir).map_err(|e| CliError::DistDirUnresolved {
                reason: format!("cannot make '{}' absolute: {e}", dir.display()),
            }),
            None => default_dist_dir(),
        }
    }
}

/// `dist` beside the directory holding the running executable.
pub fn default_dist_dir() -> CliResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| CliError::DistDirUnresolved {
        reason: format!("cannot locate the running executable: {e}"),
    })?;

    let exe_dir = exe.parent().ok_or_else(|| CliError::DistDirUnresolved {
        reason: format!("executable '{}' has no parent directory", exe.display()),
    })?;

    Ok(exe_dir.parent().unwrap_or(exe_dir).join("dist"))
}
