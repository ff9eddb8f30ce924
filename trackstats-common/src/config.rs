//! Configuration loading and value resolution
//!
//! Every setting is resolved in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: the service logs a warning and
//! continues with the remaining tiers.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the CSV data file path
pub const ENV_DATA_FILE: &str = "TRACKSTATS_DATA_FILE";
/// Environment variable overriding the static asset directory
pub const ENV_STATIC_DIR: &str = "TRACKSTATS_STATIC_DIR";
/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "TRACKSTATS_HOST";
/// Environment variable overriding the HTTP port
pub const ENV_PORT: &str = "TRACKSTATS_PORT";
/// Environment variable pointing at an explicit TOML config file
pub const ENV_CONFIG: &str = "TRACKSTATS_CONFIG";

/// Bootstrap configuration loaded from TOML file
///
/// All keys are optional; anything left out falls through to the
/// compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to the source CSV (relative paths resolve against the working directory)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Directory holding `index.html` and the front-end assets
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Bind host
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Compiled fallback values (tier 4)
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/Spotify_Songs_2024.csv"),
            static_dir: PathBuf::from("static"),
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Values supplied on the command line (tier 1)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// Default tracing filter directive, used when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve every setting through CLI → ENV → TOML → compiled default
    pub fn resolve(cli: &CliOverrides, toml_config: &TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::default();

        let data_file = resolve_setting(
            cli.data_file.clone(),
            ENV_DATA_FILE,
            |raw| Ok(PathBuf::from(raw)),
            toml_config.data_file.clone(),
            defaults.data_file,
        )?;

        let static_dir = resolve_setting(
            cli.static_dir.clone(),
            ENV_STATIC_DIR,
            |raw| Ok(PathBuf::from(raw)),
            toml_config.static_dir.clone(),
            defaults.static_dir,
        )?;

        let host = resolve_setting(
            cli.host.clone(),
            ENV_HOST,
            |raw| Ok(raw.to_string()),
            toml_config.host.clone(),
            defaults.host,
        )?;

        let port = resolve_setting(
            cli.port,
            ENV_PORT,
            parse_port,
            toml_config.port,
            defaults.port,
        )?;

        Ok(Self {
            data_file,
            static_dir,
            host,
            port,
            log_level: toml_config.logging.level.clone(),
        })
    }

    /// Socket address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn resolve_setting<T>(
    cli_value: Option<T>,
    env_var_name: &str,
    parse_env: fn(&str) -> Result<T>,
    toml_value: Option<T>,
    default: T,
) -> Result<T> {
    // Priority 1: Command-line argument
    if let Some(value) = cli_value {
        return Ok(value);
    }

    // Priority 2: Environment variable (empty counts as unset)
    if let Ok(raw) = std::env::var(env_var_name) {
        if !raw.trim().is_empty() {
            return parse_env(raw.trim());
        }
    }

    // Priority 3: TOML config file
    if let Some(value) = toml_value {
        return Ok(value);
    }

    // Priority 4: Compiled default
    Ok(default)
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>()
        .map_err(|_| Error::InvalidInput(format!("{} must be a port number, got '{}'", ENV_PORT, raw)))
}

/// Locate the TOML config file: CLI argument, then ENV, then the per-user
/// config directory (`<config_dir>/trackstats/config.toml`)
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(ENV_CONFIG) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|d| d.join("trackstats").join("config.toml"))
}

/// Load the TOML bootstrap file
///
/// A missing file yields `TomlConfig::default()` with a warning; a file that
/// exists but cannot be read or parsed is an error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            "Config file not found at {} (using defaults)",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

    info!("Loaded config file {}", path.display());
    Ok(config)
}
