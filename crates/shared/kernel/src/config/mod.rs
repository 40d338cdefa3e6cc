use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use weave_domain::config::WeaveConfig;

/// Prefix of environment overrides (`WEAVE__HOSTING__LIBRARY_PREFIX=Acme`).
pub const ENV_PREFIX: &str = "WEAVE";
/// File used when no explicit config path is given.
pub const DEFAULT_CONFIG: &str = "weave";

/// Custom error type for config loading.
#[weave_derive::weave_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a file overlaid with `WEAVE__`-prefixed environment variables.
///
/// The file format is picked from the extension (`.toml`, `.json`, `.yaml`, ...). Nested keys
/// are addressed with double underscores, e.g. `WEAVE__LOGGING__LEVEL=debug` maps to
/// `logging.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env_source())
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads a standalone document (host manifest, tenant file) without environment overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file cannot be read or does not match `T`.
pub fn load_document<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    debug!("Loading document {}", path.display());

    Config::builder()
        .add_source(File::from(path).required(true))
        .build()
        .context(format!("Failed to read {}", path.display()))?
        .try_deserialize::<T>()
        .context(format!("Failed to deserialize {}", path.display()))
}

/// Loads the host configuration.
///
/// Without a path, `weave.*` in the working directory is used when present; otherwise the
/// defaults apply, still overlaid with environment variables.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or any source is malformed.
pub fn load_host_config(path: Option<&Path>) -> Result<WeaveConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(Some(path));
    }

    info!("Loading host config from optional {DEFAULT_CONFIG}.* and environment");

    Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG).required(false))
        .add_source(env_source())
        .build()
        .context("Failed to build host config")?
        .try_deserialize::<WeaveConfig>()
        .context("Failed to deserialize host config")
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__")
}
