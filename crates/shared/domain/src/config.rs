use crate::constants::{HOST_ENTRY_TYPE, HOST_FEATURE, HOST_LIBRARY_PREFIX};
use crate::feature::FeatureId;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level host configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeaveConfigInner {
    pub hosting: HostingConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct WeaveConfig {
    #[serde(flatten, default)]
    inner: Arc<WeaveConfigInner>,
}

impl Deref for WeaveConfig {
    type Target = WeaveConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for WeaveConfig {
    fn deref_mut(&mut self) -> &mut WeaveConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// How the host recognizes and synthesizes its own builtin features.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Declaring this feature on a tenant pulls in the host libraries.
    pub feature: FeatureId,
    /// Libraries whose name starts with this prefix belong to the host.
    pub library_prefix: String,
    /// Type constructed by the bootstrap; never registered in a tenant container.
    pub entry_type: String,
}

/// Console/file logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: bool,
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra `EnvFilter` directives such as `weave_composition=trace`. `RUST_LOG` wins when unset.
    pub filter: Option<String>,
    pub format: LogFormat,
    /// Enables rolling file output into this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
    pub rotation: LogRotation,
    pub max_files: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

// --- Default ---

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            feature: FeatureId::from(HOST_FEATURE),
            library_prefix: HOST_LIBRARY_PREFIX.to_owned(),
            entry_type: HOST_ENTRY_TYPE.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console: true,
            level: "info".to_owned(),
            filter: None,
            format: LogFormat::Compact,
            directory: None,
            file_prefix: "weave".to_owned(),
            rotation: LogRotation::Daily,
            max_files: 10,
        }
    }
}
