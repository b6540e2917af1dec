//! Process settings.
//!
//! Only the process plumbing (logging) is configurable at runtime. The constant table is
//! compiled in and is never read from these sources.

use config::{Config, Environment, File};
use passport_domain::error::format_context;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_SETTINGS_FILE: &str = "passport";
const ENV_PREFIX: &str = "PASSPORT";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait SettingsErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError>;
}

impl<T> SettingsErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError> {
        self.map_err(|source| SettingsError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for SettingsError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Runtime settings of a passport process.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
}

/// Logger knobs. The default level comes from `DEBUG_INFO_ENABLED`, not from here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
    /// Explicit filter directives such as `passport_kernel=trace`.
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { console: true, directory: None, json: false, max_files: 10, filter: None }
    }
}

/// Loads settings from an optional file overlaid with `PASSPORT__` environment variables.
///
/// 1. **Base File**: `path` (any extension supported by `config`), defaulting to `passport`.
///    A missing file is not an error; the defaults of `T` apply.
/// 2. **Environment Overrides**: `PASSPORT__LOGGING__DIRECTORY=/var/log/passport` maps to
///    `logging.directory`.
///
/// # Errors
/// Returns [`SettingsError::Config`] if a source is malformed or does not match `T`.
///
/// # Example
/// ```rust
/// use passport_kernel::settings::{Settings, load_settings};
///
/// let settings: Settings = load_settings(None::<&str>).unwrap_or_default();
/// assert!(settings.logging.max_files > 0);
/// ```
pub fn load_settings<T>(path: Option<impl AsRef<Path>>) -> Result<T, SettingsError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), "Loading settings");

    build_settings(&effective_path, environment())
}

/// `PASSPORT__`-prefixed variables, `__` separating nested keys.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__").try_parsing(true)
}

/// Layers `env` over the optional file at `path`; later sources win.
pub(crate) fn build_settings<T>(path: &Path, env: Environment) -> Result<T, SettingsError>
where
    T: DeserializeOwned,
{
    let settings = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(env)
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}
