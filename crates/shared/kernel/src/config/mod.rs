use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use sreg_domain::config::AppConfig;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the config file looked up in the working directory (`registration.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "registration";

/// Prefix of environment overrides (`SREG__STORAGE__DATA_DIR` maps to `storage.data_dir`).
pub const ENV_PREFIX: &str = "SREG";

/// Custom error type for config loading.
#[sreg_derive::sreg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a TOML file overlaid with environment variables.
///
/// 1. **Base File**: `path` when given (then it must exist), otherwise an optional
///    `registration.toml` in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `SREG__`; nested keys use double
///    underscores (`SREG__LOGGING__LEVEL=debug` maps to `logging.level`).
///
/// Missing keys fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a file cannot be parsed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use sreg_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct WindowOnly {
///     title: String,
/// }
///
/// let cfg: WindowOnly = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true);

    load_layered(path, environment)
}

/// Loads the application's [`AppConfig`] with [`load_config`].
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
