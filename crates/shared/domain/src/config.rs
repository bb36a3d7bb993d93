use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_PHOTO_FILE, DEFAULT_RECORD_FILE};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub storage: StorageConfig,
    pub form: FormConfig,
    pub logging: LoggingConfig,
    pub window: WindowConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the record and the photo live.
///
/// Both file names are relative to `data_dir` and may not escape it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub record_file: String,
    pub photo_file: String,
}

/// Form behavior knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// `chrono` format for the short birthdate string on disk and in the summary.
    pub date_format: String,
}

/// Log output settings, handed to the logger at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Optional `tracing` directives, e.g. `sreg_registration=debug`.
    pub filter: Option<String>,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

/// Main window geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

// --- Default ---

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            record_file: DEFAULT_RECORD_FILE.to_owned(),
            photo_file: DEFAULT_PHOTO_FILE.to_owned(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { date_format: DEFAULT_DATE_FORMAT.to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false, max_files: 10 }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Student Registration Form".to_owned(), width: 600.0, height: 500.0 }
    }
}
