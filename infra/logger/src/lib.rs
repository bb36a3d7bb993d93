//! # Logger
//!
//! Console and file logging for the registration apps.
//! Installs one global `tracing` subscriber with an env filter, a compact console
//! layer and an optional rolling file layer written through a non-blocking worker.
//!
//! * `RUST_LOG` always applies on top of the programmatic level.
//! * Use [`LoggerBuilder::env_filter`] for module-directed defaults
//!   (e.g., `"sreg_registration=debug,sreg_storage=info"`).
//! * File output is opt-in through [`LoggerBuilder::path`]; rotation, retention and JSON
//!   formatting are only configurable once a path is set.
//!
//! ## Example
//!
//! ```rust
//! # use sreg_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("student-registration")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// A handle to the initialized logging system.
///
/// Holds the file writer's worker guard. Keep it alive until shutdown so buffered
/// lines reach the disk.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// The `name` identifies the application in logs and prefixes rolling log files
    /// (e.g., `student-registration.2026-10-16.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) const fn new(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    /// Returns the file writer's worker guard, if file logging is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
