//! Kernel utilities shared by the apps.
//! Keep this crate lightweight: it loads configuration and re-exports the domain types
//! so front-ends depend on one crate for both.
//!
//! ## Config loading
//! ```rust,no_run
//! use sreg_kernel::config::load_app_config;
//!
//! let cfg = load_app_config(None::<&str>).unwrap_or_default();
//! println!("records live in {}", cfg.storage.data_dir.display());
//! ```

pub mod config;

pub use sreg_domain as domain;
