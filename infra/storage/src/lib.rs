//! A small, sandboxed storage engine for the registration data directory.
//! It provides a safe abstraction over the filesystem so the form never writes
//! outside the configured data directory. All examples use temporary directories
//! to avoid writing to the real filesystem.
//!
//! # Core Features
//!
//! - **Sandbox Security**: Relative paths only; `..` segments may not climb above the root and
//!   existing ancestors are canonicalized to catch symlink escapes.
//! - **Atomic Writes**: Each file is replaced through a unique temp file, `fsync` and `rename`,
//!   so a reader never sees a half-written record.
//! - **Self-Healing**: Orphaned temporary files are cleaned up when the storage is opened.
//!
//! Writes are atomic per file only. Two files written one after the other are independent:
//! the first stays on disk even if the second fails.
//!
//! # Examples
//!
//! ```rust
//! use sreg_storage::{Storage, StorageError};
//!
//! fn main() -> Result<(), StorageError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let root = tmp.path().join("data");
//!     let storage = Storage::builder().root(&root).create(true).connect()?;
//!
//!     storage.write("student_data.txt", b"Jane\n")?;
//!     assert_eq!(storage.read("student_data.txt")?, b"Jane\n");
//!     assert!(storage.exists("student_data.txt")?);
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod engine;
mod error;
mod maintenance;
mod security;

pub use builder::StorageBuilder;
pub use engine::Storage;
pub use error::{StorageError, StorageErrorExt};
