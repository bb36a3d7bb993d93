//! # Domain Models
//!
//! Pure registration types with minimal dependencies (`serde`, `chrono`, `strum`).
//! Keep it lean: no file access, no widgets, no image decoding. Just data and simple helpers.

pub mod color;
pub mod config;
pub mod constants;
pub mod record;

pub use color::{FavoriteColor, Rgb};
pub use record::{Country, Gender, RegistrationRecord};
