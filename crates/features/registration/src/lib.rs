//! # Student Registration
//!
//! The form's validation and persistence routine, independent of any widget toolkit.
//!
//! ## Architecture
//!
//! * **[`FormView`]**: the UI collaborator. A passive set of fields read and written as one
//!   [`FormState`], plus message, focus, color chooser and file chooser capabilities.
//! * **[`RegistrationController`]**: one method per button (`reset`, `pick_color`,
//!   `upload_photo`, `save`, `load`, `submit`). Holds no form state of its own.
//! * **[`RecordRepository`]**: the 8-line record file and the sibling JPEG photo inside the
//!   configured data directory.
//!
//! Every controller operation returns a [`Result`] and also reports its outcome to the
//! view through [`FormView::notify`], so front-ends only render notices.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sreg_registration::{FormState, RegistrationController};
//!
//! let controller = RegistrationController::new(&config)?;
//! controller.submit(&mut view)?;   // validates and fills the summary
//! controller.save(&mut view)?;     // writes student_data.txt (+ student_picture.jpg)
//! ```

mod codec;
mod controller;
mod error;
mod photo;
mod repository;
pub mod validation;
mod view;

pub use crate::codec::DateFormat;
pub use crate::controller::RegistrationController;
pub use crate::error::{ErrorKind, RegistrationError, RegistrationErrorExt};
pub use crate::photo::Photo;
pub use crate::repository::{LoadedRecord, RecordRepository};
pub use crate::validation::Submission;
pub use crate::view::{Field, FileFilter, FormState, FormView, IMAGE_FILTER, Notice, NoticeLevel};
pub use sreg_domain as domain;
