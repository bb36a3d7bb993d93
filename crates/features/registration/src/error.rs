use crate::view::Field;
use sreg_storage::StorageError;
use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[sreg_derive::sreg_error]
pub enum RegistrationError {
    /// User-correctable input problem. `field` is the input that should take focus.
    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation {
        message: Cow<'static, str>,
        field: Option<Field>,
        context: Option<Cow<'static, str>>,
    },

    /// The record file does not exist.
    #[error("No saved data found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The record file exists but cannot be read as a record.
    #[error("Saved data is incomplete or corrupted{}: {message}", format_context(.context))]
    Corrupt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A chosen file could not be read or decoded as an image.
    #[error("Image decode failure{}: {source}", format_context(.context))]
    ImageDecode { source: image::ImageError, context: Option<Cow<'static, str>> },

    /// The in-memory photo could not be encoded for saving.
    #[error("Image encode failure{}: {message}", format_context(.context))]
    ImageEncode { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Reading or writing the data directory failed.
    #[error("Storage failure{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// The coarse error classes the form distinguishes when reporting to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Io,
    Corrupt,
    NotFound,
    ImageDecode,
}

impl RegistrationError {
    pub(crate) fn validation(message: &'static str, field: Option<Field>) -> Self {
        Self::Validation { message: Cow::Borrowed(message), field, context: None }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Corrupt { .. } => ErrorKind::Corrupt,
            Self::ImageDecode { .. } => ErrorKind::ImageDecode,
            Self::ImageEncode { .. } | Self::Storage { .. } | Self::Internal { .. } => {
                ErrorKind::Io
            },
        }
    }

    /// The input that should receive focus after this error, if any.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Validation { field, .. } => *field,
            _ => None,
        }
    }
}
