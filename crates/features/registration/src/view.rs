use crate::photo::Photo;
use chrono::{Local, NaiveDate};
use sreg_domain::constants::{COLOR_LABEL_PREFIX, IMAGE_EXTENSIONS, NO_COLOR_SELECTED};
use sreg_domain::{Country, FavoriteColor, Gender, Rgb};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Inputs of the registration form that can receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Gender,
    Birthdate,
    Country,
    FavoriteColor,
    Photo,
}

impl Field {
    /// Stable element id, used by front-ends to address the widget.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Gender => "gender",
            Self::Birthdate => "birthdate",
            Self::Country => "country",
            Self::FavoriteColor => "favorite-color",
            Self::Photo => "photo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message box: level, title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: Cow<'static, str>,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<Cow<'static, str>>, body: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, title: title.into(), body: body.into() }
    }

    pub fn warning(title: impl Into<Cow<'static, str>>, body: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, title: title.into(), body: body.into() }
    }

    pub fn error(title: impl Into<Cow<'static, str>>, body: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, title: title.into(), body: body.into() }
    }
}

/// Name and extensions offered by a native file chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

impl FileFilter {
    /// Case-insensitive extension check.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
    }
}

pub const IMAGE_FILTER: FileFilter = FileFilter { name: "Image Files", extensions: IMAGE_EXTENSIONS };

/// Every value shown by the form, read and written as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Option<Gender>,
    pub birthdate: NaiveDate,
    pub country: Option<Country>,
    pub favorite_color: Option<FavoriteColor>,
    pub photo: Option<Photo>,
    /// The summary box below the buttons.
    pub result: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            gender: None,
            birthdate: Local::now().date_naive(),
            country: None,
            favorite_color: None,
            photo: None,
            result: String::new(),
        }
    }
}

impl FormState {
    /// Text of the color label: `Selected Color: <name>` or `No Color Selected`.
    #[must_use]
    pub fn color_label(&self) -> String {
        self.favorite_color.as_ref().map_or_else(
            || NO_COLOR_SELECTED.to_owned(),
            |color| format!("{COLOR_LABEL_PREFIX}{}", color.name()),
        )
    }

    /// Background of the color label, when the chosen color has a known RGB value.
    #[must_use]
    pub fn color_preview(&self) -> Option<Rgb> {
        self.favorite_color.as_ref().and_then(FavoriteColor::rgb)
    }
}

/// The UI collaborator driven by [`crate::RegistrationController`].
///
/// Implementations own the widget state. The controller reads it once per operation
/// with [`FormView::snapshot`] and writes it back once with [`FormView::apply`].
pub trait FormView {
    /// Current values of every field.
    fn snapshot(&self) -> FormState;

    /// Replaces every field with `state`.
    fn apply(&mut self, state: FormState);

    /// Shows a message box.
    fn notify(&mut self, notice: Notice);

    /// Moves input focus to `field`.
    fn focus(&mut self, field: Field);

    /// Opens a color chooser. `None` means the user cancelled.
    fn choose_color(&mut self) -> Option<FavoriteColor>;

    /// Opens a file chooser restricted to `filter`. `None` means the user cancelled.
    fn choose_image_file(&mut self, filter: &FileFilter) -> Option<PathBuf>;
}
