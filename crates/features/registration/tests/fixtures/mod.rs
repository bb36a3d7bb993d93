#![allow(dead_code)]

use chrono::NaiveDate;
use image::{DynamicImage, Rgb as Pixel, RgbImage};
use sreg_registration::domain::config::AppConfig;
use sreg_registration::domain::{Country, FavoriteColor, Gender, Rgb};
use sreg_registration::{Field, FileFilter, FormState, FormView, Notice, Photo, RegistrationController};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// An in-memory form that records everything the controller asks of it.
#[derive(Debug, Default)]
pub struct ScriptedView {
    pub state: FormState,
    pub notices: Vec<Notice>,
    pub focused: Vec<Field>,
    pub applied: usize,
    pub colors: VecDeque<FavoriteColor>,
    pub files: VecDeque<PathBuf>,
    pub offered_filters: Vec<FileFilter>,
}

impl ScriptedView {
    #[must_use]
    pub fn with_state(state: FormState) -> Self {
        Self { state, ..Self::default() }
    }

    /// # Panics
    /// If no notice was shown.
    #[must_use]
    pub fn last_notice(&self) -> &Notice {
        self.notices.last().expect("a notice was shown")
    }
}

impl FormView for ScriptedView {
    fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    fn apply(&mut self, state: FormState) {
        self.applied += 1;
        self.state = state;
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn focus(&mut self, field: Field) {
        self.focused.push(field);
    }

    fn choose_color(&mut self) -> Option<FavoriteColor> {
        self.colors.pop_front()
    }

    fn choose_image_file(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        self.offered_filters.push(*filter);
        self.files.pop_front()
    }
}

/// A controller whose data directory is `dir`.
///
/// # Panics
/// If the directory cannot be opened.
#[must_use]
pub fn controller_in(dir: &Path) -> RegistrationController {
    let mut config = AppConfig::default();
    config.storage.data_dir = dir.to_path_buf();
    RegistrationController::new(&config).expect("controller opens")
}

/// A form that passes every submit check.
///
/// # Panics
/// Never; the date is a literal.
#[must_use]
pub fn complete_form() -> FormState {
    FormState {
        name: "Amal Nasser".to_owned(),
        email: "amal@college.edu".to_owned(),
        password: "hunter22".to_owned(),
        gender: Some(Gender::Female),
        birthdate: NaiveDate::from_ymd_opt(2002, 4, 17).expect("valid date"),
        country: Some(Country::Palestine),
        favorite_color: Some(FavoriteColor::from_rgb(Rgb::new(0, 128, 128))),
        ..FormState::default()
    }
}

#[must_use]
pub fn sample_photo() -> Photo {
    Photo::from(DynamicImage::ImageRgb8(RgbImage::from_fn(16, 12, |x, y| {
        Pixel([u8::try_from(x * 15).unwrap_or(0), u8::try_from(y * 20).unwrap_or(0), 90])
    })))
}

/// Writes a small PNG to `dir/name` and returns its path.
///
/// # Panics
/// If the file cannot be written.
#[must_use]
pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    sample_photo().image().save(&path).expect("write png");
    path
}
