use crate::error::RegistrationError;
use crate::photo::Photo;
use crate::repository::RecordRepository;
use crate::validation;
use crate::view::{Field, FormState, FormView, IMAGE_FILTER, Notice};
use sreg_domain::config::AppConfig;
use sreg_domain::{FavoriteColor, Gender, RegistrationRecord};
use std::sync::Arc;
use tracing::{info, warn};

const TITLE_SUCCESS: &str = "Success";
const TITLE_ERROR: &str = "Error";
const TITLE_VALIDATION: &str = "Validation Error";

/// One operation per form button. Stateless apart from where records are kept.
#[derive(Debug, Clone)]
pub struct RegistrationController {
    repository: Arc<RecordRepository>,
}

impl RegistrationController {
    /// # Errors
    /// See [`RecordRepository::open`].
    pub fn new(config: &AppConfig) -> Result<Self, RegistrationError> {
        Ok(Self::with_repository(RecordRepository::open(config)?))
    }

    #[must_use]
    pub fn with_repository(repository: RecordRepository) -> Self {
        Self { repository: Arc::new(repository) }
    }

    #[must_use]
    pub fn repository(&self) -> &RecordRepository {
        &self.repository
    }

    /// Clears every field, including the photo and the result box, and focuses the name.
    pub fn reset(&self, view: &mut impl FormView) {
        view.apply(FormState::default());
        view.focus(Field::Name);
    }

    /// Opens the color chooser and keeps the choice. Cancelling changes nothing.
    pub fn pick_color(&self, view: &mut impl FormView) -> Option<FavoriteColor> {
        let color = view.choose_color()?;
        let mut state = view.snapshot();
        state.favorite_color = Some(color.clone());
        view.apply(state);
        Some(color)
    }

    /// Opens the image chooser and replaces the photo with the chosen file.
    ///
    /// Returns `Ok(false)` when the user cancels.
    ///
    /// # Errors
    /// Returns [`RegistrationError::ImageDecode`] when the file cannot be read or decoded.
    /// The current photo is kept.
    pub fn upload_photo(&self, view: &mut impl FormView) -> Result<bool, RegistrationError> {
        let Some(path) = view.choose_image_file(&IMAGE_FILTER) else {
            return Ok(false);
        };

        match Photo::open(&path) {
            Ok(photo) => {
                info!(path = %path.display(), width = photo.width(), height = photo.height(), "Photo selected");
                let mut state = view.snapshot();
                state.photo = Some(photo);
                view.apply(state);
                Ok(true)
            },
            Err(source) => {
                warn!(path = %path.display(), error = %source, "Photo rejected");
                view.notify(Notice::error(TITLE_ERROR, format!("Failed to load image: {source}")));
                Err(RegistrationError::ImageDecode { source, context: None })
            },
        }
    }

    /// Writes the form to the record file, and the photo next to it.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Validation`] without a name or email, or the
    /// storage/encoding error that stopped the save.
    pub fn save(&self, view: &mut impl FormView) -> Result<RegistrationRecord, RegistrationError> {
        let state = view.snapshot();

        if let Err(err) = validation::check_save(&state) {
            report_validation(view, &err);
            return Err(err);
        }

        let record = RegistrationRecord {
            name: state.name,
            email: state.email,
            password: state.password,
            gender: state.gender.unwrap_or(Gender::Other),
            birthdate: state.birthdate,
            country: state.country,
            favorite_color: state.favorite_color,
            photo_file: None,
        };

        match self.repository.save(record, state.photo.as_ref()) {
            Ok(saved) => {
                view.notify(Notice::info(TITLE_SUCCESS, "Data saved successfully!"));
                Ok(saved)
            },
            Err(err) => {
                warn!(error = %err, "Save failed");
                view.notify(Notice::error(TITLE_ERROR, format!("Failed to save data: {err}")));
                Err(err)
            },
        }
    }

    /// Fills the form from the record file. On failure no field changes.
    ///
    /// # Errors
    /// Returns [`RegistrationError::NotFound`], [`RegistrationError::Corrupt`], or the
    /// storage error that stopped the read.
    pub fn load(&self, view: &mut impl FormView) -> Result<(), RegistrationError> {
        let loaded = match self.repository.load() {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(error = %err, "Load failed");
                let body = match &err {
                    RegistrationError::NotFound { .. } => "No saved data found!".to_owned(),
                    RegistrationError::Corrupt { .. } => {
                        "Saved data is incomplete or corrupted!".to_owned()
                    },
                    other => format!("Failed to load data: {other}"),
                };
                view.notify(Notice::error(TITLE_ERROR, body));
                return Err(err);
            },
        };

        let mut state = view.snapshot();
        loaded.apply_to(&mut state);
        view.apply(state);
        view.notify(Notice::info(TITLE_SUCCESS, "Data loaded successfully!"));
        Ok(())
    }

    /// Validates every field and shows the summary in the result box.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Validation`] for the first invalid field, which also
    /// receives focus when it can.
    pub fn submit(&self, view: &mut impl FormView) -> Result<String, RegistrationError> {
        let mut state = view.snapshot();

        let summary = match validation::check_submit(&state) {
            Ok(submission) => submission.summary(self.repository.date_format()),
            Err(err) => {
                report_validation(view, &err);
                return Err(err);
            },
        };

        state.result.clone_from(&summary);
        view.apply(state);
        Ok(summary)
    }
}

fn report_validation(view: &mut impl FormView, err: &RegistrationError) {
    if let RegistrationError::Validation { message, field, .. } = err {
        view.notify(Notice::warning(TITLE_VALIDATION, message.to_string()));
        if let Some(field) = field {
            view.focus(*field);
        }
    }
}
