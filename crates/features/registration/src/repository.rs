use crate::codec::{self, DateFormat, StoredRecord};
use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::photo::Photo;
use crate::view::FormState;
use chrono::NaiveDate;
use sreg_domain::config::AppConfig;
use sreg_domain::{Country, FavoriteColor, Gender, RegistrationRecord};
use sreg_storage::{Storage, StorageError};
use std::path::Path;
use tracing::{debug, info, warn};

/// The record file and its photo, inside one storage sandbox.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    storage: Storage,
    record_file: String,
    photo_file: String,
    dates: DateFormat,
}

/// Everything a successful load puts back into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
    /// `None` when the stored date could not be parsed; the form keeps its own value.
    pub birthdate: Option<NaiveDate>,
    pub country: Option<Country>,
    pub favorite_color: Option<FavoriteColor>,
    pub photo: Option<Photo>,
}

impl LoadedRecord {
    /// Copies the loaded values into `state`. The result text is left alone.
    pub fn apply_to(self, state: &mut FormState) {
        state.name = self.name;
        state.email = self.email;
        state.password = self.password;
        state.gender = Some(self.gender);
        if let Some(birthdate) = self.birthdate {
            state.birthdate = birthdate;
        }
        state.country = self.country;
        state.favorite_color = self.favorite_color;
        state.photo = self.photo;
    }
}

impl RecordRepository {
    /// Connects the data directory named by `config.storage`, creating it if needed.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Storage`] if the directory cannot be created or opened,
    /// or [`RegistrationError::Internal`] for an unusable `form.date_format`.
    pub fn open(config: &AppConfig) -> Result<Self, RegistrationError> {
        let storage = Storage::builder()
            .root(&config.storage.data_dir)
            .create(true)
            .connect()
            .context("Failed to open data directory")?;
        let dates = DateFormat::new(config.form.date_format.as_str())?;

        Ok(Self::with_storage(
            storage,
            config.storage.record_file.as_str(),
            config.storage.photo_file.as_str(),
            dates,
        ))
    }

    #[must_use]
    pub fn with_storage(
        storage: Storage,
        record_file: impl Into<String>,
        photo_file: impl Into<String>,
        dates: DateFormat,
    ) -> Self {
        Self { storage, record_file: record_file.into(), photo_file: photo_file.into(), dates }
    }

    #[must_use]
    pub const fn date_format(&self) -> &DateFormat {
        &self.dates
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.storage.root()
    }

    /// Writes the record file, then the photo when one is given.
    ///
    /// The photo line of the saved record is the configured photo file name, or
    /// `NoImage` without a photo. The record file stays written if encoding or writing
    /// the photo fails.
    ///
    /// # Errors
    /// Returns [`RegistrationError::ImageEncode`] or [`RegistrationError::Storage`].
    pub fn save(
        &self,
        mut record: RegistrationRecord,
        photo: Option<&Photo>,
    ) -> Result<RegistrationRecord, RegistrationError> {
        record.photo_file = photo.map(|_| self.photo_file.clone());

        let text = codec::encode(&record, &self.dates);
        self.storage.write(&self.record_file, text.as_bytes()).context("Failed to write record")?;
        debug!(file = %self.record_file, "Record written");

        if let Some(photo) = photo {
            let jpeg = photo.encode_jpeg()?;
            self.storage.write(&self.photo_file, &jpeg).context("Failed to write photo")?;
            debug!(file = %self.photo_file, bytes = jpeg.len(), "Photo written");
        }

        info!(name = %record.name, photo = record.photo_file.is_some(), "Registration saved");
        Ok(record)
    }

    /// Reads the record file back, and the photo if the record points at it.
    ///
    /// A photo that exists but cannot be decoded is dropped with a warning.
    ///
    /// # Errors
    /// Returns [`RegistrationError::NotFound`] without a record file,
    /// [`RegistrationError::Corrupt`] for fewer than 8 lines,
    /// or [`RegistrationError::Storage`] for other read failures.
    pub fn load(&self) -> Result<LoadedRecord, RegistrationError> {
        let bytes = match self.storage.read(&self.record_file) {
            Ok(bytes) => bytes,
            Err(StorageError::FileNotFound { message, .. }) => {
                return Err(RegistrationError::NotFound { message, context: None });
            },
            Err(err) => return Err(err.into()),
        };

        let stored = codec::decode(&String::from_utf8_lossy(&bytes), &self.dates)?;
        let photo = self.reload_photo(&stored)?;

        info!(name = %stored.name, photo = photo.is_some(), "Registration loaded");
        Ok(LoadedRecord {
            name: stored.name,
            email: stored.email,
            password: stored.password,
            gender: stored.gender,
            birthdate: stored.birthdate,
            country: stored.country,
            favorite_color: stored.favorite_color,
            photo,
        })
    }

    fn reload_photo(&self, stored: &StoredRecord) -> Result<Option<Photo>, RegistrationError> {
        if stored.photo_file.as_deref() != Some(self.photo_file.as_str())
            || !self.storage.exists(&self.photo_file)?
        {
            return Ok(None);
        }

        let photo = self
            .storage
            .read(&self.photo_file)
            .map_err(RegistrationError::from)
            .and_then(|bytes| Photo::decode(&bytes).map_err(RegistrationError::from));

        match photo {
            Ok(photo) => Ok(Some(photo)),
            Err(err) => {
                warn!(file = %self.photo_file, error = %err, "Saved photo could not be loaded");
                Ok(None)
            },
        }
    }
}
