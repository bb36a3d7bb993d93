//! The 8-line record file format.
//!
//! ```text
//! name
//! email
//! password
//! gender          Male | Female | Other
//! birthdate       short date, e.g. 09/03/2001
//! country         empty when none
//! color           No Color Selected when none
//! photo           photo file name or NoImage
//! ```

use crate::error::RegistrationError;
use chrono::NaiveDate;
use sreg_domain::constants::{DEFAULT_DATE_FORMAT, NO_COLOR_SELECTED, NO_IMAGE, RECORD_LINE_COUNT};
use sreg_domain::{Country, FavoriteColor, Gender, RegistrationRecord};
use std::fmt::Write;
use std::str::FromStr;
use tracing::warn;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A `chrono` date pattern that is known to format and parse full dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    /// Accepts `pattern` only if a sample date survives formatting and parsing with it.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Internal`] for malformed patterns, patterns with time
    /// fields, and patterns that lose part of the date.
    pub fn new(pattern: impl Into<String>) -> Result<Self, RegistrationError> {
        let pattern = pattern.into();
        let Some(sample) = NaiveDate::from_ymd_opt(2001, 9, 23) else {
            return Err("Sample date out of range".into());
        };

        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&pattern)).is_err()
            || NaiveDate::parse_from_str(&rendered, &pattern).ok() != Some(sample)
        {
            return Err(format!("Unusable date format '{pattern}'").into());
        }

        Ok(Self(pattern))
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }

    /// Parses with the configured pattern, then ISO `YYYY-MM-DD`.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        NaiveDate::parse_from_str(text, &self.0)
            .or_else(|_| NaiveDate::parse_from_str(text, ISO_DATE_FORMAT))
            .ok()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_owned())
    }
}

/// A record as read back from disk, before the photo is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StoredRecord {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) gender: Gender,
    /// `None` when the line is not a date in either accepted format.
    pub(crate) birthdate: Option<NaiveDate>,
    pub(crate) country: Option<Country>,
    pub(crate) favorite_color: Option<FavoriteColor>,
    pub(crate) photo_file: Option<String>,
}

fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

pub(crate) fn encode(record: &RegistrationRecord, dates: &DateFormat) -> String {
    let gender: &str = record.gender.into();
    let lines = [
        single_line(&record.name),
        single_line(&record.email),
        single_line(&record.password),
        gender.to_owned(),
        dates.format(record.birthdate),
        record.country_line().to_owned(),
        single_line(record.color_line()),
        single_line(record.photo_line()),
    ];

    let mut text = String::new();
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

/// # Errors
/// Returns [`RegistrationError::Corrupt`] when `text` has fewer than 8 lines.
pub(crate) fn decode(text: &str, dates: &DateFormat) -> Result<StoredRecord, RegistrationError> {
    let lines: Vec<&str> = text.lines().take(RECORD_LINE_COUNT).collect();
    let [name, email, password, gender, birthdate, country, color, photo] = lines[..] else {
        return Err(RegistrationError::Corrupt {
            message: format!("expected {RECORD_LINE_COUNT} lines, found {}", lines.len()).into(),
            context: None,
        });
    };

    let country = match country {
        "" => None,
        value => Country::from_str(value)
            .inspect_err(|_| warn!(country = value, "Unknown country in saved data"))
            .ok(),
    };

    let favorite_color = match color {
        NO_COLOR_SELECTED => None,
        name => Some(FavoriteColor::from_name(name)),
    };

    let photo_file = match photo {
        NO_IMAGE => None,
        file => Some(file.to_owned()),
    };

    Ok(StoredRecord {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        gender: Gender::from_record_line(gender),
        birthdate: dates.parse(birthdate),
        country,
        favorite_color,
        photo_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sreg_domain::Rgb;

    fn record() -> RegistrationRecord {
        RegistrationRecord {
            name: "Sara Ali".to_owned(),
            email: "sara@uni.ye".to_owned(),
            password: "secret1".to_owned(),
            gender: Gender::Female,
            birthdate: NaiveDate::from_ymd_opt(2003, 2, 14).expect("date"),
            country: Some(Country::Yemen),
            favorite_color: Some(FavoriteColor::from_rgb(Rgb::new(0, 0, 128))),
            photo_file: Some("student_picture.jpg".to_owned()),
        }
    }

    #[test]
    fn encodes_eight_terminated_lines() {
        let text = encode(&record(), &DateFormat::default());
        assert_eq!(
            text,
            "Sara Ali\nsara@uni.ye\nsecret1\nFemale\n02/14/2003\nYemen\nNavy\nstudent_picture.jpg\n"
        );
    }

    #[test]
    fn sentinels_for_missing_values() {
        let mut record = record();
        record.country = None;
        record.favorite_color = None;
        record.photo_file = None;

        let text = encode(&record, &DateFormat::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "No Color Selected");
        assert_eq!(lines[7], "NoImage");

        let stored = decode(&text, &DateFormat::default()).expect("decode");
        assert_eq!(stored.country, None);
        assert_eq!(stored.favorite_color, None);
        assert_eq!(stored.photo_file, None);
    }

    #[test]
    fn line_breaks_inside_fields_become_spaces() {
        let mut record = record();
        record.name = "Sara\r\nAli".to_owned();
        record.email = "a@b.c\n".to_owned();

        let text = encode(&record, &DateFormat::default());
        assert_eq!(text.lines().count(), RECORD_LINE_COUNT);
        assert!(text.starts_with("Sara  Ali\na@b.c \n"));
    }

    #[test]
    fn short_files_are_corrupt() {
        let err = decode("a\nb\nc\nMale\n01/01/2000\n", &DateFormat::default()).expect_err("corrupt");
        assert!(matches!(err, RegistrationError::Corrupt { .. }));
        assert!(decode("", &DateFormat::default()).is_err());
    }

    #[test]
    fn extra_lines_and_crlf_are_tolerated() {
        let text = "A\r\na@b.c\r\npw\r\nMale\r\n2000-05-06\r\nQatar\r\nRed\r\nNoImage\r\ntrailing\r\n";
        let stored = decode(text, &DateFormat::default()).expect("decode");

        assert_eq!(stored.name, "A");
        assert_eq!(stored.gender, Gender::Male);
        assert_eq!(stored.birthdate, NaiveDate::from_ymd_opt(2000, 5, 6));
        assert_eq!(stored.country, Some(Country::Qatar));
        assert_eq!(stored.favorite_color.as_ref().and_then(FavoriteColor::rgb), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn lenient_fields() {
        let text = "A\na@b.c\npw\nmale\nyesterday\nAtlantis\nSunset\nother.jpg\n";
        let stored = decode(text, &DateFormat::default()).expect("decode");

        assert_eq!(stored.gender, Gender::Other);
        assert_eq!(stored.birthdate, None);
        assert_eq!(stored.country, None);
        assert_eq!(stored.favorite_color.as_ref().map(FavoriteColor::name), Some("Sunset"));
        assert_eq!(stored.photo_file.as_deref(), Some("other.jpg"));
    }

    #[test]
    fn date_format_validation() {
        assert!(DateFormat::new("%d.%m.%Y").is_ok());
        assert!(DateFormat::new("%Y-%m-%d").is_ok());
        assert!(DateFormat::new("%Q").is_err());
        assert!(DateFormat::new("%H:%M").is_err());
        assert!(DateFormat::new("%m/%Y").is_err());

        let dates = DateFormat::new("%d.%m.%Y").expect("format");
        let day = NaiveDate::from_ymd_opt(1999, 12, 31).expect("date");
        assert_eq!(dates.format(day), "31.12.1999");
        assert_eq!(dates.parse("31.12.1999"), Some(day));
        assert_eq!(dates.parse("1999-12-31"), Some(day));
        assert_eq!(dates.parse("12/31/1999"), None);
    }
}
