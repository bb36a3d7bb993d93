use crate::color::FavoriteColor;
use crate::constants::{NO_COLOR_SELECTED, NO_IMAGE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Reads the gender line of a record file.
    ///
    /// Only the exact, case-sensitive spellings `Male` and `Female` are recognized;
    /// everything else (including `male` or an empty line) is `Other`.
    #[must_use]
    pub fn from_record_line(line: &str) -> Self {
        match line {
            "Male" => Self::Male,
            "Female" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// The fixed list offered by the country drop-down, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
pub enum Country {
    Yemen,
    Egypt,
    Oman,
    Qatar,
    Palestine,
    Syria,
}

/// One registration as it is written to and read from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    /// Stored in plain text.
    pub password: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub country: Option<Country>,
    pub favorite_color: Option<FavoriteColor>,
    /// File name of the saved photo, relative to the data directory.
    pub photo_file: Option<String>,
}

impl RegistrationRecord {
    /// The color line: the color name, or the "no color" sentinel.
    #[must_use]
    pub fn color_line(&self) -> &str {
        self.favorite_color.as_ref().map_or(NO_COLOR_SELECTED, FavoriteColor::name)
    }

    /// The country line: the country name, or an empty string.
    #[must_use]
    pub fn country_line(&self) -> &'static str {
        self.country.map_or("", Into::into)
    }

    /// The photo line: the photo file name, or the "no image" sentinel.
    #[must_use]
    pub fn photo_line(&self) -> &str {
        self.photo_file.as_deref().unwrap_or(NO_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn gender_line_is_case_sensitive() {
        assert_eq!(Gender::from_record_line("Male"), Gender::Male);
        assert_eq!(Gender::from_record_line("Female"), Gender::Female);
        assert_eq!(Gender::from_record_line("male"), Gender::Other);
        assert_eq!(Gender::from_record_line("FEMALE"), Gender::Other);
        assert_eq!(Gender::from_record_line(""), Gender::Other);
    }

    #[test]
    fn countries_keep_drop_down_order() {
        let names: Vec<&str> = Country::iter().map(Into::into).collect();
        assert_eq!(names, ["Yemen", "Egypt", "Oman", "Qatar", "Palestine", "Syria"]);
    }

    #[test]
    fn country_parsing_is_exact() {
        assert_eq!(Country::from_str("Qatar").ok(), Some(Country::Qatar));
        assert!(Country::from_str("qatar").is_err());
        assert!(Country::from_str("France").is_err());
    }

    #[test]
    fn sentinel_lines_for_missing_values() {
        let record = RegistrationRecord {
            name: "A".to_owned(),
            email: "a@b.c".to_owned(),
            password: String::new(),
            gender: Gender::Other,
            birthdate: NaiveDate::from_ymd_opt(2000, 1, 2).unwrap_or_default(),
            country: None,
            favorite_color: None,
            photo_file: None,
        };

        assert_eq!(record.color_line(), "No Color Selected");
        assert_eq!(record.country_line(), "");
        assert_eq!(record.photo_line(), "NoImage");
    }
}
