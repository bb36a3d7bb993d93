//! Input checks run by the Save and Register buttons.

use crate::codec::DateFormat;
use crate::error::RegistrationError;
use crate::view::{Field, FormState};
use chrono::NaiveDate;
use regex::Regex;
use sreg_domain::{Country, FavoriteColor, Gender};
use std::sync::LazyLock;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// The only precondition of saving: a non-blank name and email.
///
/// # Errors
/// Returns [`RegistrationError::Validation`] when either is blank.
pub fn check_save(state: &FormState) -> Result<(), RegistrationError> {
    if is_blank(&state.name) || is_blank(&state.email) {
        return Err(RegistrationError::validation(
            "Please fill in at least Name and Email before saving!",
            None,
        ));
    }
    Ok(())
}

/// A form that passed every submit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub country: Country,
    pub favorite_color: &'a FavoriteColor,
}

impl Submission<'_> {
    /// The six-line summary shown in the result box. Never includes the password.
    #[must_use]
    pub fn summary(&self, dates: &DateFormat) -> String {
        format!(
            "Name: {}\nEmail: {}\nGender: {}\nBirthdate: {}\nCountry: {}\nFavorite Color: {}",
            self.name,
            self.email,
            self.gender,
            dates.format(self.birthdate),
            self.country,
            self.favorite_color.name(),
        )
    }
}

/// Runs the submit checks in form order and stops at the first failure.
///
/// # Errors
/// Returns [`RegistrationError::Validation`] naming the first invalid input.
pub fn check_submit(state: &FormState) -> Result<Submission<'_>, RegistrationError> {
    if is_blank(&state.name) {
        return Err(RegistrationError::validation("Name is required!", Some(Field::Name)));
    }
    if !is_valid_email(&state.email) {
        return Err(RegistrationError::validation(
            "Enter a valid email address!",
            Some(Field::Email),
        ));
    }
    if state.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(RegistrationError::validation(
            "Password must be at least 6 characters!",
            Some(Field::Password),
        ));
    }
    let Some(gender) = state.gender else {
        return Err(RegistrationError::validation("Please select a gender!", None));
    };
    let Some(country) = state.country else {
        return Err(RegistrationError::validation(
            "Please select a country!",
            Some(Field::Country),
        ));
    };
    let Some(favorite_color) = state.favorite_color.as_ref() else {
        return Err(RegistrationError::validation("Please select your favorite color!", None));
    };

    Ok(Submission {
        name: &state.name,
        email: &state.email,
        gender,
        birthdate: state.birthdate,
        country,
        favorite_color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sreg_domain::Rgb;

    fn complete() -> FormState {
        FormState {
            name: "A".to_owned(),
            email: "a@b.c".to_owned(),
            password: "secret".to_owned(),
            gender: Some(Gender::Female),
            birthdate: NaiveDate::from_ymd_opt(2001, 9, 3).expect("date"),
            country: Some(Country::Oman),
            favorite_color: Some(FavoriteColor::from_rgb(Rgb::new(255, 0, 0))),
            ..FormState::default()
        }
    }

    fn failure(state: &FormState) -> (String, Option<Field>) {
        match check_submit(state) {
            Err(RegistrationError::Validation { message, field, .. }) => (message.into_owned(), field),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@school.edu.ye"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn save_needs_name_and_email_only() {
        let mut state = FormState { name: "A".to_owned(), email: "not an email".to_owned(), ..FormState::default() };
        assert!(check_save(&state).is_ok());

        state.email = "   ".to_owned();
        assert!(check_save(&state).is_err());

        state.email = "a@b.c".to_owned();
        state.name = "\t".to_owned();
        assert!(check_save(&state).is_err());
    }

    #[test]
    fn submit_checks_run_in_form_order() {
        let mut state = complete();
        state.name = " ".to_owned();
        state.email = "broken".to_owned();
        assert_eq!(failure(&state), ("Name is required!".to_owned(), Some(Field::Name)));

        state.name = "A".to_owned();
        assert_eq!(failure(&state), ("Enter a valid email address!".to_owned(), Some(Field::Email)));

        state.email = "a@b.c".to_owned();
        state.password = "12345".to_owned();
        assert_eq!(
            failure(&state),
            ("Password must be at least 6 characters!".to_owned(), Some(Field::Password))
        );

        state.password = "123456".to_owned();
        state.gender = None;
        assert_eq!(failure(&state), ("Please select a gender!".to_owned(), None));

        state.gender = Some(Gender::Male);
        state.country = None;
        assert_eq!(failure(&state), ("Please select a country!".to_owned(), Some(Field::Country)));

        state.country = Some(Country::Syria);
        state.favorite_color = None;
        assert_eq!(failure(&state), ("Please select your favorite color!".to_owned(), None));
    }

    #[test]
    fn password_length_counts_characters() {
        let mut state = complete();
        state.password = "ééééé".to_owned();
        assert!(check_submit(&state).is_err());

        state.password = "éééééé".to_owned();
        assert!(check_submit(&state).is_ok());
    }

    #[test]
    fn summary_lists_six_values_without_password() {
        let state = complete();
        let dates = DateFormat::default();
        let summary = check_submit(&state).expect("valid").summary(&dates);

        assert_eq!(
            summary,
            "Name: A\nEmail: a@b.c\nGender: Female\nBirthdate: 09/03/2001\nCountry: Oman\nFavorite Color: Red"
        );
        assert!(!summary.contains("secret"));
    }
}
