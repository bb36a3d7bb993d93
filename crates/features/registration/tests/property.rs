pub mod fixtures;

use chrono::NaiveDate;
use fixtures::{ScriptedView, controller_in};
use proptest::prelude::*;
use sreg_registration::FormState;
use sreg_registration::domain::{Country, FavoriteColor, Gender, Rgb};
use strum::IntoEnumIterator;
use tempfile::tempdir;

fn single_line_text() -> impl Strategy<Value = String> {
    "[^\r\n]{1,24}".prop_filter("must not be blank", |s| !s.trim().is_empty())
}

fn gender() -> impl Strategy<Value = Option<Gender>> {
    prop_oneof![Just(None), Just(Some(Gender::Male)), Just(Some(Gender::Female)), Just(Some(Gender::Other))]
}

fn country() -> impl Strategy<Value = Option<Country>> {
    proptest::option::of(proptest::sample::select(Country::iter().collect::<Vec<_>>()))
}

fn color() -> impl Strategy<Value = Option<FavoriteColor>> {
    proptest::option::of(any::<(u8, u8, u8)>().prop_map(|(r, g, b)| FavoriteColor::from_rgb(Rgb::new(r, g, b))))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn save_then_load_restores_the_form(
        name in single_line_text(),
        email in single_line_text(),
        password in single_line_text(),
        gender in gender(),
        days in 0u64..40_000,
        country in country(),
        favorite_color in color(),
    ) {
        let dir = tempdir().unwrap();
        let controller = controller_in(dir.path());
        let birthdate = NaiveDate::from_ymd_opt(1920, 1, 1).unwrap() + chrono::Days::new(days);

        let original = FormState {
            name,
            email,
            password,
            gender,
            birthdate,
            country,
            favorite_color,
            ..FormState::default()
        };
        controller.save(&mut ScriptedView::with_state(original.clone())).unwrap();

        let mut view = ScriptedView::default();
        controller.load(&mut view).unwrap();

        let expected_gender = match original.gender {
            Some(Gender::Male) => Gender::Male,
            Some(Gender::Female) => Gender::Female,
            _ => Gender::Other,
        };
        prop_assert_eq!(&view.state.name, &original.name);
        prop_assert_eq!(&view.state.email, &original.email);
        prop_assert_eq!(&view.state.password, &original.password);
        prop_assert_eq!(view.state.gender, Some(expected_gender));
        prop_assert_eq!(view.state.birthdate, original.birthdate);
        prop_assert_eq!(view.state.country, original.country);
        prop_assert_eq!(&view.state.favorite_color, &original.favorite_color);
    }
}
