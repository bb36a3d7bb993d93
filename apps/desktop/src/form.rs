use crate::view::{DesktopView, notice_class, photo_data_url};
use chrono::NaiveDate;
use dioxus::prelude::*;
use sreg_registration::domain::{Country, FavoriteColor, Gender, Rgb};
use sreg_registration::{Field, FormState, Notice, RegistrationController};
use std::str::FromStr;
use strum::IntoEnumIterator;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Runs one controller operation against the form signals.
///
/// Outcomes reach the user through the notice banner, so the returned value is dropped.
fn run<T, E>(
    controller: &RegistrationController,
    form: Signal<FormState>,
    mut notice: Signal<Option<Notice>>,
    operation: impl FnOnce(&RegistrationController, &mut DesktopView) -> Result<T, E>,
) {
    notice.set(None);
    let _ = operation(controller, &mut DesktopView::new(form, notice));
}

#[component]
pub fn RegistrationForm() -> Element {
    let controller = use_context::<RegistrationController>();
    let mut form = use_signal(FormState::default);
    let mut notice = use_signal(|| None::<Notice>);

    let photo = use_memo(move || form.read().photo.clone());
    let photo_src = use_memo(move || photo.read().as_ref().and_then(photo_data_url));
    let color_hex = use_memo(move || {
        form.read().color_preview().map_or_else(|| "#000000".to_owned(), Rgb::to_hex)
    });

    let on_register = {
        let controller = controller.clone();
        move |_| run(&controller, form, notice, |c, view| c.submit(view))
    };
    let on_reset = {
        let controller = controller.clone();
        move |_| {
            notice.set(None);
            controller.reset(&mut DesktopView::new(form, notice));
        }
    };
    let on_save = {
        let controller = controller.clone();
        move |_| run(&controller, form, notice, |c, view| c.save(view))
    };
    let on_load = {
        let controller = controller.clone();
        move |_| run(&controller, form, notice, |c, view| c.load(view))
    };
    let on_upload = {
        let controller = controller.clone();
        move |_| run(&controller, form, notice, |c, view| c.upload_photo(view))
    };
    let on_color = move |evt: FormEvent| {
        let picked = Rgb::from_hex(&evt.value()).map(FavoriteColor::from_rgb);
        let mut view = DesktopView::new(form, notice).with_picked_color(picked);
        controller.pick_color(&mut view);
    };

    let state = form.read();
    let birthdate = state.birthdate.format(DATE_INPUT_FORMAT).to_string();
    let selected_country: &'static str = state.country.map_or("", Into::into);
    let color_label = state.color_label();
    let label_style = state
        .color_preview()
        .map_or_else(String::new, |rgb| format!("background-color: {rgb};"));

    rsx! {
        if let Some(current) = notice() {
            div { class: notice_class(current.level), role: "alert",
                strong { "{current.title}" }
                span { "{current.body}" }
                button { class: "dismiss", onclick: move |_| notice.set(None), "Dismiss" }
            }
        }
        div { class: "form",
            label { r#for: Field::Name.id(), "Name:" }
            input {
                id: Field::Name.id(),
                r#type: "text",
                value: "{state.name}",
                oninput: move |evt| form.write().name = evt.value(),
            }

            label { r#for: Field::Email.id(), "Email:" }
            input {
                id: Field::Email.id(),
                r#type: "email",
                value: "{state.email}",
                oninput: move |evt| form.write().email = evt.value(),
            }

            label { r#for: Field::Password.id(), "Password:" }
            input {
                id: Field::Password.id(),
                r#type: "password",
                value: "{state.password}",
                oninput: move |evt| form.write().password = evt.value(),
            }

            label { "Gender:" }
            div { id: Field::Gender.id(), class: "gender",
                for gender in Gender::iter() {
                    label { key: "{gender}",
                        input {
                            r#type: "radio",
                            name: "gender",
                            checked: state.gender == Some(gender),
                            onchange: move |_| form.write().gender = Some(gender),
                        }
                        "{gender}"
                    }
                }
            }

            label { r#for: Field::Birthdate.id(), "Birthdate:" }
            input {
                id: Field::Birthdate.id(),
                r#type: "date",
                value: "{birthdate}",
                oninput: move |evt| {
                    if let Ok(date) = NaiveDate::parse_from_str(&evt.value(), DATE_INPUT_FORMAT) {
                        form.write().birthdate = date;
                    }
                },
            }

            label { r#for: Field::Country.id(), "Country:" }
            select {
                id: Field::Country.id(),
                value: selected_country,
                onchange: move |evt| form.write().country = Country::from_str(&evt.value()).ok(),
                option { value: "", selected: state.country.is_none(), "" }
                for country in Country::iter() {
                    option {
                        key: "{country}",
                        value: "{country}",
                        selected: state.country == Some(country),
                        "{country}"
                    }
                }
            }

            label { r#for: Field::FavoriteColor.id(), "Favorite Color:" }
            div { class: "color",
                input {
                    id: Field::FavoriteColor.id(),
                    r#type: "color",
                    title: "Choose Color",
                    value: "{color_hex}",
                    oninput: on_color,
                }
                span { class: "color-label", style: "{label_style}", "{color_label}" }
            }

            div { id: Field::Photo.id(), class: "photo",
                if let Some(src) = photo_src() {
                    img { src: "{src}", alt: "Student photo" }
                }
            }

            div { class: "buttons",
                button { onclick: on_register, "Register" }
                button { onclick: on_reset, "Reset" }
                button { onclick: on_save, "Save Data" }
                button { onclick: on_load, "Load Data" }
                button { onclick: on_upload, "Upload Picture" }
            }

            div { class: "result", "{state.result}" }
        }
    }
}
