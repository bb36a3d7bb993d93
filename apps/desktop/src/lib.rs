//! # Student Registration Desktop
//!
//! A Dioxus desktop window around [`sreg_registration::RegistrationController`].
//! The controller is provided as root context; [`form::RegistrationForm`] reads it back
//! and drives it through [`view::DesktopView`].

pub mod form;
pub mod view;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use sreg_registration::RegistrationController;
use sreg_registration::domain::config::WindowConfig;

const FORM_STYLE: &str = include_str!("../assets/form.css");

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, controller: RegistrationController) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_resizable(false)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{FORM_STYLE}</style>"#
        ));

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(controller.clone()))
            .launch(form::RegistrationForm);
    }
}
