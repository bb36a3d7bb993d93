use base64::prelude::{BASE64_STANDARD, Engine as _};
use dioxus::prelude::*;
use rfd::FileDialog;
use sreg_registration::domain::FavoriteColor;
use sreg_registration::{Field, FileFilter, FormState, FormView, Notice, NoticeLevel, Photo};
use std::path::PathBuf;
use tracing::{debug, info};

/// Edge of the square photo box, in CSS pixels.
pub const PHOTO_BOX: u32 = 120;

/// [`FormView`] over the form's signals. Notices land in a banner; the file chooser is native.
#[derive(Debug)]
pub struct DesktopView {
    form: Signal<FormState>,
    notice: Signal<Option<Notice>>,
    picked_color: Option<FavoriteColor>,
}

impl DesktopView {
    #[must_use]
    pub const fn new(form: Signal<FormState>, notice: Signal<Option<Notice>>) -> Self {
        Self { form, notice, picked_color: None }
    }

    /// The color input reports its value before the controller asks for it.
    #[must_use]
    pub fn with_picked_color(mut self, color: Option<FavoriteColor>) -> Self {
        self.picked_color = color;
        self
    }
}

impl FormView for DesktopView {
    fn snapshot(&self) -> FormState {
        self.form.cloned()
    }

    fn apply(&mut self, state: FormState) {
        self.form.set(state);
    }

    fn notify(&mut self, notice: Notice) {
        info!(title = %notice.title, body = %notice.body, "Notice");
        self.notice.set(Some(notice));
    }

    fn focus(&mut self, field: Field) {
        let script = format!("document.getElementById('{}')?.focus();", field.id());
        spawn(async move {
            if let Err(err) = document::eval(&script).await {
                debug!(error = ?err, "Focus script failed");
            }
        });
    }

    fn choose_color(&mut self) -> Option<FavoriteColor> {
        self.picked_color.take()
    }

    fn choose_image_file(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        let path = FileDialog::new().add_filter(filter.name, filter.extensions).pick_file()?;
        if filter.matches(&path) {
            Some(path)
        } else {
            debug!(path = %path.display(), filter = filter.name, "Picked file is not an image type");
            None
        }
    }
}

/// CSS class of the banner for a notice level.
#[must_use]
pub const fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice info",
        NoticeLevel::Warning => "notice warning",
        NoticeLevel::Error => "notice error",
    }
}

/// A `data:` URL of the photo scaled to fit the photo box.
#[must_use]
pub fn photo_data_url(photo: &Photo) -> Option<String> {
    let preview = Photo::from(photo.image().thumbnail(PHOTO_BOX * 2, PHOTO_BOX * 2));
    match preview.encode_jpeg() {
        Ok(jpeg) => Some(format!("data:image/jpeg;base64,{}", BASE64_STANDARD.encode(jpeg))),
        Err(err) => {
            debug!(error = %err, "Photo preview unavailable");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    #[test]
    fn preview_is_a_jpeg_data_url() {
        let photo = Photo::from(DynamicImage::ImageRgb8(RgbImage::from_pixel(800, 400, Rgb([200, 30, 30]))));
        let url = photo_data_url(&photo).expect("preview");

        let encoded = url.strip_prefix("data:image/jpeg;base64,").expect("jpeg data url");
        let bytes = BASE64_STANDARD.decode(encoded).expect("base64");
        let preview = Photo::decode(&bytes).expect("decodes");
        assert_eq!((preview.width(), preview.height()), (PHOTO_BOX * 2, PHOTO_BOX));
    }

    #[test]
    fn notice_levels_have_distinct_styles() {
        assert_eq!(notice_class(NoticeLevel::Info), "notice info");
        assert_eq!(notice_class(NoticeLevel::Warning), "notice warning");
        assert_eq!(notice_class(NoticeLevel::Error), "notice error");
    }
}
