use crate::error::RegistrationError;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// A decoded photo held by the form. Cheap to clone.
#[derive(Clone)]
pub struct Photo(Arc<DynamicImage>);

impl Photo {
    /// Decodes an in-memory image, guessing the format from its magic bytes.
    ///
    /// # Errors
    /// Returns the decoder's [`ImageError`] for unknown or malformed data.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        image::load_from_memory(bytes).map(Self::from)
    }

    /// Reads and decodes an image file. The format is guessed from content, not extension.
    ///
    /// # Errors
    /// Returns [`ImageError::IoError`] when the file cannot be read, or the decoder's error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let image = ImageReader::open(path.as_ref())
            .and_then(ImageReader::with_guessed_format)
            .map_err(ImageError::IoError)?
            .decode()?;
        Ok(Self::from(image))
    }

    /// Encodes as baseline JPEG. Alpha is dropped.
    ///
    /// # Errors
    /// Returns [`RegistrationError::ImageEncode`] if the encoder rejects the image.
    pub fn encode_jpeg(&self) -> Result<Vec<u8>, RegistrationError> {
        let rgb = DynamicImage::ImageRgb8(self.0.to_rgb8());
        let mut buffer = Cursor::new(Vec::new());
        rgb.write_to(&mut buffer, ImageFormat::Jpeg).map_err(|err| {
            RegistrationError::ImageEncode { message: err.to_string().into(), context: None }
        })?;
        Ok(buffer.into_inner())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.0
    }
}

impl From<DynamicImage> for Photo {
    fn from(image: DynamicImage) -> Self {
        Self(Arc::new(image))
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("color", &self.0.color())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample() -> Photo {
        Photo::from(DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 128]))))
    }

    #[test]
    fn jpeg_encoding_drops_alpha_and_decodes_back() {
        let photo = sample();
        let bytes = photo.encode_jpeg().expect("encode");
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let decoded = Photo::decode(&bytes).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        assert!(!decoded.image().color().has_alpha());
    }

    #[test]
    fn oversized_images_fail_to_encode() {
        let wide = Photo::from(DynamicImage::ImageRgb8(image::RgbImage::new(70_000, 1)));
        let err = wide.encode_jpeg().expect_err("jpeg dimensions are 16-bit");
        assert!(matches!(err, RegistrationError::ImageEncode { .. }));
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        assert!(Photo::decode(b"plain text, not a picture").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Photo::open("/definitely/not/here.png").expect_err("missing");
        assert!(matches!(err, ImageError::IoError(_)));
    }
}
