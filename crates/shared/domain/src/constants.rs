//! Literal strings shared by the record file format and the form.

/// Number of lines in a record file. Fewer lines means the file is corrupt.
pub const RECORD_LINE_COUNT: usize = 8;

/// Line 8 of a record saved without a photo.
pub const NO_IMAGE: &str = "NoImage";

/// Color line of a record saved without a chosen color, and the form's empty color label.
pub const NO_COLOR_SELECTED: &str = "No Color Selected";

/// Prefix of the color label once a color has been chosen.
pub const COLOR_LABEL_PREFIX: &str = "Selected Color: ";

pub const DEFAULT_RECORD_FILE: &str = "student_data.txt";
pub const DEFAULT_PHOTO_FILE: &str = "student_picture.jpg";

/// Short date format used in the record file and in the summary (`chrono` syntax).
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// File extensions offered by the photo chooser.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];
