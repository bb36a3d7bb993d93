use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional, case-insensitive).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Basic named colors, first spelling wins when mapping RGB back to a name.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("Black", Rgb::new(0, 0, 0)),
    ("White", Rgb::new(255, 255, 255)),
    ("Red", Rgb::new(255, 0, 0)),
    ("Lime", Rgb::new(0, 255, 0)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("Aqua", Rgb::new(0, 255, 255)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("Fuchsia", Rgb::new(255, 0, 255)),
    ("Silver", Rgb::new(192, 192, 192)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("Maroon", Rgb::new(128, 0, 0)),
    ("Olive", Rgb::new(128, 128, 0)),
    ("Green", Rgb::new(0, 128, 0)),
    ("Purple", Rgb::new(128, 0, 128)),
    ("Teal", Rgb::new(0, 128, 128)),
    ("Navy", Rgb::new(0, 0, 128)),
    ("Orange", Rgb::new(255, 165, 0)),
    ("Pink", Rgb::new(255, 192, 203)),
    ("Brown", Rgb::new(165, 42, 42)),
    ("LightBlue", Rgb::new(173, 216, 230)),
];

/// A chosen favorite color: the name shown to the user and, when known, its RGB value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteColor {
    name: String,
    rgb: Option<Rgb>,
}

impl FavoriteColor {
    /// Names a picked RGB value: a basic color name on an exact match, otherwise `#rrggbb`.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let name = NAMED_COLORS
            .iter()
            .find(|(_, known)| *known == rgb)
            .map_or_else(|| rgb.to_hex(), |(name, _)| (*name).to_owned());
        Self { name, rgb: Some(rgb) }
    }

    /// Rebuilds a color from a stored name.
    ///
    /// Any text is accepted as a name. The RGB value is filled in when the name is a
    /// `#rrggbb` string or a known color name (case-insensitive).
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let rgb = Rgb::from_hex(&name).or_else(|| {
            NAMED_COLORS.iter().find(|(known, _)| known.eq_ignore_ascii_case(&name)).map(|(_, rgb)| *rgb)
        });
        Self { name, rgb }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn rgb(&self) -> Option<Rgb> {
        self.rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Rgb::from_hex("#FF8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("#ff80"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("#ffé000"), None);
    }

    #[test]
    fn picked_colors_prefer_basic_names() {
        assert_eq!(FavoriteColor::from_rgb(Rgb::new(255, 0, 0)).name(), "Red");
        assert_eq!(FavoriteColor::from_rgb(Rgb::new(0, 255, 255)).name(), "Cyan");
        assert_eq!(FavoriteColor::from_rgb(Rgb::new(18, 52, 86)).name(), "#123456");
    }

    #[test]
    fn stored_names_resolve_rgb_when_possible() {
        assert_eq!(FavoriteColor::from_name("navy").rgb(), Some(Rgb::new(0, 0, 128)));
        assert_eq!(FavoriteColor::from_name("#123456").rgb(), Some(Rgb::new(18, 52, 86)));

        let custom = FavoriteColor::from_name("Sunset Glow");
        assert_eq!(custom.name(), "Sunset Glow");
        assert_eq!(custom.rgb(), None);
    }

    #[test]
    fn names_survive_a_round_trip() {
        let picked = FavoriteColor::from_rgb(Rgb::new(1, 2, 3));
        assert_eq!(FavoriteColor::from_name(picked.name()), picked);

        let named = FavoriteColor::from_rgb(Rgb::new(0, 128, 0));
        assert_eq!(FavoriteColor::from_name(named.name()), named);
    }
}
