//! Model a color as a `#rrggbb` hexadecimal string.

use std::{fmt, ops::Deref, str::FromStr};

use crate::{
    color::{Color, Space},
    convert,
    error::{Error, Result},
    models::{Cmyk, Hsl, Hsv, Hwb, Model, Rgb},
};

/// Returns true if `hex` is `#` followed by exactly 6 hexadecimal digits, in
/// either case. Nothing is normalized or repaired.
pub fn is_color_valid(hex: &str) -> bool {
    match hex.as_bytes() {
        [b'#', digits @ ..] => digits.len() == 6 && digits.iter().all(u8::is_ascii_hexdigit),
        _ => false,
    }
}

/// A color formatted as `#` followed by 2 hexadecimal digits per channel.
///
/// Parsing with [`FromStr`] only accepts valid strings. Values produced by
/// [`Rgb::to_hex`] are not checked and hold out-of-range digit groups when
/// the channels were outside `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex(String);

impl Hex {
    /// Wrap an already formatted string without validating it.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// The formatted string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the color and return the formatted string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if the string holds exactly 6 hexadecimal digits.
    pub fn is_valid(&self) -> bool {
        is_color_valid(&self.0)
    }

    /// Parse the channels into red, green and blue.
    pub fn to_rgb(&self) -> Result<Rgb> {
        convert::hex_to_rgb(&self.0)
    }

    /// Parse into the HSL notation.
    pub fn to_hsl(&self) -> Result<Hsl> {
        convert::hex_to_hsl(&self.0)
    }

    /// Parse into the HSV notation.
    pub fn to_hsv(&self) -> Result<Hsv> {
        convert::hex_to_hsv(&self.0)
    }

    /// Parse into the HWB notation.
    pub fn to_hwb(&self) -> Result<Hwb> {
        convert::hex_to_hwb(&self.0)
    }

    /// Parse into the CMYK model.
    pub fn to_cmyk(&self) -> Result<Cmyk> {
        convert::hex_to_cmyk(&self.0)
    }
}

impl Model for Hex {
    const SPACE: Space = Space::Hex;

    fn to_color(&self) -> Color {
        Color::Hex(self.clone())
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if is_color_valid(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(Error::InvalidFormat(s.to_owned()))
        }
    }
}

impl TryFrom<&str> for Hex {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl Deref for Hex {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_colors() {
        assert!(is_color_valid("#FF0000"));
        assert!(is_color_valid("#ff0000"));
        assert!(is_color_valid("#aBc123"));
        assert!(is_color_valid("#000000"));
    }

    #[test]
    fn invalid_colors() {
        assert!(!is_color_valid("#ff00"));
        assert!(!is_color_valid("red"));
        assert!(!is_color_valid("#GG0000"));
        assert!(!is_color_valid("#f00"));
        assert!(!is_color_valid("ff0000"));
        assert!(!is_color_valid("#ff000000"));
        assert!(!is_color_valid(" #ff0000"));
        assert!(!is_color_valid("#ff0000 "));
        assert!(!is_color_valid("##ff000"));
        assert!(!is_color_valid("#ff00é"));
        assert!(!is_color_valid(""));
        assert!(!is_color_valid("#"));
    }

    #[test]
    fn parse_keeps_input_verbatim() {
        let hex: Hex = "#ABCDEF".parse().unwrap();
        assert_eq!(hex.as_str(), "#ABCDEF");
        assert_eq!(hex.to_string(), "#ABCDEF");
        assert!(hex.is_valid());
        assert_eq!(hex.into_string(), "#ABCDEF");
    }

    #[test]
    fn parse_rejects_invalid_input() {
        assert_eq!(
            "#abc".parse::<Hex>(),
            Err(Error::InvalidFormat("#abc".into()))
        );
        assert_eq!(
            Hex::try_from("rgb(0, 0, 0)"),
            Err(Error::InvalidFormat("rgb(0, 0, 0)".into()))
        );
    }

    #[test]
    fn unchecked_values_can_be_invalid() {
        let hex = Rgb::new(2.0, 0.0, 0.0).to_hex();
        assert!(!hex.is_valid());
        assert_eq!(hex.to_rgb(), Err(Error::InvalidFormat(hex.to_string())));
    }

    #[test]
    fn derefs_to_str() {
        let hex = Hex::from(Rgb::new(0.0, 0.0, 1.0));
        assert!(hex.starts_with('#'));
        assert_eq!(hex.len(), 7);
        assert_eq!(AsRef::<str>::as_ref(&hex), "#0000ff");
    }
}
