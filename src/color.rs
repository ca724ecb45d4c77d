//! A [`Color`] holds a color that was specified in any of the supported
//! models.

use crate::models::{Cmyk, Hex, Hsl, Hsv, Hwb, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// The color models and notations supported for conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels. The hub every other model converts
    /// through when there is no direct formula.
    Rgb = 0,
    /// Hue, saturation and lightness.
    Hsl = 1,
    /// Hue, saturation and value.
    Hsv = 2,
    /// Hue, whiteness and blackness.
    Hwb = 3,
    /// Cyan, magenta, yellow and key (black), the subtractive model.
    Cmyk = 4,
    /// A `#rrggbb` string with 8 bits per channel.
    Hex = 5,
}

impl Space {
    /// All the supported spaces.
    pub const ALL: [Space; 6] = [
        Space::Rgb,
        Space::Hsl,
        Space::Hsv,
        Space::Hwb,
        Space::Cmyk,
        Space::Hex,
    ];
}

/// A color in any of the supported models.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// See [`Rgb`].
    Rgb(Rgb),
    /// See [`Hsl`].
    Hsl(Hsl),
    /// See [`Hsv`].
    Hsv(Hsv),
    /// See [`Hwb`].
    Hwb(Hwb),
    /// See [`Cmyk`].
    Cmyk(Cmyk),
    /// See [`Hex`].
    Hex(Hex),
}

impl Color {
    /// The space the color is currently specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::Hsl(_) => Space::Hsl,
            Color::Hsv(_) => Space::Hsv,
            Color::Hwb(_) => Space::Hwb,
            Color::Cmyk(_) => Space::Cmyk,
            Color::Hex(_) => Space::Hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn color_reports_its_space() {
        assert_eq!(Color::from(Rgb::new(0.1, 0.2, 0.3)).space(), Space::Rgb);
        assert_eq!(Color::from(Hsl::new(0.1, 0.2, 0.3)).space(), Space::Hsl);
        assert_eq!(Color::from(Hsv::new(0.1, 0.2, 0.3)).space(), Space::Hsv);
        assert_eq!(Color::from(Hwb::new(0.1, 0.2, 0.3)).space(), Space::Hwb);
        assert_eq!(
            Color::from(Cmyk::new(0.1, 0.2, 0.3, 0.4)).space(),
            Space::Cmyk
        );
        let hex: Hex = "#102030".parse().unwrap();
        assert_eq!(Color::from(hex).space(), Space::Hex);
    }

    #[test]
    fn model_space_matches_color_space() {
        for color in [
            Rgb::new(0.1, 0.2, 0.3).to_color(),
            Hsl::new(0.1, 0.2, 0.3).to_color(),
            Hsv::new(0.1, 0.2, 0.3).to_color(),
            Hwb::new(0.1, 0.2, 0.3).to_color(),
            Cmyk::new(0.1, 0.2, 0.3, 0.4).to_color(),
        ] {
            let expected = match color {
                Color::Rgb(_) => Rgb::SPACE,
                Color::Hsl(_) => Hsl::SPACE,
                Color::Hsv(_) => Hsv::SPACE,
                Color::Hwb(_) => Hwb::SPACE,
                Color::Cmyk(_) => Cmyk::SPACE,
                Color::Hex(_) => Hex::SPACE,
            };
            assert_eq!(color.space(), expected);
        }
    }

    #[test]
    fn all_spaces_are_listed_once() {
        for (index, space) in Space::ALL.iter().enumerate() {
            assert_eq!(*space as usize, index);
        }
    }
}
