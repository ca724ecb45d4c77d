//! Model a color with red, green and blue channels.

use crate::{
    color::Component,
    convert,
    models::{Cmyk, Hex, Hsl, Hsv, Hwb},
};

tinct_macros::gen_model! {
    /// A color specified with red, green and blue channels in `[0, 1]`.
    pub struct Rgb {
        /// The red channel.
        r: Component,
        /// The green channel.
        g: Component,
        /// The blue channel.
        b: Component,
    }
}

impl Rgb {
    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        convert::rgb_to_hsl(self)
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        convert::rgb_to_hsv(self)
    }

    /// Convert to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        convert::rgb_to_hwb(self)
    }

    /// Convert to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        convert::rgb_to_cmyk(self)
    }

    /// Format as a `#rrggbb` string. Channels are not clamped.
    pub fn to_hex(&self) -> Hex {
        convert::rgb_to_hex(self)
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}

impl From<Hsv> for Rgb {
    fn from(value: Hsv) -> Self {
        value.to_rgb()
    }
}

impl From<Hwb> for Rgb {
    fn from(value: Hwb) -> Self {
        value.to_rgb()
    }
}

impl From<Cmyk> for Rgb {
    fn from(value: Cmyk) -> Self {
        value.to_rgb()
    }
}

impl TryFrom<&Hex> for Rgb {
    type Error = crate::Error;

    fn try_from(value: &Hex) -> Result<Self, Self::Error> {
        value.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, models::Model, Space};

    #[test]
    fn basic_rgb_colors() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(rgb.r, 0.1);
        assert_eq!(rgb.g, 0.2);
        assert_eq!(rgb.b, 0.3);
        assert_eq!(rgb.to_array(), [0.1, 0.2, 0.3]);
        assert_eq!(Rgb::from([0.1, 0.2, 0.3]), rgb);
        assert_eq!(Rgb::SPACE, Space::Rgb);
        assert_eq!(rgb.to_color(), Color::Rgb(rgb));
    }

    #[test]
    fn from_other_models() {
        assert_eq!(Rgb::from(Hsl::new(0.0, 0.0, 0.5)), Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(Rgb::from(Hsv::new(0.0, 0.0, 0.5)), Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(Rgb::from(Hwb::new(0.0, 0.0, 1.0)), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(
            Rgb::from(Cmyk::new(0.0, 0.0, 0.0, 0.0)),
            Rgb::new(1.0, 1.0, 1.0)
        );

        let hex: Hex = "#ffffff".parse().unwrap();
        assert_eq!(Rgb::try_from(&hex), Ok(Rgb::new(1.0, 1.0, 1.0)));
    }
}
