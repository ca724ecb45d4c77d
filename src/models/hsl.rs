//! Model a color with the HSL notation.

use crate::{
    color::Component,
    convert,
    models::{Cmyk, Hex, Hsv, Hwb, Rgb},
};

tinct_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue as a fraction of a full turn.
        h: Component,
        /// The saturation.
        s: Component,
        /// The lightness.
        l: Component,
    }
}

impl Hsl {
    /// Convert to red, green and blue channels.
    pub fn to_rgb(&self) -> Rgb {
        convert::hsl_to_rgb(self)
    }

    /// Convert to the HSV notation, keeping the hue.
    pub fn to_hsv(&self) -> Hsv {
        convert::hsl_to_hsv(self)
    }

    /// Convert to the HWB notation, keeping the hue.
    pub fn to_hwb(&self) -> Hwb {
        convert::hsl_to_hwb(self)
    }

    /// Convert to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        convert::hsl_to_cmyk(self)
    }

    /// Format as a `#rrggbb` string.
    pub fn to_hex(&self) -> Hex {
        convert::hsl_to_hex(self)
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

impl From<Hsv> for Hsl {
    fn from(value: Hsv) -> Self {
        value.to_hsl()
    }
}

impl From<Hwb> for Hsl {
    fn from(value: Hwb) -> Self {
        value.to_hsl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Color, models::Model, Space};

    #[test]
    fn as_model() {
        let hsl = Hsl::new(0.1, 0.2, 0.3);
        assert_eq!(hsl.to_array(), [hsl.h, hsl.s, hsl.l]);
        assert_eq!(Hsl::SPACE, Space::Hsl);
        assert_eq!(Color::from(hsl), Color::Hsl(hsl));
    }

    #[test]
    fn hue_survives_direct_conversions() {
        let hsl = Hsl::new(0.3, 0.4, 0.6);
        assert_eq!(hsl.to_hsv().h, 0.3);
        assert_eq!(hsl.to_hwb().h, 0.3);
        assert_eq!(Hsl::from(hsl.to_hwb()).h, 0.3);
    }

    #[test]
    fn pure_red_formats_as_hex() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_hex().as_str(), "#ff0000");
        let cmyk = Hsl::new(0.0, 1.0, 0.5).to_cmyk();
        assert_component_eq!(cmyk.c, 0.0);
        assert_component_eq!(cmyk.m, 1.0);
        assert_component_eq!(cmyk.y, 1.0);
        assert_component_eq!(cmyk.k, 0.0);
    }
}
