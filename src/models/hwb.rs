//! Model a color with the HWB notation.

use crate::{
    color::Component,
    convert,
    models::{Cmyk, Hex, Hsl, Hsv, Rgb},
};

tinct_macros::gen_model! {
    /// A color specified with the HWB notation.
    pub struct Hwb {
        /// The hue as a fraction of a full turn.
        h: Component,
        /// The whiteness.
        w: Component,
        /// The blackness.
        b: Component,
    }
}

impl Hwb {
    /// Convert to red, green and blue channels.
    pub fn to_rgb(&self) -> Rgb {
        convert::hwb_to_rgb(self)
    }

    /// Convert to the HSL notation, keeping the hue.
    pub fn to_hsl(&self) -> Hsl {
        convert::hwb_to_hsl(self)
    }

    /// Convert to the HSV notation, keeping the hue. Pure black (a blackness
    /// of 1) has no defined saturation.
    pub fn to_hsv(&self) -> Hsv {
        convert::hwb_to_hsv(self)
    }

    /// Convert to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        convert::hwb_to_cmyk(self)
    }

    /// Format as a `#rrggbb` string.
    pub fn to_hex(&self) -> Hex {
        convert::hwb_to_hex(self)
    }
}

impl From<Rgb> for Hwb {
    fn from(value: Rgb) -> Self {
        value.to_hwb()
    }
}

impl From<Hsl> for Hwb {
    fn from(value: Hsl) -> Self {
        value.to_hwb()
    }
}

impl From<Hsv> for Hwb {
    fn from(value: Hsv) -> Self {
        value.to_hwb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, models::Model, Space};

    #[test]
    fn as_model() {
        let hwb = Hwb::new(0.1, 0.2, 0.3);
        assert_eq!(hwb.h, 0.1);
        assert_eq!(hwb.w, 0.2);
        assert_eq!(hwb.b, 0.3);
        assert_eq!(Hwb::SPACE, Space::Hwb);
        assert_eq!(hwb.to_color(), Color::Hwb(hwb));
    }

    #[test]
    fn black_has_no_hsv_saturation() {
        assert!(Hwb::new(0.0, 0.0, 1.0).to_hsv().s.is_nan());
    }
}
