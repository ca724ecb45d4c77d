//! Model a color with the HSV notation.

use crate::{
    color::Component,
    convert,
    models::{Cmyk, Hex, Hsl, Hwb, Rgb},
};

tinct_macros::gen_model! {
    /// A color specified with the HSV notation.
    pub struct Hsv {
        /// The hue as a fraction of a full turn.
        h: Component,
        /// The saturation.
        s: Component,
        /// The value.
        v: Component,
    }
}

impl Hsv {
    /// Convert to red, green and blue channels.
    pub fn to_rgb(&self) -> Rgb {
        convert::hsv_to_rgb(self)
    }

    /// Convert to the HSL notation, keeping the hue.
    pub fn to_hsl(&self) -> Hsl {
        convert::hsv_to_hsl(self)
    }

    /// Convert to the HWB notation, keeping the hue.
    pub fn to_hwb(&self) -> Hwb {
        convert::hsv_to_hwb(self)
    }

    /// Convert to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        convert::hsv_to_cmyk(self)
    }

    /// Format as a `#rrggbb` string.
    pub fn to_hex(&self) -> Hex {
        convert::hsv_to_hex(self)
    }
}

impl From<Rgb> for Hsv {
    fn from(value: Rgb) -> Self {
        value.to_hsv()
    }
}

impl From<Hsl> for Hsv {
    fn from(value: Hsl) -> Self {
        value.to_hsv()
    }
}

impl From<Hwb> for Hsv {
    fn from(value: Hwb) -> Self {
        value.to_hsv()
    }
}
