//! Model a color with the subtractive CMYK model.

use crate::{
    color::Component,
    convert,
    models::{Hex, Hsl, Hsv, Hwb, Rgb},
};

tinct_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) channels.
    pub struct Cmyk {
        /// The cyan channel.
        c: Component,
        /// The magenta channel.
        m: Component,
        /// The yellow channel.
        y: Component,
        /// The key (black) channel.
        k: Component,
    }
}

impl Cmyk {
    /// Convert to red, green and blue channels.
    pub fn to_rgb(&self) -> Rgb {
        convert::cmyk_to_rgb(self)
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        convert::cmyk_to_hsl(self)
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        convert::cmyk_to_hsv(self)
    }

    /// Convert to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        convert::cmyk_to_hwb(self)
    }

    /// Format as a `#rrggbb` string.
    pub fn to_hex(&self) -> Hex {
        convert::cmyk_to_hex(self)
    }
}

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        value.to_cmyk()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Model, Space};

    #[test]
    fn four_channels() {
        let cmyk = Cmyk::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(cmyk.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Cmyk::from([0.1, 0.2, 0.3, 0.4]), cmyk);
        assert_eq!(Cmyk::SPACE, Space::Cmyk);
    }

    #[test]
    fn full_key_is_black() {
        assert_eq!(Cmyk::new(0.3, 0.6, 0.9, 1.0).to_hex().as_str(), "#000000");
        assert_eq!(Cmyk::from(Rgb::new(0.0, 0.0, 0.0)), Cmyk::new(0.0, 0.0, 0.0, 1.0));
    }
}
