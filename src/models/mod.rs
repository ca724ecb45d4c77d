//! Models are structs that represent a color in one of the supported
//! notations. Conversions are implemented as methods on each model and as
//! free functions in [`crate::convert`].

use crate::color::{Color, Space};

mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod hwb;
mod rgb;

pub use cmyk::Cmyk;
pub use hex::{is_color_valid, Hex};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use rgb::Rgb;

/// A trait implemented for color models that can be converted to a generic
/// [`Color`].
pub trait Model {
    /// The space this model represents.
    const SPACE: Space;

    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;
}
