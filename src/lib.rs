//! tinct converts colors between the RGB, HSL, HSV, HWB and CMYK models and
//! 6-digit hexadecimal strings.
//!
//! Every channel is normalized to `[0, 1]`, including hue, which is stored as
//! a fraction of a full turn rather than in degrees. RGB is the hub: pairs
//! without a direct formula are converted through it.
//!
//! ```rust
//! use tinct::{hex_to_hsl, Rgb};
//!
//! let hsl = hex_to_hsl("#ff0000").unwrap();
//! assert_eq!(hsl.to_array(), [0.0, 1.0, 0.5]);
//! assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_hex().as_str(), "#ff0000");
//! ```

#![deny(missing_docs)]

mod color;
pub mod convert;
mod error;
mod math;
pub mod models;

pub use color::{Color, Component, Space};
pub use convert::*;
pub use error::{Error, Result};
pub use models::{is_color_valid, Cmyk, Hex, Hsl, Hsv, Hwb, Model, Rgb};
