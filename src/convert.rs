//! Conversions between the supported color models.
//!
//! Each model has direct formulas to and from RGB. HSL, HSV and HWB also
//! convert between each other directly, copying the hue unchanged. Every
//! other pair goes through RGB.
//!
//! Apart from parsing hex strings, no conversion validates its input.
//! Channels outside `[0, 1]` produce mathematically derived, but otherwise
//! meaningless, results.
//!
//! ```rust
//! use tinct::{Color, Rgb, Space};
//!
//! let hwb = Color::from(Rgb::new(1.0, 0.5, 0.0))
//!     .to_space(Space::Hwb)
//!     .unwrap();
//! assert_eq!(hwb.space(), Space::Hwb);
//! ```

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
    math::{lerp, max3, min3},
    models::{is_color_valid, Cmyk, Hex, Hsl, Hsv, Hwb, Model, Rgb},
};

impl Color {
    /// Convert this color from its current model to the specified one.
    ///
    /// Only a [`Color::Hex`] source can fail, when its string is not a valid
    /// `#rrggbb` color.
    pub fn to_space(&self, space: Space) -> Result<Self> {
        use Space as S;

        if self.space() == space {
            return Ok(self.clone());
        }

        // Handle direct conversions that keep the hue.
        match (self, space) {
            (Color::Hsl(hsl), S::Hsv) => return Ok(hsl.to_hsv().to_color()),
            (Color::Hsl(hsl), S::Hwb) => return Ok(hsl.to_hwb().to_color()),
            (Color::Hsv(hsv), S::Hsl) => return Ok(hsv.to_hsl().to_color()),
            (Color::Hsv(hsv), S::Hwb) => return Ok(hsv.to_hwb().to_color()),
            (Color::Hwb(hwb), S::Hsl) => return Ok(hwb.to_hsl().to_color()),
            (Color::Hwb(hwb), S::Hsv) => return Ok(hwb.to_hsv().to_color()),
            _ => {}
        }

        // The rest goes through RGB.
        let rgb = self.to_rgb()?;

        Ok(match space {
            S::Rgb => rgb.to_color(),
            S::Hsl => rgb.to_hsl().to_color(),
            S::Hsv => rgb.to_hsv().to_color(),
            S::Hwb => rgb.to_hwb().to_color(),
            S::Cmyk => rgb.to_cmyk().to_color(),
            S::Hex => rgb.to_hex().to_color(),
        })
    }

    /// Convert this color to red, green and blue channels.
    pub fn to_rgb(&self) -> Result<Rgb> {
        Ok(match self {
            Color::Rgb(rgb) => *rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Hsv(hsv) => hsv.to_rgb(),
            Color::Hwb(hwb) => hwb.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
            Color::Hex(hex) => hex.to_rgb()?,
        })
    }

    /// Format this color as a `#rrggbb` string.
    pub fn to_hex(&self) -> Result<Hex> {
        match self {
            Color::Hex(hex) => Ok(hex.clone()),
            _ => Ok(self.to_rgb()?.to_hex()),
        }
    }
}

/// Hue extraction shared by the HSL, HSV and HWB conversions. Ties between
/// channels are always broken in red, green, blue order.
mod hue {
    use crate::{color::Component, math::wrap_hue_once};

    /// The hue of a chromatic color, selecting the formula by the channel
    /// holding the maximum. `delta` must not be 0.
    pub fn from_max(
        red: Component,
        green: Component,
        blue: Component,
        max: Component,
        delta: Component,
    ) -> Component {
        let scaled = |channel: Component| ((max - channel) / 6.0 + delta / 2.0) / delta;

        let hue = if red == max {
            scaled(blue) - scaled(green)
        } else if green == max {
            1.0 / 3.0 + scaled(red) - scaled(blue)
        } else if blue == max {
            2.0 / 3.0 + scaled(green) - scaled(red)
        } else {
            0.0
        };

        wrap_hue_once(hue)
    }

    /// The hue of a chromatic color, selecting the formula by the channel
    /// holding the minimum. `max` must differ from `min`.
    pub fn from_min(
        red: Component,
        green: Component,
        blue: Component,
        min: Component,
        max: Component,
    ) -> Component {
        let (difference, sector) = if red == min {
            (green - blue, 3.0)
        } else if green == min {
            (blue - red, 5.0)
        } else {
            (red - green, 1.0)
        };

        (sector - difference / (max - min)) / 6.0
    }
}

/// Parse a `#rrggbb` string into channels in `[0, 1]`.
///
/// Fails with [`Error::InvalidFormat`] unless the string is `#` followed by
/// exactly 6 hexadecimal digits. Shorthand, alpha and names are rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    if !is_color_valid(hex) {
        return Err(Error::InvalidFormat(hex.to_owned()));
    }

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |range: std::ops::Range<usize>| -> Result<Component> {
        let value = u8::from_str_radix(&digits[range], 16)
            .map_err(|_| Error::InvalidFormat(hex.to_owned()))?;
        Ok(Component::from(value) / 255.0)
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format one channel as at least 2 lowercase hexadecimal digits, rounding
/// half up. Negative values keep their sign.
fn channel_to_hex(value: Component) -> String {
    let scaled = (value * 255.0 + 0.5).floor();
    let digits = if scaled < 0.0 {
        format!("-{:x}", (-scaled) as u64)
    } else {
        format!("{:x}", scaled as u64)
    };
    format!("{digits:0>2}")
}

/// Format channels as a `#rrggbb` string.
///
/// Channels are not clamped: values outside `[0, 1]` yield digit groups that
/// are not 2 hexadecimal digits, so the result is not a valid color.
pub fn rgb_to_hex(rgb: &Rgb) -> Hex {
    Hex::new_unchecked(format!(
        "#{}{}{}",
        channel_to_hex(rgb.r),
        channel_to_hex(rgb.g),
        channel_to_hex(rgb.b)
    ))
}

/// Convert from RGB to HSL.
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let Rgb { r, g, b } = *rgb;

    let min = min3(r, g, b);
    let max = max3(r, g, b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    Hsl::new(hue::from_max(r, g, b, max, delta), s, l)
}

/// Evaluate one RGB channel from the HSL pivots at the given hue.
fn hue_to_channel(v1: Component, v2: Component, mut hue: Component) -> Component {
    // Stepping a turn at a time, not a modulo.
    while hue < 0.0 {
        hue += 1.0;
    }
    while hue > 1.0 {
        hue -= 1.0;
    }

    if 6.0 * hue < 1.0 {
        lerp(v1, v2, 6.0 * hue)
    } else if 2.0 * hue < 1.0 {
        v2
    } else if 3.0 * hue < 2.0 {
        lerp(v1, v2, (2.0 / 3.0 - hue) * 6.0)
    } else {
        v1
    }
}

/// Convert from HSL to RGB.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let Hsl { h, s, l } = *hsl;

    if s == 0.0 {
        return Rgb::new(l, l, l);
    }

    let v2 = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - s * l
    };
    let v1 = 2.0 * l - v2;

    Rgb::new(
        hue_to_channel(v1, v2, h + 1.0 / 3.0),
        hue_to_channel(v1, v2, h),
        hue_to_channel(v1, v2, h - 1.0 / 3.0),
    )
}

/// Convert from RGB to HSV.
pub fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
    let Rgb { r, g, b } = *rgb;

    let min = min3(r, g, b);
    let max = max3(r, g, b);
    let delta = max - min;

    if delta == 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    Hsv::new(hue::from_max(r, g, b, max, delta), delta / max, max)
}

/// Convert from HSV to RGB.
pub fn hsv_to_rgb(hsv: &Hsv) -> Rgb {
    let Hsv { h, s, v } = *hsv;

    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    let mut h = h * 6.0;
    if h == 6.0 {
        h = 0.0;
    }

    let sector = h.floor();
    let fraction = h - sector;

    let j = v * (1.0 - s);
    let k = v * (1.0 - s * fraction);
    let l = v * (1.0 - s * (1.0 - fraction));

    let (r, g, b) = match sector as i64 {
        0 => (v, l, j),
        1 => (k, v, j),
        2 => (j, v, l),
        3 => (j, k, v),
        4 => (l, j, v),
        _ => (v, j, k),
    };

    Rgb::new(r, g, b)
}

/// Convert from RGB to HWB.
pub fn rgb_to_hwb(rgb: &Rgb) -> Hwb {
    let Rgb { r, g, b } = *rgb;

    let w = min3(r, g, b);
    let v = max3(r, g, b);
    let blackness = 1.0 - v;

    if v == w {
        return Hwb::new(0.0, w, blackness);
    }

    Hwb::new(hue::from_min(r, g, b, w, v), w, blackness)
}

/// Convert from HWB to RGB.
///
/// A hue of exactly a full turn is treated as 0. Sectors outside the hue
/// circle produce black.
pub fn hwb_to_rgb(hwb: &Hwb) -> Rgb {
    let Hwb { h, w, b } = *hwb;

    let mut h = h * 6.0;
    if h == 6.0 {
        h = 0.0;
    }

    let v = 1.0 - b;
    let sector = h.floor() as i64;
    let mut f = h - h.floor();
    if sector & 1 == 1 {
        f = 1.0 - f;
    }

    let n = lerp(w, v, f);

    let (r, g, b) = match sector {
        0 => (v, n, w),
        1 => (n, v, w),
        2 => (w, v, n),
        3 => (w, n, v),
        4 => (n, w, v),
        5 => (v, w, n),
        _ => (0.0, 0.0, 0.0),
    };

    Rgb::new(r, g, b)
}

/// Convert from HSV to HWB, keeping the hue.
pub fn hsv_to_hwb(hsv: &Hsv) -> Hwb {
    Hwb::new(hsv.h, (1.0 - hsv.s) * hsv.v, 1.0 - hsv.v)
}

/// Convert from HWB to HSV, keeping the hue.
///
/// The saturation is undefined (NaN) for pure black, where blackness is 1.
pub fn hwb_to_hsv(hwb: &Hwb) -> Hsv {
    Hsv::new(hwb.h, 1.0 - hwb.w / (1.0 - hwb.b), 1.0 - hwb.b)
}

/// Convert from HSL to HWB through HSV, keeping the original hue.
pub fn hsl_to_hwb(hsl: &Hsl) -> Hwb {
    Hwb {
        h: hsl.h,
        ..hsv_to_hwb(&hsl_to_hsv(hsl))
    }
}

/// Convert from HWB to HSL through HSV, keeping the original hue.
pub fn hwb_to_hsl(hwb: &Hwb) -> Hsl {
    Hsl {
        h: hwb.h,
        ..hsv_to_hsl(&hwb_to_hsv(hwb))
    }
}

/// Convert from HSL to HSV, keeping the hue.
pub fn hsl_to_hsv(hsl: &Hsl) -> Hsv {
    let Hsl { h, s, l } = *hsl;

    let v = l + s * l.min(1.0 - l);
    let s = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    Hsv::new(h, s, v)
}

/// Convert from HSV to HSL, keeping the hue.
pub fn hsv_to_hsl(hsv: &Hsv) -> Hsl {
    let Hsv { h, s, v } = *hsv;

    let l = v * (1.0 - s / 2.0);
    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };

    Hsl::new(h, s, l)
}

/// Convert from RGB to CMYK.
pub fn rgb_to_cmyk(rgb: &Rgb) -> Cmyk {
    let Rgb { r, g, b } = *rgb;

    // Pure black would divide by zero below.
    if r == 0.0 && g == 0.0 && b == 0.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }

    let c = 1.0 - r;
    let m = 1.0 - g;
    let y = 1.0 - b;
    let k = min3(c, m, y);

    Cmyk::new(
        (c - k) / (1.0 - k),
        (m - k) / (1.0 - k),
        (y - k) / (1.0 - k),
        k,
    )
}

/// Convert from CMYK to RGB.
pub fn cmyk_to_rgb(cmyk: &Cmyk) -> Rgb {
    let Cmyk { c, m, y, k } = *cmyk;

    Rgb::new((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k))
}

/// Parse a `#rrggbb` string into the HSL notation.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(rgb_to_hsl(&hex_to_rgb(hex)?))
}

/// Format an HSL color as a `#rrggbb` string.
pub fn hsl_to_hex(hsl: &Hsl) -> Hex {
    rgb_to_hex(&hsl_to_rgb(hsl))
}

/// Parse a `#rrggbb` string into the HSV notation.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv> {
    Ok(rgb_to_hsv(&hex_to_rgb(hex)?))
}

/// Format an HSV color as a `#rrggbb` string.
pub fn hsv_to_hex(hsv: &Hsv) -> Hex {
    rgb_to_hex(&hsv_to_rgb(hsv))
}

/// Parse a `#rrggbb` string into the HWB notation.
pub fn hex_to_hwb(hex: &str) -> Result<Hwb> {
    Ok(rgb_to_hwb(&hex_to_rgb(hex)?))
}

/// Format an HWB color as a `#rrggbb` string.
pub fn hwb_to_hex(hwb: &Hwb) -> Hex {
    rgb_to_hex(&hwb_to_rgb(hwb))
}

/// Parse a `#rrggbb` string into the CMYK model.
pub fn hex_to_cmyk(hex: &str) -> Result<Cmyk> {
    Ok(rgb_to_cmyk(&hex_to_rgb(hex)?))
}

/// Format a CMYK color as a `#rrggbb` string.
pub fn cmyk_to_hex(cmyk: &Cmyk) -> Hex {
    rgb_to_hex(&cmyk_to_rgb(cmyk))
}

/// Convert from HSL to CMYK through RGB.
pub fn hsl_to_cmyk(hsl: &Hsl) -> Cmyk {
    rgb_to_cmyk(&hsl_to_rgb(hsl))
}

/// Convert from CMYK to HSL through RGB.
pub fn cmyk_to_hsl(cmyk: &Cmyk) -> Hsl {
    rgb_to_hsl(&cmyk_to_rgb(cmyk))
}

/// Convert from HSV to CMYK through RGB.
pub fn hsv_to_cmyk(hsv: &Hsv) -> Cmyk {
    rgb_to_cmyk(&hsv_to_rgb(hsv))
}

/// Convert from CMYK to HSV through RGB.
pub fn cmyk_to_hsv(cmyk: &Cmyk) -> Hsv {
    rgb_to_hsv(&cmyk_to_rgb(cmyk))
}

/// Convert from HWB to CMYK through RGB.
pub fn hwb_to_cmyk(hwb: &Hwb) -> Cmyk {
    rgb_to_cmyk(&hwb_to_rgb(hwb))
}

/// Convert from CMYK to HWB through RGB.
pub fn cmyk_to_hwb(cmyk: &Cmyk) -> Hwb {
    rgb_to_hwb(&cmyk_to_rgb(cmyk))
}
