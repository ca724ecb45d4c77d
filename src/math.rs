//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// The smallest of three components.
pub fn min3(a: Component, b: Component, c: Component) -> Component {
    a.min(b).min(c)
}

/// The largest of three components.
pub fn max3(a: Component, b: Component, c: Component) -> Component {
    a.max(b).max(c)
}

/// Bring a hue that is off by less than a full turn back into `[0, 1]`. Only
/// a single correction is applied.
pub fn wrap_hue_once(hue: Component) -> Component {
    if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_middle() {
        assert_eq!(lerp(0.25, 0.75, 0.0), 0.25);
        assert_eq!(lerp(0.25, 0.75, 1.0), 0.75);
        assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
    }

    #[test]
    fn min_max_of_three() {
        assert_eq!(min3(0.3, 0.1, 0.2), 0.1);
        assert_eq!(max3(0.3, 0.1, 0.2), 0.3);
    }

    #[test]
    fn wrap_hue_applies_one_correction() {
        assert_eq!(wrap_hue_once(0.25), 0.25);
        assert_eq!(wrap_hue_once(-0.25), 0.75);
        assert_eq!(wrap_hue_once(1.5), 0.5);
        // Only one turn is removed.
        assert_eq!(wrap_hue_once(2.5), 1.5);
    }
}
