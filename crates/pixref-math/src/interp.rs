//! Interpolation helpers.

use crate::Float4;

/// Linear interpolation: `a + (b - a) * t`.
///
/// ```rust
/// use pixref_math::{mix, Float4};
///
/// let a = Float4::new(0.0, 10.0, 20.0, 30.0);
/// let b = Float4::new(10.0, 10.0, 0.0, 30.0);
/// assert_eq!(mix(a, b, 0.25), Float4::new(2.5, 10.0, 15.0, 30.0));
/// ```
#[inline]
pub fn mix(a: Float4, b: Float4, t: f32) -> Float4 {
    a + (b - a) * t
}

/// Cubic interpolation between `p1` and `p2` at fraction `x`, using the
/// outer samples `p0` and `p3` to shape the curve.
///
/// `p1 + 0.5 * x * (p2 - p0 + x * (2*p0 - 5*p1 + 4*p2 - p3 + x * (3*(p1 - p2) + p3 - p0)))`
///
/// At `x == 0` the result is exactly `p1`.
#[inline]
pub fn cubic_interpolate(p0: Float4, p1: Float4, p2: Float4, p3: Float4, x: f32) -> Float4 {
    p1 + (p2 - p0 + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3 + ((p1 - p2) * 3.0 + p3 - p0) * x) * x)
        * x
        * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mix_endpoints() {
        let a = Float4::splat(3.0);
        let b = Float4::splat(7.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn test_cubic_hits_samples() {
        let p = [
            Float4::splat(10.0),
            Float4::splat(20.0),
            Float4::splat(40.0),
            Float4::splat(80.0),
        ];
        assert_eq!(cubic_interpolate(p[0], p[1], p[2], p[3], 0.0), p[1]);
        let at_one = cubic_interpolate(p[0], p[1], p[2], p[3], 1.0);
        assert_relative_eq!(at_one.x, 40.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cubic_linear_data_is_linear() {
        let p = [0.0, 1.0, 2.0, 3.0].map(Float4::splat);
        let mid = cubic_interpolate(p[0], p[1], p[2], p[3], 0.5);
        assert_relative_eq!(mid.x, 1.5, epsilon = 1e-6);
    }
}
