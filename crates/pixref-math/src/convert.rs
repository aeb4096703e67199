//! Conversions between bytes, unit floats, and byte-range floats.

use crate::Float4;

/// Maps a byte onto `[0, 1]`.
#[inline]
pub fn byte_to_unit_float(v: u8) -> f32 {
    v as f32 * (1.0 / 255.0)
}

/// Clamps a byte-range float into `[0, 255]`, rounding half up.
///
/// ```rust
/// use pixref_math::clamp_to_byte;
///
/// assert_eq!(clamp_to_byte(127.5), 128);
/// assert_eq!(clamp_to_byte(127.49), 127);
/// assert_eq!(clamp_to_byte(-3.0), 0);
/// assert_eq!(clamp_to_byte(1e9), 255);
/// ```
#[inline]
pub fn clamp_to_byte(v: f32) -> u8 {
    (v + 0.5).clamp(0.0, 255.0) as u8
}

/// Scales a unit float back to a byte, rounding half up and clamping.
#[inline]
pub fn unit_float_to_byte(v: f32) -> u8 {
    clamp_to_byte(v * 255.0)
}

/// Loads up to four bytes into a [`Float4`], leaving missing lanes at zero.
#[inline]
pub fn float4_from_bytes(bytes: &[u8]) -> Float4 {
    let mut lanes = [0.0f32; 4];
    for (lane, &b) in lanes.iter_mut().zip(bytes) {
        *lane = b as f32;
    }
    Float4::from_array(lanes)
}

/// Rounds and clamps every lane of a byte-range [`Float4`].
#[inline]
pub fn float4_to_bytes(v: Float4) -> [u8; 4] {
    [
        clamp_to_byte(v.x),
        clamp_to_byte(v.y),
        clamp_to_byte(v.z),
        clamp_to_byte(v.w),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_float_roundtrip() {
        for v in 0..=255u8 {
            assert_eq!(unit_float_to_byte(byte_to_unit_float(v)), v);
        }
        assert_relative_eq!(byte_to_unit_float(255), 1.0);
    }

    #[test]
    fn test_unit_float_clamps() {
        assert_eq!(unit_float_to_byte(-0.2), 0);
        assert_eq!(unit_float_to_byte(1.7), 255);
    }

    #[test]
    fn test_float4_from_short_slice() {
        assert_eq!(float4_from_bytes(&[9, 8]), Float4::new(9.0, 8.0, 0.0, 0.0));
        assert_eq!(float4_to_bytes(Float4::new(0.4, 254.6, -1.0, 300.0)), [0, 255, 0, 255]);
    }
}
