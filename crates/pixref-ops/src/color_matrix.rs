//! 4x4 color matrix transform.
//!
//! Every cell is converted to unit floats and transformed with
//! `out = M * in + add`. The matrix is stored **column-major**: entry
//! `matrix[j * 4 + i]` is the weight of input channel `j` in output
//! channel `i`.
//!
//! ```text
//!          in[0]  in[1]  in[2]  in[3]
//! out[0]   m[0]   m[4]   m[8]   m[12]   + add[0]
//! out[1]   m[1]   m[5]   m[9]   m[13]   + add[1]
//! out[2]   m[2]   m[6]   m[10]  m[14]  + add[2]
//! out[3]   m[3]   m[7]   m[11]  m[15]  + add[3]
//! ```
//!
//! Input and output vector sizes are independent. Input channels past the
//! input vector size read as zero, including the padding byte of 3-wide data.
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::color_matrix::{color_matrix, GREYSCALE};
//!
//! let rgba = [255u8, 0, 0, 255];
//! let out = color_matrix(&rgba, 4, 1, 1, 4, &GREYSCALE, &[0.0; 4], None).unwrap();
//! assert_eq!(out, vec![76, 76, 76, 255]);
//! ```

use crate::{OpsError, OpsResult};

use pixref_core::{
    check_buffer_len, check_restriction, check_vector_size, padded_vector_size, Restriction,
    Vector2dArray, Vector2dView,
};
use pixref_math::{byte_to_unit_float, unit_float_to_byte, Float4};
use tracing::debug;

/// Leaves every channel unchanged.
#[rustfmt::skip]
pub const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Replaces R, G and B with BT.601 luma; alpha unchanged.
#[rustfmt::skip]
pub const GREYSCALE: [f32; 16] = [
    0.299, 0.299, 0.299, 0.0,
    0.587, 0.587, 0.587, 0.0,
    0.114, 0.114, 0.114, 0.0,
    0.0,   0.0,   0.0,   1.0,
];

/// RGB to YUV (BT.601). U and V come out centered on zero.
#[rustfmt::skip]
pub const RGB_TO_YUV: [f32; 16] = [
    0.299, -0.14713,  0.615,   0.0,
    0.587, -0.28886, -0.51499, 0.0,
    0.114,  0.436,   -0.10001, 0.0,
    0.0,    0.0,      0.0,     1.0,
];

/// YUV (BT.601, zero-centered chroma) to RGB.
#[rustfmt::skip]
pub const YUV_TO_RGB: [f32; 16] = [
    1.0,      1.0,     1.0, 0.0,
    0.0,     -0.39465, 2.03211, 0.0,
    1.13983, -0.5806,  0.0, 0.0,
    0.0,      0.0,     0.0, 1.0,
];

/// Applies `matrix` and `add_vector` to one unit-float input vector.
///
/// Only the first `input_vector_size` lanes of `input` contribute.
#[inline]
pub fn transform(matrix: &[f32; 16], add_vector: Float4, input: Float4, input_vector_size: usize) -> Float4 {
    let input = input.to_array();
    let mut out = add_vector;
    for (j, &v) in input.iter().enumerate().take(input_vector_size) {
        let column = Float4::from_slice(&matrix[j * 4..j * 4 + 4]);
        out += column * v;
    }
    out
}

/// Transforms every cell of `input` inside `restriction`.
///
/// `input` holds cells of `padded_vector_size(input_vector_size)` bytes; the
/// result holds `padded_vector_size(output_vector_size)` bytes per cell,
/// zero outside the restriction. For 3-wide output the padding byte holds the
/// computed fourth lane. `matrix` must have exactly 16 entries and
/// `add_vector` exactly 4.
#[allow(clippy::too_many_arguments)]
pub fn color_matrix(
    input: &[u8],
    input_vector_size: usize,
    size_x: usize,
    size_y: usize,
    output_vector_size: usize,
    matrix: &[f32],
    add_vector: &[f32],
    restriction: Option<&Restriction>,
) -> OpsResult<Vec<u8>> {
    check_vector_size("color matrix input", input_vector_size)?;
    check_vector_size("color matrix output", output_vector_size)?;
    check_buffer_len("color matrix", input.len(), input_vector_size, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    let matrix: &[f32; 16] = matrix.try_into().map_err(|_| {
        OpsError::invalid_parameter(format!("color matrix must have 16 entries, got {}", matrix.len()))
    })?;
    if add_vector.len() != 4 {
        return Err(OpsError::invalid_parameter(format!(
            "color matrix add vector must have 4 entries, got {}",
            add_vector.len()
        )));
    }
    debug!(input_vector_size, output_vector_size, size_x, size_y, ?restriction, "color_matrix");

    let in_padded = padded_vector_size(input_vector_size);
    let out_padded = padded_vector_size(output_vector_size);
    let add = Float4::from_slice(add_vector);
    let source = Vector2dView::new(input, in_padded, size_x, size_y)?;
    let mut output = Vector2dArray::<u8>::zeroed(out_padded, size_x, size_y);

    for (x, y) in output.cells(restriction) {
        let px = source.get_strict(x as i64, y as i64)?;
        let mut lanes = [0.0f32; 4];
        for (lane, &b) in lanes.iter_mut().zip(px) {
            *lane = byte_to_unit_float(b);
        }
        let result = transform(matrix, add, Float4::from_array(lanes), input_vector_size).to_array();
        let mut bytes = [0u8; 4];
        for (b, &v) in bytes.iter_mut().zip(&result).take(out_padded) {
            *b = unit_float_to_byte(v);
        }
        output.set(x, y, &bytes[..out_padded])?;
    }
    Ok(output.into_values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_preserves_rgba() {
        let input: Vec<u8> = (0..4 * 3 * 4).map(|i| (i * 19 % 256) as u8).collect();
        let out = color_matrix(&input, 4, 4, 3, 4, &IDENTITY, &[0.0; 4], None).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_column_major_convention() {
        // Column 0 routes input red into output blue only.
        let mut m = [0.0f32; 16];
        m[2] = 1.0;
        let out = color_matrix(&[200, 10, 20, 30], 4, 1, 1, 4, &m, &[0.0; 4], None).unwrap();
        assert_eq!(out, vec![0, 0, 200, 0]);
    }

    #[test]
    fn test_add_vector_and_clamp() {
        let out = color_matrix(&[255, 0, 0, 0], 4, 1, 1, 4, &IDENTITY, &[0.5, 0.5, -1.0, 0.25], None).unwrap();
        assert_eq!(out, vec![255, 128, 0, 64]);
    }

    #[test]
    fn test_three_wide_ignores_padding() {
        // The padding byte is non-zero but must not reach alpha.
        let out = color_matrix(&[10, 20, 30, 250], 3, 1, 1, 4, &IDENTITY, &[0.0; 4], None).unwrap();
        assert_eq!(out, vec![10, 20, 30, 0]);
    }

    #[test]
    fn test_vector_size_change() {
        let input = [0u8, 255, 0, 0, 255, 255, 255, 255];
        let out = color_matrix(&input, 4, 2, 1, 1, &GREYSCALE, &[0.0; 4], None).unwrap();
        assert_eq!(out, vec![150, 255]);

        let grey = [100u8, 7];
        let out = color_matrix(&grey, 1, 2, 1, 3, &GREYSCALE, &[0.0; 4], None).unwrap();
        assert_eq!(out, vec![30, 30, 30, 0, 2, 2, 2, 0]);
    }

    #[test]
    fn test_three_wide_output_keeps_fourth_lane() {
        let out = color_matrix(&[10, 20, 30, 200], 4, 1, 1, 3, &IDENTITY, &[0.0; 4], None).unwrap();
        assert_eq!(out, vec![10, 20, 30, 200]);

        // 3-wide in and out: the input pad reads as zero, the add vector still lands.
        let out = color_matrix(&[10, 20, 30, 99], 3, 1, 1, 3, &IDENTITY, &[0.0, 0.0, 0.0, 1.0], None).unwrap();
        assert_eq!(out, vec![10, 20, 30, 255]);
    }

    #[test]
    fn test_restriction_zeroes_outside() {
        let input: Vec<u8> = (0..4 * 3 * 4).map(|i| (i * 7 % 256) as u8).collect();
        let r = Restriction::new(1, 3, 1, 3);
        let out = color_matrix(&input, 4, 4, 3, 3, &IDENTITY, &[0.0; 4], Some(&r)).unwrap();
        assert_eq!(out.len(), input.len());
        for y in 0..3 {
            for x in 0..4 {
                let i = (y * 4 + x) * 4;
                if r.contains(x, y) {
                    assert_eq!(&out[i..i + 4], &input[i..i + 4], "({x}, {y})");
                } else {
                    assert_eq!(&out[i..i + 4], &[0, 0, 0, 0], "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_rejects_bad_matrix() {
        let err = color_matrix(&[0; 4], 4, 1, 1, 4, &[1.0; 9], &[0.0; 4], None).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = color_matrix(&[0; 4], 4, 1, 1, 4, &IDENTITY, &[0.0; 3], None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(color_matrix(&[0; 4], 5, 1, 1, 4, &IDENTITY, &[0.0; 4], None).is_err());
    }

    #[test]
    fn test_yuv_roundtrip_close() {
        let rgb = [180u8, 90, 40, 255];
        let yuv = color_matrix(&rgb, 4, 1, 1, 4, &RGB_TO_YUV, &[0.0, 0.5, 0.5, 0.0], None).unwrap();
        let yuv_f: Vec<f32> = yuv.iter().map(|&b| byte_to_unit_float(b)).collect();
        let centered = Float4::new(yuv_f[0], yuv_f[1] - 0.5, yuv_f[2] - 0.5, yuv_f[3]);
        let back = transform(&YUV_TO_RGB, Float4::ZERO, centered, 4).to_array();
        for (c, &orig) in rgb.iter().enumerate().take(3) {
            let got = unit_float_to_byte(back[c]) as i32;
            assert!((got - orig as i32).abs() <= 2, "channel {c}: {got} vs {orig}");
        }
    }
}
