//! 3x3 and 5x5 convolution.
//!
//! The coefficient count selects the neighborhood: 9 coefficients mean a
//! 3x3 window (radius 1), 25 mean a 5x5 window (radius 2). Coefficients are
//! row-major, matching a top-to-bottom, left-to-right scan of the window:
//!
//! ```text
//! radius 1:   c0 c1 c2
//!             c3 c4 c5      c4 weights the center cell
//!             c6 c7 c8
//! ```
//!
//! Reads past the edge are clamped. Sums stay in byte range and each channel
//! is rounded and clamped on its own.
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::convolve::convolve;
//!
//! let mut coeffs = [0.0f32; 9];
//! coeffs[4] = 1.0;
//! let input = [10u8, 20, 30, 40];
//! assert_eq!(convolve(&input, 1, 2, 2, &coeffs, None).unwrap(), input.to_vec());
//! ```

use crate::{OpsError, OpsResult};

use pixref_core::{
    check_buffer_len, check_restriction, check_vector_size, padded_vector_size, Restriction,
    Vector2dArray, Vector2dView,
};
use pixref_math::{float4_from_bytes, float4_to_bytes, Float4};
use tracing::debug;

/// Window radius implied by a coefficient count, or `InvalidParameter`.
pub fn radius_for(coefficient_count: usize) -> OpsResult<usize> {
    match coefficient_count {
        9 => Ok(1),
        25 => Ok(2),
        n => Err(OpsError::invalid_parameter(format!(
            "convolve needs 9 or 25 coefficients, got {n}"
        ))),
    }
}

/// Convolves every cell of `input` inside `restriction` with `coefficients`.
///
/// Cells outside the restriction are zero in the result.
pub fn convolve(
    input: &[u8],
    vector_size: usize,
    size_x: usize,
    size_y: usize,
    coefficients: &[f32],
    restriction: Option<&Restriction>,
) -> OpsResult<Vec<u8>> {
    check_vector_size("convolve", vector_size)?;
    check_buffer_len("convolve", input.len(), vector_size, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    let radius = radius_for(coefficients.len())? as i64;
    debug!(vector_size, size_x, size_y, radius, ?restriction, "convolve");

    let padded = padded_vector_size(vector_size);
    let side = 2 * radius + 1;
    let source = Vector2dView::new(input, padded, size_x, size_y)?;
    let mut output = Vector2dArray::<u8>::zeroed(padded, size_x, size_y);

    for (x, y) in output.cells(restriction) {
        let mut sum = Float4::ZERO;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let w = coefficients[((dy + radius) * side + dx + radius) as usize];
                sum += float4_from_bytes(source.get_clamped(x as i64 + dx, y as i64 + dy)) * w;
            }
        }
        output.set(x, y, &float4_to_bytes(sum)[..padded])?;
    }
    Ok(output.into_values())
}
