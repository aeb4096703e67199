//! Separable Gaussian blur.
//!
//! The blur runs as two one-dimensional passes over unit floats:
//!
//! 1. horizontal, over the restriction grown by `radius` rows on each side
//! 2. vertical, over the restriction itself, reading the horizontal result
//!
//! Both passes use border-clamped reads. The extra rows of the first pass
//! form the halo the vertical pass needs, so a restricted blur matches the
//! same cells of an unrestricted one.
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::blur::{blur, build_gaussian};
//!
//! let weights = build_gaussian(3).unwrap();
//! assert_eq!(weights.len(), 7);
//!
//! let out = blur(&[0, 255, 0], 1, 3, 1, 1, None).unwrap();
//! assert!(out[1] < 255 && out[0] > 0);
//! ```

use crate::{OpsError, OpsResult};

use pixref_core::{
    check_buffer_len, check_restriction, check_vector_size, padded_vector_size, Restriction,
    Vector2dArray, Vector2dView,
};
use pixref_math::{byte_to_unit_float, unit_float_to_byte, Float4};
use tracing::{debug, trace};

/// Largest radius accepted by [`blur`] and [`build_gaussian`].
pub const MAX_RADIUS: usize = 25;

/// Builds the normalized 1D Gaussian for `radius`.
///
/// Returns `2 * radius + 1` weights summing to 1, symmetric about the center,
/// with `sigma = 0.4 * radius + 0.6`.
pub fn build_gaussian(radius: usize) -> OpsResult<Vec<f32>> {
    check_radius(radius)?;
    let sigma = 0.4 * radius as f32 + 0.6;
    let coeff1 = 1.0 / ((2.0 * std::f32::consts::PI).sqrt() * sigma);
    let coeff2 = -1.0 / (2.0 * sigma * sigma);

    let r = radius as i32;
    let mut weights: Vec<f32> = (-r..=r)
        .map(|i| {
            let d = i as f32;
            coeff1 * (d * d * coeff2).exp()
        })
        .collect();

    let normalize = 1.0 / weights.iter().sum::<f32>();
    for w in &mut weights {
        *w *= normalize;
    }
    trace!(radius, sigma, "gaussian built");
    Ok(weights)
}

fn check_radius(radius: usize) -> OpsResult<()> {
    if !(1..=MAX_RADIUS).contains(&radius) {
        return Err(OpsError::invalid_parameter(format!(
            "blur radius must be in 1..={MAX_RADIUS}, got {radius}"
        )));
    }
    Ok(())
}

#[inline]
fn load(px: &[f32]) -> Float4 {
    let mut lanes = [0.0f32; 4];
    lanes[..px.len()].copy_from_slice(px);
    Float4::from_array(lanes)
}

/// Blurs `input` with a Gaussian of the given `radius` (1..=25).
///
/// `input` holds `size_x * size_y` cells of `padded_vector_size(vector_size)`
/// bytes. Cells outside `restriction` are zero in the result.
pub fn blur(
    input: &[u8],
    vector_size: usize,
    size_x: usize,
    size_y: usize,
    radius: usize,
    restriction: Option<&Restriction>,
) -> OpsResult<Vec<u8>> {
    check_vector_size("blur", vector_size)?;
    check_buffer_len("blur", input.len(), vector_size, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    let weights = build_gaussian(radius)?;
    debug!(vector_size, size_x, size_y, radius, ?restriction, "blur");

    let padded = padded_vector_size(vector_size);
    let source = Vector2dView::new(input, padded, size_x, size_y)?.map(byte_to_unit_float);
    let area = restriction.copied().unwrap_or(Restriction::full(size_x, size_y));
    let halo = area.expand_y(radius, size_y);
    let r = radius as i64;

    let mut horizontal = source.same_sized();
    for (x, y) in horizontal.cells(Some(&halo)) {
        let mut sum = Float4::ZERO;
        for (k, w) in weights.iter().enumerate() {
            sum += load(source.get_clamped(x as i64 + k as i64 - r, y as i64)) * *w;
        }
        horizontal.set(x, y, &sum.to_array()[..padded])?;
    }

    let mut output = Vector2dArray::<u8>::zeroed(padded, size_x, size_y);
    for (x, y) in output.cells(Some(&area)) {
        let mut sum = Float4::ZERO;
        for (k, w) in weights.iter().enumerate() {
            sum += load(horizontal.get_clamped(x as i64, y as i64 + k as i64 - r)) * *w;
        }
        let bytes = sum.to_array().map(unit_float_to_byte);
        output.set(x, y, &bytes[..padded])?;
    }
    Ok(output.into_values())
}
