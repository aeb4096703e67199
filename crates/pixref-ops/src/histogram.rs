//! Per-channel and dot-product histograms.
//!
//! [`histogram`] counts each channel separately into a channel-interleaved
//! table: the count for value `v` of channel `c` sits at
//! `v * padded_vector_size + c`.
//!
//! [`histogram_dot`] reduces each cell to one luminance-like value with a
//! fixed-point dot product and counts those values into 256 buckets.
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::histogram::{histogram, histogram_dot};
//!
//! let input = [0u8, 255, 0, 7];
//! let counts = histogram(&input, 2, 2, 1, None).unwrap();
//! assert_eq!(counts.len(), 256 * 2);
//! assert_eq!(counts[0], 2);         // value 0, channel 0
//! assert_eq!(counts[255 * 2 + 1], 1); // value 255, channel 1
//!
//! let grey = histogram_dot(&[9u8; 4], 1, 4, 1, Some(&[1.0]), None).unwrap();
//! assert_eq!(grey[9], 4);
//! ```

use crate::{OpsError, OpsResult};

use pixref_core::{
    check_buffer_len, check_restriction, check_vector_size, padded_vector_size, Restriction,
    Vector2dView,
};
use tracing::debug;

/// Buckets per channel.
pub const BUCKETS: usize = 256;

/// NTSC luma weights used when no coefficients are supplied.
pub const DEFAULT_DOT_COEFFICIENTS: [f32; 4] = [0.299, 0.587, 0.114, 0.0];

/// Counts byte values per channel inside `restriction`.
///
/// Returns `256 * padded_vector_size(vector_size)` counts. The padding
/// channel of 3-wide data is never counted.
pub fn histogram(
    input: &[u8],
    vector_size: usize,
    size_x: usize,
    size_y: usize,
    restriction: Option<&Restriction>,
) -> OpsResult<Vec<u32>> {
    check_vector_size("histogram", vector_size)?;
    check_buffer_len("histogram", input.len(), vector_size, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    debug!(vector_size, size_x, size_y, ?restriction, "histogram");

    let padded = padded_vector_size(vector_size);
    let source = Vector2dView::new(input, padded, size_x, size_y)?;
    let mut counts = vec![0u32; BUCKETS * padded];
    for (x, y) in source.cells(restriction) {
        let px = source.get_strict(x as i64, y as i64)?;
        for (c, &v) in px.iter().enumerate().take(vector_size) {
            counts[v as usize * padded + c] += 1;
        }
    }
    Ok(counts)
}

/// Converts dot coefficients to the 0..=256 fixed-point scale.
///
/// `None` selects [`DEFAULT_DOT_COEFFICIENTS`]. Supplied coefficients must
/// number 1 to 4, be non-negative, and sum to at most 1.0; missing entries
/// are zero.
pub fn fixed_point_coefficients(coefficients: Option<&[f32]>) -> OpsResult<[i32; 4]> {
    let mut padded = [0.0f32; 4];
    match coefficients {
        None => padded = DEFAULT_DOT_COEFFICIENTS,
        Some(c) => {
            if c.is_empty() || c.len() > 4 {
                return Err(OpsError::invalid_parameter(format!(
                    "histogram dot needs 1 to 4 coefficients, got {}",
                    c.len()
                )));
            }
            if let Some(neg) = c.iter().find(|&&v| v < 0.0 || v.is_nan()) {
                return Err(OpsError::invalid_parameter(format!(
                    "histogram dot coefficients must be non-negative, got {neg}"
                )));
            }
            let sum: f32 = c.iter().sum();
            if sum > 1.0 {
                return Err(OpsError::invalid_parameter(format!(
                    "histogram dot coefficients must sum to at most 1.0, got {sum}"
                )));
            }
            padded[..c.len()].copy_from_slice(c);
        }
    }
    Ok(padded.map(|c| (c * 256.0 + 0.5) as i32))
}

/// Histogram of the per-cell fixed-point dot product with `coefficients`.
///
/// Only the first `vector_size` channels contribute. The bucket is
/// `(dot + 0x7f) >> 8`, clamped to 255. Returns 256 counts.
pub fn histogram_dot(
    input: &[u8],
    vector_size: usize,
    size_x: usize,
    size_y: usize,
    coefficients: Option<&[f32]>,
    restriction: Option<&Restriction>,
) -> OpsResult<Vec<u32>> {
    check_vector_size("histogram dot", vector_size)?;
    check_buffer_len("histogram dot", input.len(), vector_size, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    let weights = fixed_point_coefficients(coefficients)?;
    debug!(vector_size, size_x, size_y, ?weights, ?restriction, "histogram_dot");

    let source = Vector2dView::new(input, padded_vector_size(vector_size), size_x, size_y)?;
    let mut counts = vec![0u32; BUCKETS];
    for (x, y) in source.cells(restriction) {
        let px = source.get_strict(x as i64, y as i64)?;
        let dot: i32 = px
            .iter()
            .zip(&weights)
            .take(vector_size)
            .map(|(&v, &w)| v as i32 * w)
            .sum();
        let bucket = (((dot + 0x7f) >> 8) as usize).min(BUCKETS - 1);
        counts[bucket] += 1;
    }
    Ok(counts)
}
