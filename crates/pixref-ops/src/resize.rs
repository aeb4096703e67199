//! Bicubic resize.
//!
//! Each output cell maps back to a source position
//! `(out + 0.5) * (in_size / out_size) - 0.5` on both axes. The 4x4 source
//! neighborhood around it is interpolated with
//! [`cubic_interpolate`](pixref_math::cubic_interpolate), first along the
//! four rows and then down the resulting column. Source indices are clamped
//! to the image, so edges replicate.
//!
//! ```text
//! xs0   xs1 │ xs2   xs3        xs1 = floor(src_x)
//!  ●     ●  │  ●     ●         fraction = src_x - xs1
//!           ▲ src_x
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::resize::resize;
//!
//! let input = vec![60u8; 4 * 4];
//! let out = resize(&input, 1, 4, 4, 9, 2, None).unwrap();
//! assert_eq!(out, vec![60u8; 9 * 2]);
//! ```

use crate::{OpsError, OpsResult};

use pixref_core::{
    check_buffer_len, check_restriction, check_vector_size, padded_vector_size, Restriction,
    Vector2dArray, Vector2dView,
};
use pixref_math::{cubic_interpolate, float4_from_bytes, float4_to_bytes, Float4};
use tracing::{debug, trace};

/// Source sample positions for one output coordinate along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Taps {
    indices: [i64; 4],
    fraction: f32,
}

impl Taps {
    fn new(out: usize, scale: f32, max: i64) -> Self {
        let src = (out as f32 + 0.5) * scale - 0.5;
        let start = (src - 1.0).floor() as i64;
        Self {
            indices: std::array::from_fn(|i| (start + i as i64).clamp(0, max)),
            fraction: src - src.floor(),
        }
    }
}

/// Resamples `input` from `input_size_x` x `input_size_y` to
/// `output_size_x` x `output_size_y` cells.
///
/// `restriction` applies to the output; cells outside it are zero.
#[allow(clippy::too_many_arguments)]
pub fn resize(
    input: &[u8],
    vector_size: usize,
    input_size_x: usize,
    input_size_y: usize,
    output_size_x: usize,
    output_size_y: usize,
    restriction: Option<&Restriction>,
) -> OpsResult<Vec<u8>> {
    check_vector_size("resize", vector_size)?;
    check_buffer_len("resize", input.len(), vector_size, input_size_x, input_size_y)?;
    if output_size_x == 0 || output_size_y == 0 {
        return Err(OpsError::invalid_parameter(format!(
            "resize output must be non-empty, got {output_size_x}x{output_size_y}"
        )));
    }
    check_restriction(restriction, output_size_x, output_size_y)?;
    debug!(
        vector_size,
        input_size_x, input_size_y, output_size_x, output_size_y, ?restriction, "resize"
    );

    let padded = padded_vector_size(vector_size);
    let source = Vector2dView::new(input, padded, input_size_x, input_size_y)?;
    let scale_x = input_size_x as f32 / output_size_x as f32;
    let scale_y = input_size_y as f32 / output_size_y as f32;
    let max_x = input_size_x as i64 - 1;
    let max_y = input_size_y as i64 - 1;

    let mut output = Vector2dArray::<u8>::zeroed(padded, output_size_x, output_size_y);
    for (x, y) in output.cells(restriction) {
        let tx = Taps::new(x, scale_x, max_x);
        let ty = Taps::new(y, scale_y, max_y);

        let rows: [Float4; 4] = ty.indices.map(|sy| {
            let p = tx.indices.map(|sx| float4_from_bytes(source.get_clamped(sx, sy)));
            cubic_interpolate(p[0], p[1], p[2], p[3], tx.fraction)
        });
        let value = cubic_interpolate(rows[0], rows[1], rows[2], rows[3], ty.fraction);
        trace!(x, y, ?tx, ?ty, ?value, "resize cell");

        output.set(x, y, &float4_to_bytes(value)[..padded])?;
    }
    Ok(output.into_values())
}
