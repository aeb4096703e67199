//! Seeded input generators.
//!
//! Every generator is deterministic in its seed, so a failing comparison can
//! be replayed exactly. Bytes are drawn from the signed range `-128..=127`
//! and reinterpreted as `u8`.
//!
//! ```rust
//! use pixref_validate::random::{random_bytes, random_image};
//!
//! assert_eq!(random_bytes(7, 32), random_bytes(7, 32));
//! assert_ne!(random_bytes(7, 32), random_bytes(8, 32));
//! assert_eq!(random_image(1, 3, 5, 2).unwrap().len(), 5 * 2 * 4);
//! ```

use crate::{ValidateError, ValidateResult};

use pixref_core::{check_buffer_len, check_vector_size, padded_vector_size, Dimension, Rgba3dArray};
use pixref_lut::LookupTable;
use pixref_ops::yuv::{yuv_buffer_size, YuvFormat};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[inline]
fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn fill_bytes(rng: &mut StdRng, out: &mut [u8]) {
    for b in out {
        *b = rng.gen_range(i8::MIN..=i8::MAX) as u8;
    }
}

/// `len` random bytes.
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    fill_bytes(&mut rng(seed), &mut out);
    out
}

/// A random `size_x` x `size_y` buffer of `vector_size`-channel cells,
/// padding lanes included.
pub fn random_image(seed: u64, vector_size: usize, size_x: usize, size_y: usize) -> ValidateResult<Vec<u8>> {
    check_vector_size("random image", vector_size)?;
    let len = size_x * size_y * padded_vector_size(vector_size);
    check_buffer_len("random image", len, vector_size, size_x, size_y)?;
    Ok(random_bytes(seed, len))
}

/// `len` floats uniformly drawn from `min..max`.
pub fn random_floats(seed: u64, len: usize, min: f32, max: f32) -> ValidateResult<Vec<f32>> {
    if !(min < max) {
        return Err(ValidateError::invalid_parameter(format!(
            "random float range {min}..{max} is empty"
        )));
    }
    let mut rng = rng(seed);
    Ok((0..len).map(|_| rng.gen_range(min..max)).collect())
}

/// A lookup table with four independently random channel tables.
pub fn random_lookup_table(seed: u64) -> LookupTable {
    let mut rng = rng(seed);
    let mut table = LookupTable::identity();
    for channel in [&mut table.red, &mut table.green, &mut table.blue, &mut table.alpha] {
        fill_bytes(&mut rng, channel);
    }
    table
}

/// A cube of `dimension` with random RGBA entries.
pub fn random_cube(seed: u64, dimension: Dimension) -> ValidateResult<Rgba3dArray> {
    Ok(Rgba3dArray::from_vec(random_bytes(seed, dimension.cell_count() * 4), dimension)?)
}

/// A random YUV buffer of exactly [`yuv_buffer_size`] bytes.
pub fn random_yuv(seed: u64, format: YuvFormat, size_x: usize, size_y: usize) -> ValidateResult<Vec<u8>> {
    Ok(random_bytes(seed, yuv_buffer_size(format, size_x, size_y)?))
}

/// Histogram-dot coefficients: `count` non-negative weights summing to at
/// most 1.0.
pub fn random_dot_coefficients(seed: u64, count: usize) -> ValidateResult<Vec<f32>> {
    if !(1..=4).contains(&count) {
        return Err(ValidateError::invalid_parameter(format!(
            "histogram dot needs 1 to 4 coefficients, got {count}"
        )));
    }
    let mut weights = random_floats(seed, count, 0.0, 1.0)?;
    // Scale a little under 1.0 so f32 summation cannot exceed the limit.
    let scale = 0.999 / weights.iter().sum::<f32>().max(f32::MIN_POSITIVE);
    for w in &mut weights {
        *w *= scale;
    }
    Ok(weights)
}
