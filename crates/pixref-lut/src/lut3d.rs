//! Trilinear 3D lookup.
//!
//! The first three channels of each RGBA pixel address a point inside the
//! cube: each byte is scaled from `[0, 255]` onto `[0, size - 1]` of its
//! axis. The eight surrounding entries are blended along X, then Y, then Z.
//! Alpha is copied from the input and never looked up.

use crate::LutResult;

use pixref_core::{check_buffer_len, check_restriction, Restriction, Rgba3dArray, Vector2dArray, Vector2dView};
use pixref_math::{float4_from_bytes, float4_to_bytes, mix, Float4, Int4};
use tracing::debug;

/// Maps every RGBA pixel of `input` inside `restriction` through `cube`.
///
/// Cells outside the restriction are zero in the returned buffer.
///
/// # Example
///
/// ```rust
/// use pixref_core::{Dimension, Rgba3dArray};
/// use pixref_lut::lut3d;
///
/// // Two-entry cube that inverts red
/// let d = Dimension::new(2, 2, 2).unwrap();
/// let mut values = Rgba3dArray::identity(d).values().to_vec();
/// for entry in values.chunks_mut(4) {
///     entry[0] = 255 - entry[0];
/// }
/// let cube = Rgba3dArray::from_vec(values, d).unwrap();
/// let out = lut3d(&[0, 10, 20, 77], 1, 1, &cube, None).unwrap();
/// assert_eq!(out, vec![255, 10, 20, 77]);
/// ```
pub fn lut3d(
    input: &[u8],
    size_x: usize,
    size_y: usize,
    cube: &Rgba3dArray,
    restriction: Option<&Restriction>,
) -> LutResult<Vec<u8>> {
    check_buffer_len("lut3d", input.len(), 4, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    debug!(size_x, size_y, dimension = %cube.dimension(), ?restriction, "lut3d");

    let input = Vector2dView::new(input, 4, size_x, size_y)?;
    let mut output = Vector2dArray::<u8>::zeroed(4, size_x, size_y);
    for (x, y) in output.cells(restriction) {
        let px = input.get_strict(x as i64, y as i64)?;
        output.set(x, y, &lookup(px, cube))?;
    }
    Ok(output.into_values())
}

fn lookup(px: &[u8], cube: &Rgba3dArray) -> [u8; 4] {
    let d = cube.dimension();
    let max_index = Int4::new(d.size_x() as i32 - 1, d.size_y() as i32 - 1, d.size_z() as i32 - 1, 0);

    // Opposite corners of the unit cell holding the point.
    let base = float4_from_bytes(px) * max_index.as_vec4() / 255.0;
    let p1 = base.floor().as_ivec4().min(max_index);
    let p2 = (p1 + Int4::ONE).min(max_index);
    let frac = base - p1.as_vec4();

    let entry = |x: i32, y: i32, z: i32| -> Float4 {
        float4_from_bytes(&cube.get(x as usize, y as usize, z as usize))
    };
    let v000 = entry(p1.x, p1.y, p1.z);
    let v100 = entry(p2.x, p1.y, p1.z);
    let v010 = entry(p1.x, p2.y, p1.z);
    let v110 = entry(p2.x, p2.y, p1.z);
    let v001 = entry(p1.x, p1.y, p2.z);
    let v101 = entry(p2.x, p1.y, p2.z);
    let v011 = entry(p1.x, p2.y, p2.z);
    let v111 = entry(p2.x, p2.y, p2.z);

    let yz00 = mix(v000, v100, frac.x);
    let yz10 = mix(v010, v110, frac.x);
    let yz01 = mix(v001, v101, frac.x);
    let yz11 = mix(v011, v111, frac.x);

    let z0 = mix(yz00, yz10, frac.y);
    let z1 = mix(yz01, yz11, frac.y);

    let v = float4_to_bytes(mix(z0, z1, frac.z));
    [v[0], v[1], v[2], px[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixref_core::Dimension;

    fn all_colors_sample() -> Vec<u8> {
        (0..256u32)
            .flat_map(|i| [i as u8, (i * 7 % 256) as u8, (255 - i) as u8, (i * 13 % 256) as u8])
            .collect()
    }

    #[test]
    fn test_identity_cube_preserves_input() {
        let input = all_colors_sample();
        for d in [(2, 2, 2), (17, 17, 17), (3, 9, 33)] {
            let cube = Rgba3dArray::identity(Dimension::new(d.0, d.1, d.2).unwrap());
            let out = lut3d(&input, 16, 16, &cube, None).unwrap();
            for (i, (a, b)) in input.iter().zip(&out).enumerate() {
                if i % 4 == 3 {
                    assert_eq!(a, b, "alpha at {i}");
                } else {
                    assert!((*a as i32 - *b as i32).abs() <= 1, "{d:?} byte {i}: {a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_constant_cube() {
        let d = Dimension::new(4, 4, 4).unwrap();
        let cube = Rgba3dArray::from_vec([50u8, 60, 70, 80].repeat(64), d).unwrap();
        let out = lut3d(&[1, 128, 255, 3], 1, 1, &cube, None).unwrap();
        assert_eq!(out, vec![50, 60, 70, 3]);
    }

    #[test]
    fn test_restriction() {
        let cube = Rgba3dArray::identity(Dimension::new(2, 2, 2).unwrap());
        let input = vec![200u8; 2 * 2 * 4];
        let out = lut3d(&input, 2, 2, &cube, Some(&Restriction::new(0, 1, 0, 1))).unwrap();
        assert_eq!(&out[..4], &[200, 200, 200, 200]);
        assert!(out[4..].iter().all(|&v| v == 0));
    }
}
