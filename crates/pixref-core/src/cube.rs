//! 3D array of RGBA byte entries, the storage behind a 3D lookup table.
//!
//! Entries are addressed by `(x, y, z)` with X varying fastest:
//!
//! ```text
//! index(x, y, z) = ((z * size_y + y) * size_x + x) * 4
//! ```

use crate::{Dimension, Error, Result};

/// Lookup cube of RGBA entries.
///
/// # Example
///
/// ```rust
/// use pixref_core::{Dimension, Rgba3dArray};
///
/// let cube = Rgba3dArray::identity(Dimension::new(2, 2, 2).unwrap());
/// assert_eq!(cube.get(1, 0, 1), [255, 0, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgba3dArray {
    values: Vec<u8>,
    dimension: Dimension,
}

impl Rgba3dArray {
    /// Wraps `values`, which must hold `4 * dimension.cell_count()` bytes.
    pub fn from_vec(values: Vec<u8>, dimension: Dimension) -> Result<Self> {
        let expected = dimension.cell_count() * 4;
        if values.len() != expected {
            return Err(Error::size_mismatch(expected, values.len()));
        }
        Ok(Self { values, dimension })
    }

    /// Cube mapping every input color onto itself.
    ///
    /// Each axis spans 0..=255 linearly; alpha is 255 everywhere.
    pub fn identity(dimension: Dimension) -> Self {
        let axis = |i: usize, size: usize| ((i * 255 + (size - 1) / 2) / (size - 1)) as u8;
        let mut values = Vec::with_capacity(dimension.cell_count() * 4);
        for z in 0..dimension.size_z() {
            for y in 0..dimension.size_y() {
                for x in 0..dimension.size_x() {
                    values.extend_from_slice(&[
                        axis(x, dimension.size_x()),
                        axis(y, dimension.size_y()),
                        axis(z, dimension.size_z()),
                        255,
                    ]);
                }
            }
        }
        Self { values, dimension }
    }

    /// Shape of the cube.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Raw entry bytes.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[inline]
    fn start(&self, x: usize, y: usize, z: usize) -> usize {
        ((z * self.dimension.size_y() + y) * self.dimension.size_x() + x) * 4
    }

    /// Entry at `(x, y, z)`, or an error outside the cube.
    pub fn try_get(&self, x: usize, y: usize, z: usize) -> Result<[u8; 4]> {
        let d = self.dimension;
        if x >= d.size_x() || y >= d.size_y() || z >= d.size_z() {
            return Err(Error::invalid_argument(format!(
                "cube entry ({x}, {y}, {z}) outside {d}"
            )));
        }
        Ok(self.get(x, y, z))
    }

    /// Entry at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside the cube.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> [u8; 4] {
        let s = self.start(x, y, z);
        [
            self.values[s],
            self.values[s + 1],
            self.values[s + 2],
            self.values[s + 3],
        ]
    }
}
