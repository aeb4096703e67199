//! Region and shape types shared by every kernel.
//!
//! - [`Restriction`] - half-open rectangle limiting which cells a kernel computes
//! - [`Dimension`] - immutable `(x, y, z)` shape of a lookup cube
//! - [`padded_vector_size`] - stored component count for a logical channel count
//!
//! # Coordinate System
//!
//! Origin (0, 0) is the top-left cell, X grows to the right and Y grows
//! downward. Iteration is always row-major: all of row `start_y` left to
//! right, then the next row.
//!
//! ```text
//! (0,0) ────────► X
//!   │   start_x      end_x
//!   │     ┌───────────┐ start_y
//!   │     │ computed  │
//!   │     └───────────┘ end_y   (end is exclusive)
//!   ▼
//!   Y
//! ```

use crate::{Error, Result};

/// Returns the stored per-cell component count for `vector_size` channels.
///
/// Three-channel data is always stored padded to four components.
///
/// ```rust
/// use pixref_core::padded_vector_size;
///
/// assert_eq!(padded_vector_size(1), 1);
/// assert_eq!(padded_vector_size(3), 4);
/// assert_eq!(padded_vector_size(4), 4);
/// ```
#[inline]
pub const fn padded_vector_size(vector_size: usize) -> usize {
    if vector_size == 3 { 4 } else { vector_size }
}

/// Fails with [`Error::InvalidArgument`] unless `vector_size` is in 1..=4.
pub fn check_vector_size(what: &str, vector_size: usize) -> Result<()> {
    if !(1..=4).contains(&vector_size) {
        return Err(Error::invalid_argument(format!(
            "{what}: vector size must be in 1..=4, got {vector_size}"
        )));
    }
    Ok(())
}

/// Fails unless both sizes are non-zero and
/// `len == size_x * size_y * padded_vector_size(vector_size)`.
pub fn check_buffer_len(
    what: &str,
    len: usize,
    vector_size: usize,
    size_x: usize,
    size_y: usize,
) -> Result<()> {
    if size_x == 0 || size_y == 0 {
        return Err(Error::invalid_argument(format!(
            "{what}: dimensions must be non-zero, got {size_x}x{size_y}"
        )));
    }
    let expected = size_x * size_y * padded_vector_size(vector_size);
    if len != expected {
        return Err(Error::invalid_argument(format!(
            "{what}: expected {expected} bytes for {size_x}x{size_y} with vector size {vector_size}, got {len}"
        )));
    }
    Ok(())
}

/// A caller-specified rectangular sub-region, half-open on both axes.
///
/// Cells with `start_x <= x < end_x` and `start_y <= y < end_y` are computed;
/// all other cells are left alone.
///
/// # Example
///
/// ```rust
/// use pixref_core::Restriction;
///
/// let r = Restriction::new(1, 3, 0, 2);
/// assert!(r.contains(1, 0));
/// assert!(!r.contains(3, 0));
/// assert_eq!(r.cell_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restriction {
    /// First column computed
    pub start_x: usize,
    /// One past the last column computed
    pub end_x: usize,
    /// First row computed
    pub start_y: usize,
    /// One past the last row computed
    pub end_y: usize,
}

impl Restriction {
    /// Creates a restriction from half-open X and Y ranges.
    #[inline]
    pub const fn new(start_x: usize, end_x: usize, start_y: usize, end_y: usize) -> Self {
        Self {
            start_x,
            end_x,
            start_y,
            end_y,
        }
    }

    /// Restriction covering a whole `size_x` x `size_y` array.
    #[inline]
    pub const fn full(size_x: usize, size_y: usize) -> Self {
        Self::new(0, size_x, 0, size_y)
    }

    /// Returns `true` if `(x, y)` lies inside the restriction.
    #[inline]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.start_x && x < self.end_x && y >= self.start_y && y < self.end_y
    }

    /// Number of cells inside the restriction.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        (self.end_x - self.start_x) * (self.end_y - self.start_y)
    }

    /// Checks `0 <= start < end <= size` on both axes.
    pub fn validate(&self, size_x: usize, size_y: usize) -> Result<()> {
        if self.start_x >= self.end_x || self.end_x > size_x {
            return Err(Error::invalid_argument(format!(
                "restriction x range {}..{} invalid for width {size_x}",
                self.start_x, self.end_x
            )));
        }
        if self.start_y >= self.end_y || self.end_y > size_y {
            return Err(Error::invalid_argument(format!(
                "restriction y range {}..{} invalid for height {size_y}",
                self.start_y, self.end_y
            )));
        }
        Ok(())
    }

    /// Grows the Y range by `amount` on both sides, clamped to `[0, size_y]`.
    ///
    /// Used by separable filters whose first pass must produce a halo of rows
    /// for the second pass.
    #[inline]
    pub fn expand_y(&self, amount: usize, size_y: usize) -> Self {
        Self::new(
            self.start_x,
            self.end_x,
            self.start_y.saturating_sub(amount),
            (self.end_y + amount).min(size_y),
        )
    }
}

impl std::fmt::Display for Restriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.start_x, self.end_x, self.start_y, self.end_y
        )
    }
}

/// Validates an optional restriction against an array size.
#[inline]
pub fn check_restriction(restriction: Option<&Restriction>, size_x: usize, size_y: usize) -> Result<()> {
    match restriction {
        Some(r) => r.validate(size_x, size_y),
        None => Ok(()),
    }
}

/// Row-major iterator over the cells of a restriction.
///
/// Owns a copy of the restriction, so it can be held while the array it
/// describes is mutated.
#[derive(Debug, Clone)]
pub struct Cells {
    area: Restriction,
    x: usize,
    y: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.y >= self.area.end_y || self.area.start_x >= self.area.end_x {
            return None;
        }
        let cell = (self.x, self.y);
        self.x += 1;
        if self.x == self.area.end_x {
            self.x = self.area.start_x;
            self.y += 1;
        }
        Some(cell)
    }
}

/// Cells of `restriction`, or of the whole `size_x` x `size_y` extent when
/// `restriction` is `None`, in row-major order.
pub fn cells(size_x: usize, size_y: usize, restriction: Option<&Restriction>) -> Cells {
    let area = restriction.copied().unwrap_or(Restriction::full(size_x, size_y));
    Cells {
        area,
        x: area.start_x,
        y: area.start_y,
    }
}

/// Calls `work(x, y)` for every cell yielded by [`cells`].
pub fn for_each_cell<F>(size_x: usize, size_y: usize, restriction: Option<&Restriction>, mut work: F)
where
    F: FnMut(usize, usize),
{
    for (x, y) in cells(size_x, size_y, restriction) {
        work(x, y);
    }
}

/// Immutable shape of a 3D lookup cube.
///
/// Every axis must hold at least two entries so that trilinear interpolation
/// always has two corners to blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    size_x: usize,
    size_y: usize,
    size_z: usize,
}

impl Dimension {
    /// Creates a dimension, failing if any axis is smaller than 2.
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Result<Self> {
        if size_x < 2 || size_y < 2 || size_z < 2 {
            return Err(Error::invalid_argument(format!(
                "cube dimension {size_x}x{size_y}x{size_z}: every axis needs at least 2 entries"
            )));
        }
        Ok(Self {
            size_x,
            size_y,
            size_z,
        })
    }

    /// Entries along X.
    #[inline]
    pub const fn size_x(&self) -> usize {
        self.size_x
    }

    /// Entries along Y.
    #[inline]
    pub const fn size_y(&self) -> usize {
        self.size_y
    }

    /// Entries along Z.
    #[inline]
    pub const fn size_z(&self) -> usize {
        self.size_z
    }

    /// Total number of cube entries.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.size_x * self.size_y * self.size_z
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.size_x, self.size_y, self.size_z)
    }
}
