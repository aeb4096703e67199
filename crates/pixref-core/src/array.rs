//! Strided 2D arrays of fixed-width vectors.
//!
//! A buffer of `size_x * size_y` cells, each holding `vector_size` components
//! stored contiguously, rows laid out top to bottom:
//!
//! ```text
//! Memory: [c0 c1 c2 c3][c0 c1 c2 c3] ...  ← row 0, vector_size = 4
//!         [c0 c1 c2 c3][c0 c1 c2 c3] ...  ← row 1
//! ```
//!
//! The `vector_size` stored here is the *padded* size: callers holding
//! three-channel data pass `padded_vector_size(3) == 4`.
//!
//! # Types
//!
//! - [`Vector2dView`] - borrowed, read-only (kernel inputs)
//! - [`Vector2dViewMut`] - borrowed, writable (in-place kernels)
//! - [`Vector2dArray`] - owned (kernel outputs and float scratch buffers)
//!
//! # Access contracts
//!
//! Reads come in two explicit flavours rather than a mode flag:
//!
//! - `get_strict` fails with [`Error::OutOfBounds`] outside the extent
//! - `get_clamped` replicates the nearest edge cell (sliding windows)
//!
//! ```rust
//! use pixref_core::Vector2dView;
//!
//! let data = [1u8, 2, 3, 4, 5, 6];
//! let view = Vector2dView::new(&data, 1, 3, 2).unwrap();
//! assert_eq!(view.get_clamped(-5, 0), &[1]);
//! assert_eq!(view.get_clamped(9, 9), &[6]);
//! assert!(view.get_strict(3, 0).is_err());
//! ```

use crate::range::{cells, for_each_cell, Cells};
use crate::{Error, Restriction, Result};

/// Shape shared by all array flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    vector_size: usize,
    size_x: usize,
    size_y: usize,
}

impl Layout {
    fn new(len: usize, vector_size: usize, size_x: usize, size_y: usize) -> Result<Self> {
        if vector_size == 0 {
            return Err(Error::invalid_argument("vector size must be at least 1"));
        }
        let expected = size_x * size_y * vector_size;
        if len != expected {
            return Err(Error::size_mismatch(expected, len));
        }
        Ok(Self {
            vector_size,
            size_x,
            size_y,
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.size_x * self.size_y * self.vector_size
    }

    #[inline]
    fn start(&self, x: usize, y: usize) -> usize {
        (y * self.size_x + x) * self.vector_size
    }

    #[inline]
    fn in_range(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size_x && (y as usize) < self.size_y
    }

    #[inline]
    fn check(&self, x: i64, y: i64) -> Result<usize> {
        if self.in_range(x, y) {
            Ok(self.start(x as usize, y as usize))
        } else {
            Err(Error::out_of_bounds(x, y, self.size_x, self.size_y))
        }
    }

    #[inline]
    fn clamped(&self, x: i64, y: i64) -> usize {
        let cx = x.clamp(0, self.size_x as i64 - 1) as usize;
        let cy = y.clamp(0, self.size_y as i64 - 1) as usize;
        self.start(cx, cy)
    }
}

macro_rules! shape_accessors {
    () => {
        /// Stored components per cell (already padded).
        #[inline]
        pub fn vector_size(&self) -> usize {
            self.layout.vector_size
        }

        /// Width in cells.
        #[inline]
        pub fn size_x(&self) -> usize {
            self.layout.size_x
        }

        /// Height in cells.
        #[inline]
        pub fn size_y(&self) -> usize {
            self.layout.size_y
        }

        /// Row-major cells of `restriction`, or of the full extent.
        #[inline]
        pub fn cells(&self, restriction: Option<&Restriction>) -> Cells {
            cells(self.layout.size_x, self.layout.size_y, restriction)
        }

        /// Visits every cell of `restriction` (or the full extent) row-major.
        #[inline]
        pub fn for_each<F>(&self, restriction: Option<&Restriction>, work: F)
        where
            F: FnMut(usize, usize),
        {
            for_each_cell(self.layout.size_x, self.layout.size_y, restriction, work);
        }
    };
}

/// Read-only view over a borrowed buffer.
#[derive(Debug, Clone, Copy)]
pub struct Vector2dView<'a, T> {
    values: &'a [T],
    layout: Layout,
}

impl<'a, T: Copy> Vector2dView<'a, T> {
    /// Wraps `values`; its length must be `size_x * size_y * vector_size`.
    pub fn new(values: &'a [T], vector_size: usize, size_x: usize, size_y: usize) -> Result<Self> {
        let layout = Layout::new(values.len(), vector_size, size_x, size_y)?;
        Ok(Self { values, layout })
    }

    shape_accessors!();

    /// The underlying buffer.
    #[inline]
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Vector at `(x, y)`, failing outside the extent.
    #[inline]
    pub fn get_strict(&self, x: i64, y: i64) -> Result<&'a [T]> {
        let start = self.layout.check(x, y)?;
        Ok(&self.values[start..start + self.layout.vector_size])
    }

    /// Vector at `(x, y)` with coordinates clamped to the nearest edge cell.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> &'a [T] {
        let start = self.layout.clamped(x, y);
        &self.values[start..start + self.layout.vector_size]
    }

    /// Converts every component with `f` into a new owned array of the same shape.
    pub fn map<U, F>(&self, f: F) -> Vector2dArray<U>
    where
        F: Fn(T) -> U,
    {
        Vector2dArray {
            values: self.values.iter().map(|&v| f(v)).collect(),
            layout: self.layout,
        }
    }
}

/// Writable view over a borrowed buffer.
#[derive(Debug)]
pub struct Vector2dViewMut<'a, T> {
    values: &'a mut [T],
    layout: Layout,
}

impl<'a, T: Copy> Vector2dViewMut<'a, T> {
    /// Wraps `values`; its length must be `size_x * size_y * vector_size`.
    pub fn new(values: &'a mut [T], vector_size: usize, size_x: usize, size_y: usize) -> Result<Self> {
        let layout = Layout::new(values.len(), vector_size, size_x, size_y)?;
        Ok(Self { values, layout })
    }

    shape_accessors!();

    /// Vector at `(x, y)`, failing outside the extent.
    #[inline]
    pub fn get_strict(&self, x: i64, y: i64) -> Result<&[T]> {
        let start = self.layout.check(x, y)?;
        Ok(&self.values[start..start + self.layout.vector_size])
    }

    /// Overwrites the vector at `(x, y)`.
    ///
    /// `value` must be exactly `vector_size` long and the cell must exist.
    pub fn set(&mut self, x: usize, y: usize, value: &[T]) -> Result<()> {
        set_cell(self.values, &self.layout, x, y, value)
    }
}

/// Owned array, used for kernel outputs and float intermediates.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector2dArray<T> {
    values: Vec<T>,
    layout: Layout,
}

impl<T: Copy + Default> Vector2dArray<T> {
    /// Array of default-valued (zero) components.
    pub fn zeroed(vector_size: usize, size_x: usize, size_y: usize) -> Self {
        let layout = Layout {
            vector_size,
            size_x,
            size_y,
        };
        Self {
            values: vec![T::default(); layout.len()],
            layout,
        }
    }

    /// Zeroed array with the same shape as `self`.
    pub fn same_sized(&self) -> Self {
        Self {
            values: vec![T::default(); self.values.len()],
            layout: self.layout,
        }
    }
}

impl<T: Copy> Vector2dArray<T> {
    /// Takes ownership of `values`; its length must match the shape.
    pub fn from_vec(values: Vec<T>, vector_size: usize, size_x: usize, size_y: usize) -> Result<Self> {
        let layout = Layout::new(values.len(), vector_size, size_x, size_y)?;
        Ok(Self { values, layout })
    }

    shape_accessors!();

    /// Borrowed read-only view.
    #[inline]
    pub fn view(&self) -> Vector2dView<'_, T> {
        Vector2dView {
            values: &self.values,
            layout: self.layout,
        }
    }

    /// The underlying buffer.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consumes the array, returning its buffer.
    #[inline]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Vector at `(x, y)`, failing outside the extent.
    #[inline]
    pub fn get_strict(&self, x: i64, y: i64) -> Result<&[T]> {
        let start = self.layout.check(x, y)?;
        Ok(&self.values[start..start + self.layout.vector_size])
    }

    /// Vector at `(x, y)` with coordinates clamped to the nearest edge cell.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> &[T] {
        let start = self.layout.clamped(x, y);
        &self.values[start..start + self.layout.vector_size]
    }

    /// Mutable vector at `(x, y)`, failing outside the extent.
    #[inline]
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut [T]> {
        let start = self.layout.check(x as i64, y as i64)?;
        Ok(&mut self.values[start..start + self.layout.vector_size])
    }

    /// Overwrites the vector at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: &[T]) -> Result<()> {
        set_cell(&mut self.values, &self.layout, x, y, value)
    }
}

fn set_cell<T: Copy>(values: &mut [T], layout: &Layout, x: usize, y: usize, value: &[T]) -> Result<()> {
    if value.len() != layout.vector_size {
        return Err(Error::invalid_argument(format!(
            "expected a vector of {} components, got {}",
            layout.vector_size,
            value.len()
        )));
    }
    let start = layout.check(x as i64, y as i64)?;
    values[start..start + layout.vector_size].copy_from_slice(value);
    Ok(())
}
