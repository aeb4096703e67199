//! # pixref-core
//!
//! Core types for the pixel reference engine.
//!
//! This crate provides the foundation every kernel and the validator build on:
//!
//! - [`Error`] / [`Result`] - error taxonomy (invalid argument, out of bounds, size mismatch)
//! - [`Restriction`] - half-open rectangle limiting which cells a kernel computes
//! - [`Dimension`] - shape of a 3D lookup cube
//! - [`Vector2dView`], [`Vector2dViewMut`], [`Vector2dArray`] - strided 2D vector arrays
//! - [`Rgba3dArray`] - RGBA lookup cube
//!
//! ## Crate Structure
//!
//! ```text
//! pixref-core (this crate)
//!    ^
//!    |
//!    +-- pixref-math (vector types, interpolation)
//!    +-- pixref-lut (1D / 3D lookup tables)
//!    +-- pixref-ops (image kernels)
//!    +-- pixref-validate (cross-implementation validator)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - derive serialization for [`Restriction`] and [`Dimension`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod array;
pub mod cube;
pub mod error;
pub mod range;

pub use array::{Vector2dArray, Vector2dView, Vector2dViewMut};
pub use cube::Rgba3dArray;
pub use error::{Error, Result};
pub use range::{
    cells, check_buffer_len, check_restriction, check_vector_size, for_each_cell, padded_vector_size,
    Cells, Dimension, Restriction,
};
