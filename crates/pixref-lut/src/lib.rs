//! # pixref-lut
//!
//! Lookup-table reference kernels over RGBA byte buffers.
//!
//! - [`LookupTable`] + [`lut`] - four independent 256-entry channel remaps
//! - [`LutError`] - table size errors plus wrapped core errors
//! - [`lut3d`] - trilinear interpolation inside an [`Rgba3dArray`](pixref_core::Rgba3dArray)
//!
//! # Usage
//!
//! ```rust
//! use pixref_core::{Dimension, Rgba3dArray};
//! use pixref_lut::{lut, lut3d, LookupTable};
//!
//! let input = vec![10u8, 20, 30, 40, 200, 150, 100, 50];
//!
//! let out = lut(&input, 2, 1, &LookupTable::identity(), None).unwrap();
//! assert_eq!(out, input);
//!
//! let cube = Rgba3dArray::identity(Dimension::new(17, 17, 17).unwrap());
//! let out = lut3d(&input, 2, 1, &cube, None).unwrap();
//! assert_eq!(out[3], 40); // alpha passes through
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut1d;
mod lut3d;

pub use error::{LutError, LutResult};
pub use lut1d::{lut, LookupTable};
pub use lut3d::lut3d;
