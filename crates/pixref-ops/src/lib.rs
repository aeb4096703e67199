//! # pixref-ops
//!
//! Bit-tolerant reference kernels for common image operations.
//!
//! Every kernel is a pure function: identical inputs always produce
//! identical outputs. Arguments are validated before any output is
//! allocated, so an `Err` means nothing was computed.
//!
//! # Modules
//!
//! - [`blend`] - Porter-Duff and arithmetic blending of RGBA buffers (in place)
//! - [`blur`] - separable Gaussian blur with restriction halo
//! - [`color_matrix`] - 4x4 column-major matrix plus add vector
//! - [`convolve`] - 3x3 and 5x5 convolution
//! - [`histogram`] - per-channel and dot-product histograms
//! - [`resize`] - bicubic resampling
//! - [`yuv`] - NV21 / YV12 to RGBA conversion
//! - [`error`] - [`OpsError`], wrapping core errors and adding kernel parameter failures
//!
//! The 1D and 3D lookup kernels live in `pixref-lut`.
//!
//! # Buffer layout
//!
//! Buffers are row-major, `size_x * size_y` cells of
//! `padded_vector_size(vector_size)` bytes each; three-channel data is stored
//! padded to four bytes per cell.
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::blur::blur;
//!
//! let input = vec![128u8; 3 * 4 * 4];
//! let out = blur(&input, 4, 3, 4, 1, None).unwrap();
//! assert_eq!(out, input);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blend;
pub mod blur;
pub mod color_matrix;
pub mod convolve;
pub mod error;
pub mod histogram;
pub mod resize;
pub mod yuv;

pub use blend::BlendMode;
pub use error::{OpsError, OpsResult};
pub use yuv::YuvFormat;
