//! # pixref-math
//!
//! Small fixed-width vector math used by the reference kernels.
//!
//! - [`Rgba`] - 4 integer channels with byte-clamped `+`, `-`, `*` (blend arithmetic)
//! - [`Float4`] / [`Int4`] - 4-wide float and integer vectors ([`glam`] types)
//! - [`mix`], [`cubic_interpolate`] - interpolation
//! - [`byte_to_unit_float`], [`unit_float_to_byte`], [`clamp_to_byte`] - range conversions
//!
//! # Usage
//!
//! ```rust
//! use pixref_math::{mix, Float4, Rgba};
//!
//! let s = Rgba::new(200, 100, 50, 128);
//! let d = Rgba::new(100, 100, 100, 255);
//! let over = s + d * (255 - s.a);
//! assert_eq!(over, Rgba::new(249, 149, 99, 254));
//!
//! let m = mix(Float4::ZERO, Float4::splat(10.0), 0.5);
//! assert_eq!(m, Float4::splat(5.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - 4-wide vector storage and componentwise operators

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod interp;
mod rgba;

pub use convert::*;
pub use interp::*;
pub use rgba::Rgba;

/// 4-wide float vector.
pub type Float4 = glam::Vec4;

/// 4-wide signed integer vector.
pub type Int4 = glam::IVec4;
