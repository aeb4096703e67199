//! RGBA vector with 8-bit clamped arithmetic.
//!
//! Models the fixed-point math of the blend intrinsic: every channel is an
//! integer conceptually in `[0, 255]`, results are clamped back into that
//! range after each operation, and multiplication treats 255 as roughly 1.0
//! by shifting the product right by 8.

use std::ops::{Add, Mul, Sub};

/// Four integer channels clamped to `[0, 255]` after every operation.
///
/// # Example
///
/// ```rust
/// use pixref_math::Rgba;
///
/// let a = Rgba::new(200, 10, 0, 255);
/// let b = Rgba::new(100, 20, 5, 255);
/// assert_eq!(a + b, Rgba::new(255, 30, 5, 255));
/// assert_eq!(b - a, Rgba::new(0, 10, 5, 0));
/// assert_eq!(a * 128, Rgba::new(100, 5, 0, 127));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    /// Red
    pub r: i32,
    /// Green
    pub g: i32,
    /// Blue
    pub b: i32,
    /// Alpha
    pub a: i32,
}

#[inline]
fn clamp_channel(v: i32) -> i32 {
    v.clamp(0, 255)
}

impl Rgba {
    /// All channels zero.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a vector without clamping.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }

    /// Reads the first four bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` has fewer than four elements.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(
            bytes[0] as i32,
            bytes[1] as i32,
            bytes[2] as i32,
            bytes[3] as i32,
        )
    }

    /// Clamps every channel into `[0, 255]` and narrows to bytes.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            clamp_channel(self.r) as u8,
            clamp_channel(self.g) as u8,
            clamp_channel(self.b) as u8,
            clamp_channel(self.a) as u8,
        ]
    }

    /// Same color with alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: i32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    #[inline]
    fn map2(self, o: Self, f: impl Fn(i32, i32) -> i32) -> Self {
        Self::new(
            clamp_channel(f(self.r, o.r)),
            clamp_channel(f(self.g, o.g)),
            clamp_channel(f(self.b, o.b)),
            clamp_channel(f(self.a, o.a)),
        )
    }
}

impl Add for Rgba {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a + b)
    }
}

impl Sub for Rgba {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a - b)
    }
}

impl Mul for Rgba {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| (a * b) >> 8)
    }
}

impl Mul<i32> for Rgba {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        self * Self::new(rhs, rhs, rhs, rhs)
    }
}
