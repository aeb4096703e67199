//! Blending of a source RGBA buffer into a destination RGBA buffer.
//!
//! Porter-Duff compositing plus three arithmetic modes, all evaluated with
//! 8-bit clamped fixed-point math ([`Rgba`]): `255` stands for 1.0 and
//! products are shifted right by 8.
//!
//! # Porter-Duff modes
//!
//! - [`BlendMode::SrcOver`] - `s + d * (255 - s.a)`
//! - [`BlendMode::SrcIn`] - `s * d.a`
//! - [`BlendMode::SrcAtop`] - `s * d.a + d * (255 - s.a)`, destination alpha kept
//! - [`BlendMode::Xor`] - `s * (255 - d.a) + d * (255 - s.a)`
//!
//! # Arithmetic modes
//!
//! - [`BlendMode::Multiply`] - `s * d`
//! - [`BlendMode::Add`] - `d + s`
//! - [`BlendMode::Subtract`] - `d - s`
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::blend::{blend, BlendMode};
//!
//! let src = vec![255u8, 0, 0, 255];
//! let mut dst = vec![0u8, 0, 255, 255];
//! blend(BlendMode::SrcOver, &src, &mut dst, 1, 1, None).unwrap();
//! assert_eq!(dst, vec![255, 0, 0, 255]);
//! ```

use crate::OpsResult;

use pixref_core::{check_buffer_len, check_restriction, Restriction, Vector2dView, Vector2dViewMut};
use pixref_math::Rgba;
use tracing::debug;

/// Blend mode applied per pixel as `f(source, destination)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// All channels set to zero.
    Clear,
    /// Source replaces destination.
    Src,
    /// Destination kept unchanged.
    Dst,
    /// Source over destination.
    SrcOver,
    /// Destination over source.
    DstOver,
    /// Source where destination is opaque.
    SrcIn,
    /// Destination where source is opaque.
    DstIn,
    /// Source where destination is transparent.
    SrcOut,
    /// Destination where source is transparent.
    DstOut,
    /// Source atop destination.
    SrcAtop,
    /// Destination atop source.
    DstAtop,
    /// Source and destination where the other is transparent.
    Xor,
    /// Componentwise product.
    Multiply,
    /// Componentwise sum.
    Add,
    /// Destination minus source.
    Subtract,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 15] = [
        Self::Clear,
        Self::Src,
        Self::Dst,
        Self::SrcOver,
        Self::DstOver,
        Self::SrcIn,
        Self::DstIn,
        Self::SrcOut,
        Self::DstOut,
        Self::SrcAtop,
        Self::DstAtop,
        Self::Xor,
        Self::Multiply,
        Self::Add,
        Self::Subtract,
    ];

    /// Upper-case name as used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::Src => "SRC",
            Self::Dst => "DST",
            Self::SrcOver => "SRC_OVER",
            Self::DstOver => "DST_OVER",
            Self::SrcIn => "SRC_IN",
            Self::DstIn => "DST_IN",
            Self::SrcOut => "SRC_OUT",
            Self::DstOut => "DST_OUT",
            Self::SrcAtop => "SRC_ATOP",
            Self::DstAtop => "DST_ATOP",
            Self::Xor => "XOR",
            Self::Multiply => "MULTIPLY",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
        }
    }

    /// Combines one source pixel with one destination pixel.
    #[inline]
    pub fn apply(self, s: Rgba, d: Rgba) -> Rgba {
        match self {
            Self::Clear => Rgba::TRANSPARENT,
            Self::Src => s,
            Self::Dst => d,
            Self::SrcOver => s + d * (255 - s.a),
            Self::DstOver => s * (255 - d.a) + d,
            Self::SrcIn => s * d.a,
            Self::DstIn => d * s.a,
            Self::SrcOut => s * (255 - d.a),
            Self::DstOut => d * (255 - s.a),
            Self::SrcAtop => (s * d.a + d * (255 - s.a)).with_alpha(d.a),
            Self::DstAtop => (d * s.a + s * (255 - d.a)).with_alpha(s.a),
            Self::Xor => s * (255 - d.a) + d * (255 - s.a),
            Self::Multiply => s * d,
            Self::Add => d + s,
            Self::Subtract => d - s,
        }
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Blends `source` into `destination` in place.
///
/// Both buffers hold `size_x * size_y` RGBA pixels. Only cells inside
/// `restriction` are written; every other destination byte is left exactly
/// as supplied. [`BlendMode::Dst`] never writes at all.
pub fn blend(
    mode: BlendMode,
    source: &[u8],
    destination: &mut [u8],
    size_x: usize,
    size_y: usize,
    restriction: Option<&Restriction>,
) -> OpsResult<()> {
    check_buffer_len("blend source", source.len(), 4, size_x, size_y)?;
    check_buffer_len("blend destination", destination.len(), 4, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    debug!(%mode, size_x, size_y, ?restriction, "blend");

    if mode == BlendMode::Dst {
        return Ok(());
    }

    let source = Vector2dView::new(source, 4, size_x, size_y)?;
    let mut destination = Vector2dViewMut::new(destination, 4, size_x, size_y)?;
    for (x, y) in destination.cells(restriction) {
        let s = Rgba::from_bytes(source.get_strict(x as i64, y as i64)?);
        let d = Rgba::from_bytes(destination.get_strict(x as i64, y as i64)?);
        destination.set(x, y, &mode.apply(s, d).to_bytes())?;
    }
    Ok(())
}
