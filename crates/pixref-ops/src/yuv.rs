//! YUV to RGBA conversion for NV21 and YV12 buffers.
//!
//! # Layouts
//!
//! ```text
//! NV21:  Y plane   size_x * size_y
//!        VU plane  interleaved V,U pairs, size_x bytes per chroma row
//!
//! YV12:  Y plane   size_x bytes per row, plane reserved as stride_x * size_y
//!        V plane   stride_uv bytes per chroma row
//!        U plane   stride_uv bytes per chroma row
//!
//!        stride_x  = round_up_16(size_x)
//!        stride_uv = round_up_16(stride_x / 2)
//! ```
//!
//! Chroma is subsampled 2x2: one V,U pair serves a 2x2 block of luma.
//!
//! # Known limitation
//!
//! The YV12 path reads luma rows at `size_x` stride while placing the chroma
//! planes after a `stride_x`-aligned luma plane. This matches the intrinsic
//! being mirrored, which disagrees with the documented Android layout when
//! `size_x` is not a multiple of 32. Results for such widths are expected to
//! diverge from other YV12 decoders.
//!
//! # Conversion
//!
//! BT.601 video range, integer approximation with `Y' = Y - 16`,
//! `U' = U - 128`, `V' = V - 128`:
//!
//! ```text
//! R = (298 Y' + 409 V' + 128) >> 8
//! G = (298 Y' - 100 U' - 208 V' + 128) >> 8
//! B = (298 Y' + 516 U' + 128) >> 8
//! A = 255
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixref_ops::yuv::{yuv_buffer_size, yuv_to_rgb, YuvFormat};
//!
//! let mut nv21 = vec![235u8; yuv_buffer_size(YuvFormat::Nv21, 4, 2).unwrap()];
//! nv21[8..].fill(128);
//! let rgba = yuv_to_rgb(&nv21, 4, 2, YuvFormat::Nv21, None).unwrap();
//! assert_eq!(&rgba[..4], &[255, 255, 255, 255]);
//! ```

use crate::{OpsError, OpsResult};

use pixref_core::{check_restriction, Restriction, Vector2dArray};
use tracing::debug;

/// Android `ImageFormat.NV21`.
pub const NV21_CODE: i32 = 0x11;
/// Android `ImageFormat.YV12`.
pub const YV12_CODE: i32 = 0x3231_5659;

/// Supported YUV buffer layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YuvFormat {
    /// Full Y plane followed by interleaved V/U pairs.
    Nv21,
    /// Full Y plane followed by a V plane and a U plane, 16-byte aligned strides.
    Yv12,
}

impl YuvFormat {
    /// Short upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nv21 => "NV21",
            Self::Yv12 => "YV12",
        }
    }
}

impl std::fmt::Display for YuvFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for YuvFormat {
    type Error = OpsError;

    /// Maps an Android `ImageFormat` code onto a layout.
    fn try_from(code: i32) -> OpsResult<Self> {
        match code {
            NV21_CODE => Ok(Self::Nv21),
            YV12_CODE => Ok(Self::Yv12),
            other => Err(OpsError::invalid_parameter(format!(
                "unsupported YUV format 0x{other:x}"
            ))),
        }
    }
}

#[inline]
const fn round_up_16(v: usize) -> usize {
    (v + 15) & !15
}

/// Byte offsets of the three planes plus the chroma addressing for one format.
#[derive(Debug, Clone, Copy)]
struct Planes {
    format: YuvFormat,
    size_x: usize,
    v_start: usize,
    u_start: usize,
    chroma_stride: usize,
    len: usize,
}

impl Planes {
    fn new(format: YuvFormat, size_x: usize, size_y: usize) -> OpsResult<Self> {
        if size_x == 0 || size_y == 0 {
            return Err(OpsError::invalid_parameter(format!(
                "{format}: dimensions must be non-zero, got {size_x}x{size_y}"
            )));
        }
        if size_x % 2 != 0 {
            return Err(OpsError::invalid_parameter(format!(
                "{format}: width must be even, got {size_x}"
            )));
        }
        let chroma_rows = size_y.div_ceil(2);
        let planes = match format {
            YuvFormat::Nv21 => {
                let v_start = size_x * size_y;
                Self {
                    format,
                    size_x,
                    v_start,
                    u_start: v_start + 1,
                    chroma_stride: size_x,
                    len: v_start + size_x * chroma_rows,
                }
            }
            YuvFormat::Yv12 => {
                let stride_x = round_up_16(size_x);
                let stride_uv = round_up_16(stride_x / 2);
                let v_start = stride_x * size_y;
                let u_start = v_start + stride_uv * chroma_rows;
                Self {
                    format,
                    size_x,
                    v_start,
                    u_start,
                    chroma_stride: stride_uv,
                    len: u_start + stride_uv * chroma_rows,
                }
            }
        };
        Ok(planes)
    }

    #[inline]
    fn luma(&self, x: usize, y: usize) -> usize {
        y * self.size_x + x
    }

    /// Offset of the chroma sample for `(x, y)` relative to a plane start.
    #[inline]
    fn chroma(&self, x: usize, y: usize) -> usize {
        let row = (y >> 1) * self.chroma_stride;
        match self.format {
            YuvFormat::Nv21 => row + (x >> 1) * 2,
            YuvFormat::Yv12 => row + (x >> 1),
        }
    }
}

/// Minimum input length for a `size_x` x `size_y` buffer in `format`.
pub fn yuv_buffer_size(format: YuvFormat, size_x: usize, size_y: usize) -> OpsResult<usize> {
    Ok(Planes::new(format, size_x, size_y)?.len)
}

/// Converts one Y, U, V triplet to opaque RGBA.
///
/// ```rust
/// use pixref_ops::yuv::yuv_to_rgba_pixel;
///
/// assert_eq!(yuv_to_rgba_pixel(16, 128, 128), [0, 0, 0, 255]);
/// assert_eq!(yuv_to_rgba_pixel(235, 128, 128), [255, 255, 255, 255]);
/// ```
#[inline]
pub fn yuv_to_rgba_pixel(y: u8, u: u8, v: u8) -> [u8; 4] {
    let y = y as i32 - 16;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let clamp = |c: i32| c.clamp(0, 255) as u8;
    [
        clamp((298 * y + 409 * v + 128) >> 8),
        clamp((298 * y - 100 * u - 208 * v + 128) >> 8),
        clamp((298 * y + 516 * u + 128) >> 8),
        255,
    ]
}

/// Converts a `size_x` x `size_y` YUV buffer to RGBA.
///
/// The result holds `size_x * size_y * 4` bytes; cells outside
/// `restriction` are zero. `input` must hold at least
/// [`yuv_buffer_size`] bytes and `size_x` must be even.
pub fn yuv_to_rgb(
    input: &[u8],
    size_x: usize,
    size_y: usize,
    format: YuvFormat,
    restriction: Option<&Restriction>,
) -> OpsResult<Vec<u8>> {
    let planes = Planes::new(format, size_x, size_y)?;
    if input.len() < planes.len {
        return Err(OpsError::invalid_parameter(format!(
            "{format}: {size_x}x{size_y} needs {} bytes, got {}",
            planes.len,
            input.len()
        )));
    }
    check_restriction(restriction, size_x, size_y)?;
    debug!(%format, size_x, size_y, ?restriction, "yuv_to_rgb");

    let mut output = Vector2dArray::<u8>::zeroed(4, size_x, size_y);
    for (x, y) in output.cells(restriction) {
        let chroma = planes.chroma(x, y);
        let px = yuv_to_rgba_pixel(
            input[planes.luma(x, y)],
            input[planes.u_start + chroma],
            input[planes.v_start + chroma],
        );
        output.set(x, y, &px)?;
    }
    Ok(output.into_values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(yuv_buffer_size(YuvFormat::Nv21, 4, 2).unwrap(), 12);
        assert_eq!(yuv_buffer_size(YuvFormat::Nv21, 4, 3).unwrap(), 12 + 8);
        // stride_x 16, stride_uv 16, two chroma rows per plane
        assert_eq!(yuv_buffer_size(YuvFormat::Yv12, 4, 4).unwrap(), 64 + 32 + 32);
        // stride_x 48, stride_uv 32
        assert_eq!(yuv_buffer_size(YuvFormat::Yv12, 34, 2).unwrap(), 96 + 32 + 32);
    }

    #[test]
    fn test_odd_width_rejected() {
        let err = yuv_to_rgb(&[0; 64], 3, 2, YuvFormat::Nv21, None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(yuv_buffer_size(YuvFormat::Yv12, 5, 2).is_err());
    }

    #[test]
    fn test_short_input_rejected() {
        let err = yuv_to_rgb(&[0; 11], 4, 2, YuvFormat::Nv21, None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_format_codes() {
        assert_eq!(YuvFormat::try_from(NV21_CODE).unwrap(), YuvFormat::Nv21);
        assert_eq!(YuvFormat::try_from(YV12_CODE).unwrap(), YuvFormat::Yv12);
        assert!(YuvFormat::try_from(0x23).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_pixel_formula() {
        // Pure red in BT.601 video range.
        let [r, g, b, a] = yuv_to_rgba_pixel(81, 90, 240);
        assert!(r >= 253, "r = {r}");
        assert!(g <= 2 && b <= 2, "g = {g}, b = {b}");
        assert_eq!(a, 255);
    }

    #[test]
    fn test_nv21_chroma_addressing() {
        // 4x2: two chroma pairs, left pair V=240 U=90, right pair neutral.
        let mut input = vec![81u8; 8];
        input.extend_from_slice(&[240, 90, 128, 128]);
        let out = yuv_to_rgb(&input, 4, 2, YuvFormat::Nv21, None).unwrap();
        for y in 0..2 {
            for x in 0..4 {
                let i = (y * 4 + x) * 4;
                let red = out[i] > 250;
                assert_eq!(red, x < 2, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_yv12_planes() {
        let (sx, sy) = (4, 4);
        let mut input = vec![0u8; yuv_buffer_size(YuvFormat::Yv12, sx, sy).unwrap()];
        input[..sx * sy].fill(81);
        let v_start = 16 * sy;
        let u_start = v_start + 16 * 2;
        input[v_start..u_start].fill(128);
        input[u_start..].fill(128);
        // Bottom-right 2x2 block turns red.
        input[v_start + 16 + 1] = 240;
        input[u_start + 16 + 1] = 90;
        let out = yuv_to_rgb(&input, sx, sy, YuvFormat::Yv12, None).unwrap();
        let red_at = |x: usize, y: usize| out[(y * sx + x) * 4] > 250;
        assert!(red_at(3, 3) && red_at(2, 2));
        assert!(!red_at(1, 3) && !red_at(3, 1));
    }

    #[test]
    fn test_restriction() {
        let mut input = vec![235u8; 12];
        input[8..].fill(128);
        let r = Restriction::new(2, 4, 1, 2);
        let out = yuv_to_rgb(&input, 4, 2, YuvFormat::Nv21, Some(&r)).unwrap();
        assert_eq!(&out[..24], &[0; 24]);
        assert_eq!(&out[24..], &[255; 8]);
    }
}
