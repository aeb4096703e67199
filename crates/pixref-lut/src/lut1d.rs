//! Per-channel 1D lookup.
//!
//! Each of the four RGBA channels is replaced by `table[channel][value]`.
//! Channels never mix.

use crate::{LutError, LutResult};

use pixref_core::{check_buffer_len, check_restriction, Restriction, Vector2dArray, Vector2dView};
use tracing::debug;

/// Four independent 256-entry byte tables, one per RGBA channel.
///
/// # Example
///
/// ```rust
/// use pixref_lut::LookupTable;
///
/// let mut table = LookupTable::identity();
/// table.red = std::array::from_fn(|i| 255 - i as u8);
/// assert_eq!(table.apply([0, 1, 2, 3]), [255, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    /// Red channel table
    pub red: [u8; 256],
    /// Green channel table
    pub green: [u8; 256],
    /// Blue channel table
    pub blue: [u8; 256],
    /// Alpha channel table
    pub alpha: [u8; 256],
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl LookupTable {
    /// Tables mapping every value onto itself.
    pub fn identity() -> Self {
        let ramp: [u8; 256] = std::array::from_fn(|i| i as u8);
        Self {
            red: ramp,
            green: ramp,
            blue: ramp,
            alpha: ramp,
        }
    }

    /// Builds tables from a flat buffer of 1024 entries: all 256 red
    /// entries first, then green, blue and alpha.
    pub fn from_slice(values: &[u8]) -> LutResult<Self> {
        if values.len() != 4 * 256 {
            return Err(LutError::InvalidSize {
                expected: 4 * 256,
                actual: values.len(),
            });
        }
        let channel = |c: usize| std::array::from_fn(|i| values[c * 256 + i]);
        Ok(Self {
            red: channel(0),
            green: channel(1),
            blue: channel(2),
            alpha: channel(3),
        })
    }

    /// Remaps one RGBA pixel.
    #[inline]
    pub fn apply(&self, px: [u8; 4]) -> [u8; 4] {
        [
            self.red[px[0] as usize],
            self.green[px[1] as usize],
            self.blue[px[2] as usize],
            self.alpha[px[3] as usize],
        ]
    }
}

/// Applies `table` to every RGBA pixel of `input` inside `restriction`.
///
/// `input` holds `size_x * size_y` RGBA pixels. Cells outside the
/// restriction are zero in the returned buffer.
pub fn lut(
    input: &[u8],
    size_x: usize,
    size_y: usize,
    table: &LookupTable,
    restriction: Option<&Restriction>,
) -> LutResult<Vec<u8>> {
    check_buffer_len("lut", input.len(), 4, size_x, size_y)?;
    check_restriction(restriction, size_x, size_y)?;
    debug!(size_x, size_y, ?restriction, "lut");

    let input = Vector2dView::new(input, 4, size_x, size_y)?;
    let mut output = Vector2dArray::<u8>::zeroed(4, size_x, size_y);
    for (x, y) in output.cells(restriction) {
        let px = input.get_strict(x as i64, y as i64)?;
        output.set(x, y, &table.apply([px[0], px[1], px[2], px[3]]))?;
    }
    Ok(output.into_values())
}
