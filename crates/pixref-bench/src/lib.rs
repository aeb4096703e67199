//! Shared inputs for the pixref benchmarks.
//!
//! Run with: `cargo bench -p pixref-bench`

use pixref_core::{Dimension, Rgba3dArray};
use pixref_lut::LookupTable;
use pixref_ops::yuv::YuvFormat;
use pixref_validate::random::{random_cube, random_image, random_lookup_table, random_yuv};
use pixref_validate::ValidateResult;

/// Square image sizes every kernel is measured at.
pub const SIZES: [usize; 3] = [64, 256, 1024];

/// Seeded inputs for one image size.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Width and height in cells
    pub size: usize,
    /// Single-channel image
    pub gray: Vec<u8>,
    /// RGBA image
    pub rgba: Vec<u8>,
    /// Second RGBA image, used as the blend destination
    pub rgba_dst: Vec<u8>,
    /// NV21 buffer of the same size
    pub nv21: Vec<u8>,
    /// YV12 buffer of the same size
    pub yv12: Vec<u8>,
    /// Random 1D table
    pub table: LookupTable,
    /// Random 17x17x17 cube
    pub cube: Rgba3dArray,
}

impl Fixture {
    /// Builds every input for a `size` x `size` image.
    pub fn new(size: usize) -> ValidateResult<Self> {
        Ok(Self {
            size,
            gray: random_image(1, 1, size, size)?,
            rgba: random_image(2, 4, size, size)?,
            rgba_dst: random_image(3, 4, size, size)?,
            nv21: random_yuv(4, YuvFormat::Nv21, size, size)?,
            yv12: random_yuv(5, YuvFormat::Yv12, size, size)?,
            table: random_lookup_table(6),
            cube: random_cube(7, Dimension::new(17, 17, 17)?)?,
        })
    }

    /// Cells per image, for throughput reporting.
    pub fn cells(&self) -> u64 {
        (self.size * self.size) as u64
    }
}
