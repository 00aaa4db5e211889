use crate::convolution::convolve_grid;
use crate::errors::{FilterError, ShapeError};
use crate::kernel::FilterKernel;
use crate::packing::{self, PackedWord, SAMPLES_PER_WORD};
use crate::pixel_grid::{checked_samples_count, PixelGrid};

/// Rule for resolving samples outside of the image boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Coordinates outside of the image are clamped to the nearest
    /// edge sample. Minimizes visual artifacts near the borders.
    Replicate,
    /// Samples outside of the image contribute zero to the weighted sum.
    Zero,
}

impl Default for EdgePolicy {
    fn default() -> Self {
        EdgePolicy::Replicate
    }
}

/// Methods of this structure are used to filter images.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filterer {
    pub edge_policy: EdgePolicy,
}

impl Filterer {
    pub fn new(edge_policy: EdgePolicy) -> Self {
        Self { edge_policy }
    }

    /// Filters the source grid with the kernel and returns the result.
    ///
    /// Every output sample is `clamp(round(sum / divisor), 0, 255)`, where
    /// `sum` is the weighted sum of the 3×3 neighborhood of the sample and
    /// rounding is half away from zero. Channels are filtered independently
    /// with the same weights. The source grid is never mutated and no state
    /// is kept between invocations.
    pub fn filter(&self, src: &PixelGrid, kernel: &FilterKernel) -> PixelGrid {
        let mut dst = PixelGrid::like(src);
        convolve_grid(src, &mut dst, kernel, self.edge_policy);
        dst
    }

    /// Filters an image delivered as a packed words buffer and writes the
    /// result into the destination words buffer.
    ///
    /// Both buffers must hold at least `width * height * channels` samples.
    /// All parameters are validated before any write to the destination
    /// buffer, so no partial output is produced on error.
    pub fn filter_packed(
        &self,
        src_words: &[PackedWord],
        dst_words: &mut [PackedWord],
        kernel: &FilterKernel,
        width: u32,
        height: u32,
        channels: u32,
    ) -> Result<(), FilterError> {
        let samples_count = checked_samples_count(width, height, channels)?;
        if dst_words.len() * SAMPLES_PER_WORD < samples_count {
            return Err(ShapeError::InsufficientCapacity.into());
        }
        let src = packing::unpack(src_words, width, height, channels)?;
        let dst = self.filter(&src, kernel);
        packing::pack_into(&dst, dst_words)?;
        Ok(())
    }
}

/// Filters a packed image with raw filter parameters.
///
/// Entry point that matches the streaming interface contract: packed input
/// and output buffers, a 3×3 array of weights, a divisor and the image
/// dimensions. Uses the default edge policy ([EdgePolicy::Replicate]).
pub fn filter_packed_image(
    src_words: &[PackedWord],
    dst_words: &mut [PackedWord],
    weights: [[f32; 3]; 3],
    divisor: f32,
    width: u32,
    height: u32,
    channels: u32,
) -> Result<(), FilterError> {
    let kernel = FilterKernel::new(weights, divisor)?;
    Filterer::default().filter_packed(src_words, dst_words, &kernel, width, height, channels)
}
