use crate::errors::ShapeError;

/// Owned container of image samples.
///
/// Samples are stored row-major with interleaved channels: the sample of
/// channel `ch` at coordinate `(x, y)` lives at index
/// `(y * width + x) * channels + ch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: u32,
    samples: Vec<u8>,
}

impl PixelGrid {
    /// Creates a zero-filled grid with the given dimensions.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self, ShapeError> {
        let size = checked_samples_count(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            samples: vec![0; size],
        })
    }

    /// Creates a grid from a vector with samples data.
    ///
    /// The vector must hold at least `width * height * channels` bytes;
    /// extra bytes at the end are dropped.
    pub fn from_vec(
        width: u32,
        height: u32,
        channels: u32,
        mut samples: Vec<u8>,
    ) -> Result<Self, ShapeError> {
        let size = checked_samples_count(width, height, channels)?;
        if samples.len() < size {
            return Err(ShapeError::InsufficientCapacity);
        }
        samples.truncate(size);
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Creates a zero-filled grid with the dimensions of another grid.
    pub(crate) fn like(other: &Self) -> Self {
        Self {
            width: other.width,
            height: other.height,
            channels: other.channels,
            samples: vec![0; other.samples.len()],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Count of bytes in one row of the grid.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Buffer with image samples data.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Mutable buffer with image samples data.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.samples
    }

    /// Value of the sample of channel `ch` at coordinate `(x, y)`.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, ch: u32) -> u8 {
        let index = (y as usize * self.width as usize + x as usize) * self.channels as usize
            + ch as usize;
        self.samples[index]
    }

    #[inline]
    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let row_size = self.row_size();
        let start = y as usize * row_size;
        &self.samples[start..start + row_size]
    }
}

/// Returns count of samples implied by the dimensions after validating them.
pub(crate) fn checked_samples_count(
    width: u32,
    height: u32,
    channels: u32,
) -> Result<usize, ShapeError> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(ShapeError::ZeroDimension);
    }
    Ok(width as usize * height as usize * channels as usize)
}
