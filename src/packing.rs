//! Conversion between pixel grids and the packed-word stream format.

use crate::errors::ShapeError;
use crate::pixel_grid::{checked_samples_count, PixelGrid};

/// One word of the packed stream format.
///
/// Sample `i` of the flattened row-major sample sequence occupies byte
/// `i % 16` of word `i / 16`, least significant byte first.
pub type PackedWord = u128;

/// Count of one-byte samples held by one [PackedWord].
pub const SAMPLES_PER_WORD: usize = 16;

/// Returns count of packed words required to hold `samples_count` samples.
#[inline]
pub fn words_for_samples(samples_count: usize) -> usize {
    samples_count.div_ceil(SAMPLES_PER_WORD)
}

/// Packs samples of the grid into a new vector of words.
///
/// Length of the result is `ceil(samples / 16)`. Unused trailing bytes of
/// the last word are zero.
pub fn pack(grid: &PixelGrid) -> Vec<PackedWord> {
    let mut words = vec![0; words_for_samples(grid.samples().len())];
    pack_samples(grid.samples(), &mut words);
    words
}

/// Packs samples of the grid into the words buffer provided by the caller.
///
/// Unused trailing bytes of the last used word are set to zero; words after
/// it are left untouched.
pub fn pack_into(grid: &PixelGrid, words: &mut [PackedWord]) -> Result<(), ShapeError> {
    let samples = grid.samples();
    if words.len() * SAMPLES_PER_WORD < samples.len() {
        return Err(ShapeError::InsufficientCapacity);
    }
    pack_samples(samples, words);
    Ok(())
}

fn pack_samples(samples: &[u8], words: &mut [PackedWord]) {
    for (chunk, word) in samples.chunks(SAMPLES_PER_WORD).zip(words) {
        let mut bytes = [0u8; SAMPLES_PER_WORD];
        bytes[..chunk.len()].copy_from_slice(chunk);
        *word = PackedWord::from_le_bytes(bytes);
    }
}

/// Unpacks a pixel grid with the given dimensions from the words buffer.
///
/// The buffer must hold at least `width * height * channels` samples;
/// extra words at the end are ignored.
pub fn unpack(
    words: &[PackedWord],
    width: u32,
    height: u32,
    channels: u32,
) -> Result<PixelGrid, ShapeError> {
    let size = checked_samples_count(width, height, channels)?;
    if words.len() * SAMPLES_PER_WORD < size {
        return Err(ShapeError::InsufficientCapacity);
    }
    let mut samples = Vec::with_capacity(size);
    for word in words {
        let rest = size - samples.len();
        if rest == 0 {
            break;
        }
        let bytes = word.to_le_bytes();
        samples.extend_from_slice(&bytes[..rest.min(SAMPLES_PER_WORD)]);
    }
    PixelGrid::from_vec(width, height, channels, samples)
}
