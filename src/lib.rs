#![doc = include_str!("../README.md")]

pub use errors::{ConfigError, FilterError, ShapeError};
pub use filterer::{filter_packed_image, EdgePolicy, Filterer};
pub use kernel::FilterKernel;
pub use packing::{pack, pack_into, unpack, words_for_samples, PackedWord, SAMPLES_PER_WORD};
pub use pixel_grid::PixelGrid;

mod convolution;
mod errors;
mod filterer;
mod kernel;
mod packing;
mod pixel_grid;
#[cfg(feature = "for_testing")]
pub mod testing;
#[cfg(feature = "rayon")]
mod threading;
