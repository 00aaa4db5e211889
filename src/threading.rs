//! Processing of image rows in `rayon` thread pool.

use rayon::prelude::*;

/// Runs `row_op` for every row of the samples buffer.
///
/// Rows are disjoint slices of the buffer, so no synchronization between
/// them is required.
pub(crate) fn for_each_row_mut<F>(samples: &mut [u8], row_size: usize, row_op: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    samples
        .par_chunks_mut(row_size)
        .enumerate()
        .for_each(|(y, row)| row_op(y, row));
}
