//! Native implementation of the 3×3 convolution.

use crate::filterer::EdgePolicy;
use crate::kernel::FilterKernel;
use crate::pixel_grid::PixelGrid;

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use crate::threading::for_each_row_mut;
    } else {
        fn for_each_row_mut<F>(samples: &mut [u8], row_size: usize, row_op: F)
        where
            F: Fn(usize, &mut [u8]) + Send + Sync,
        {
            for (y, row) in samples.chunks_mut(row_size).enumerate() {
                row_op(y, row);
            }
        }
    }
}

/// Computes all samples of the destination grid from the source grid.
///
/// Grids must have identical dimensions. Output rows are independent of
/// each other, so they may be computed in any order or in parallel.
pub(crate) fn convolve_grid(
    src: &PixelGrid,
    dst: &mut PixelGrid,
    kernel: &FilterKernel,
    edge_policy: EdgePolicy,
) {
    let row_size = src.row_size();
    for_each_row_mut(dst.samples_mut(), row_size, |y, dst_row| {
        convolve_row(src, y as u32, kernel, edge_policy, dst_row);
    });
}

fn convolve_row(
    src: &PixelGrid,
    y: u32,
    kernel: &FilterKernel,
    edge_policy: EdgePolicy,
    dst_row: &mut [u8],
) {
    let width = src.width() as i64;
    let channels = src.channels() as usize;
    let weights = kernel.weights();
    let divisor = kernel.divisor() as f64;
    let y = y as i64;

    let rows = [
        resolve_row(src, y - 1, edge_policy),
        resolve_row(src, y, edge_policy),
        resolve_row(src, y + 1, edge_policy),
    ];

    for x in 0..width {
        for ch in 0..channels {
            let mut sum = 0f64;
            for (weights_row, row) in weights.iter().zip(&rows) {
                let Some(row) = row else {
                    continue;
                };
                for (dx, &weight) in (-1i64..=1).zip(weights_row.iter()) {
                    if let Some(src_x) = resolve_coord(x + dx, width, edge_policy) {
                        sum += weight as f64 * row[src_x * channels + ch] as f64;
                    }
                }
            }
            // Round half away from zero, saturate instead of wrapping.
            let value = (sum / divisor).round();
            dst_row[x as usize * channels + ch] = value.clamp(0., 255.) as u8;
        }
    }
}

fn resolve_row(src: &PixelGrid, y: i64, edge_policy: EdgePolicy) -> Option<&[u8]> {
    resolve_coord(y, src.height() as i64, edge_policy).map(|y| src.row(y as u32))
}

/// Maps a possibly out-of-range coordinate to a source index
/// according to the edge policy.
#[inline]
fn resolve_coord(value: i64, size: i64, edge_policy: EdgePolicy) -> Option<usize> {
    if (0..size).contains(&value) {
        Some(value as usize)
    } else {
        match edge_policy {
            EdgePolicy::Replicate => Some(value.clamp(0, size - 1) as usize),
            EdgePolicy::Zero => None,
        }
    }
}
