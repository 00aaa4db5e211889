//! Constructors of sample images for tests and benchmarks.
//!
//! Every function returns a freshly built [PixelGrid], so fixtures are
//! independent and repeatable.

use std::fmt::Write;

use crate::pixel_grid::PixelGrid;

pub fn zeros(width: u32, height: u32, channels: u32) -> PixelGrid {
    filled(width, height, channels, 0)
}

pub fn filled(width: u32, height: u32, channels: u32, value: u8) -> PixelGrid {
    grid_from_fn(width, height, channels, |_, _| value)
}

/// Brightness grows from 0 at the left edge to 255 at the right edge.
pub fn horizontal_gradient(width: u32, height: u32, channels: u32) -> PixelGrid {
    grid_from_fn(width, height, channels, |x, _| {
        if width > 1 {
            (x * 255 / (width - 1)) as u8
        } else {
            0
        }
    })
}

/// Alternating 255/0 samples, 255 in the top-left corner.
pub fn checkerboard(width: u32, height: u32, channels: u32) -> PixelGrid {
    grid_from_fn(
        width,
        height,
        channels,
        |x, y| if (x + y) % 2 == 0 { 255 } else { 0 },
    )
}

/// Deterministic pseudo-random image.
///
/// The same seed produces the same samples on every platform. Every
/// channel gets an independent value.
pub fn pseudo_random(width: u32, height: u32, channels: u32, seed: u64) -> PixelGrid {
    let count = width as usize * height as usize * channels as usize;
    let mut state = seed;
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        // Numerical Recipes LCG constants.
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        samples.push((state >> 56) as u8);
    }
    PixelGrid::from_vec(width, height, channels, samples).unwrap()
}

/// Renders the grid as rows of decimal sample values for visual inspection.
pub fn format_grid(grid: &PixelGrid, label: &str) -> String {
    let mut result = format!("---- {label} ----\n");
    for row in grid.samples().chunks(grid.row_size()) {
        let mut values = row.iter();
        if let Some(first) = values.next() {
            write!(result, "{first}").unwrap();
        }
        for value in values {
            write!(result, " {value}").unwrap();
        }
        result.push('\n');
    }
    result
}

fn grid_from_fn(
    width: u32,
    height: u32,
    channels: u32,
    sample_fn: impl Fn(u32, u32) -> u8,
) -> PixelGrid {
    let count = width as usize * height as usize * channels as usize;
    let mut samples = Vec::with_capacity(count);
    for y in 0..height {
        for x in 0..width {
            let value = sample_fn(x, y);
            samples.extend(std::iter::repeat(value).take(channels as usize));
        }
    }
    PixelGrid::from_vec(width, height, channels, samples).unwrap()
}
