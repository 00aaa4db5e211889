use crate::errors::ConfigError;

/// An immutable 3×3 matrix of filter weights with a normalizing divisor.
///
/// `weights[dy][dx]` is applied to the sample at offset
/// `(dx - 1, dy - 1)` from the output coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterKernel {
    weights: [[f32; 3]; 3],
    divisor: f32,
}

impl FilterKernel {
    /// Creates a kernel after validating its parameters.
    ///
    /// The divisor must be finite and non-zero, all weights must be finite.
    pub fn new(weights: [[f32; 3]; 3], divisor: f32) -> Result<Self, ConfigError> {
        if !divisor.is_finite() {
            return Err(ConfigError::NonFiniteDivisor);
        }
        if divisor == 0. {
            return Err(ConfigError::ZeroDivisor);
        }
        if weights.iter().flatten().any(|w| !w.is_finite()) {
            return Err(ConfigError::NonFiniteWeight);
        }
        Ok(Self { weights, divisor })
    }

    /// Gaussian-like smoothing kernel `[[1, 2, 1], [2, 4, 2], [1, 2, 1]]`
    /// with divisor 16.
    pub fn gaussian_3x3() -> Self {
        Self {
            weights: [[1., 2., 1.], [2., 4., 2.], [1., 2., 1.]],
            divisor: 16.,
        }
    }

    /// Kernel that leaves the image unchanged.
    pub fn identity() -> Self {
        Self {
            weights: [[0., 0., 0.], [0., 1., 0.], [0., 0., 0.]],
            divisor: 1.,
        }
    }

    /// Box blur kernel: nine equal weights with divisor 9.
    pub fn box_blur() -> Self {
        Self {
            weights: [[1., 1., 1.], [1., 1., 1.], [1., 1., 1.]],
            divisor: 9.,
        }
    }

    #[inline]
    pub fn weights(&self) -> &[[f32; 3]; 3] {
        &self.weights
    }

    #[inline]
    pub fn divisor(&self) -> f32 {
        self.divisor
    }
}
