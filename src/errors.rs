use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Width, height and channels of image must be greater than zero")]
    ZeroDimension,
    #[error("Capacity of buffer is smaller than required for image dimensions")]
    InsufficientCapacity,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Divisor of filter must not be zero")]
    ZeroDivisor,
    #[error("Divisor of filter must be a finite number")]
    NonFiniteDivisor,
    #[error("Weights of filter must be finite numbers")]
    NonFiniteWeight,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
