use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("invalid stride")]
    InvalidStride,

    #[error("empty region on {axis} axis: min {min}, max {max}")]
    EmptyRegion {
        axis: &'static str,
        min: i64,
        max: i64,
    },

    #[error("region {x_min}..{x_max} x {y_min}..{y_max} exceeds {width}x{height} frame")]
    RegionOutOfBounds {
        x_min: usize,
        x_max: usize,
        y_min: usize,
        y_max: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid calibration: {0}")]
    InvalidCalibration(&'static str),
}
