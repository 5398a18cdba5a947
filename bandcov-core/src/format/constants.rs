//! Format constants for the covariance matrix text block

/// Element name of the text block
pub const TEXT_TAG: &str = "cov-mat";

/// Values are emitted in squared millimetres from squared metres
pub const DEFAULT_TEXT_SCALE: f64 = 1e6;

/// Fractional digits of each emitted mantissa
pub const DEFAULT_TEXT_PRECISION: usize = 7;

/// Minimum field width of each emitted value
pub const DEFAULT_TEXT_WIDTH: usize = 14;

/// Determinant below which a 2x2 block is rejected as not positive definite
pub const POSITIVE_DEFINITE_TOLERANCE: f64 = -1e-4;
