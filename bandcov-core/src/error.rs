//! Error types for banded covariance matrix operations

/// Errors that can occur during covariance matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CovMatError {
    /// Dimension cannot be represented next to a signed band
    InvalidDimension { dim: usize },
    /// Band below -1
    InvalidBand { band: isize },
    /// Row or column index outside `0..dim`
    InvalidIndex { index: usize, dim: usize },
    /// Covariance written further from the diagonal than the band allows
    BandExceeded { distance: usize, band: isize },
    /// Streaming append after every band slot was filled
    AlreadyComplete,
    /// Operands or dense input of incompatible order
    DimensionMismatch { expected: usize, found: usize },
    /// Slice to a dimension larger than the matrix
    DimensionExceeded { requested: usize, dim: usize },
    /// Slice band not smaller than the sliced dimension
    BandTooWide { band: isize, dim: usize },
    /// Operation needs every band slot to be present
    IncompleteMatrix,
    /// 2x2 block has a clearly negative determinant
    NotPositiveDefinite,
}

impl core::fmt::Display for CovMatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CovMatError::InvalidDimension { dim } => write!(f, "Invalid dimension {dim}"),
            CovMatError::InvalidBand { band } => {
                write!(f, "Invalid band {band}, expected band >= -1")
            }
            CovMatError::InvalidIndex { index, dim } => {
                write!(f, "Index {index} out of range for dimension {dim}")
            }
            CovMatError::BandExceeded { distance, band } => {
                write!(f, "Distance {distance} from diagonal exceeds band {band}")
            }
            CovMatError::AlreadyComplete => write!(f, "All elements already appended"),
            CovMatError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}")
            }
            CovMatError::DimensionExceeded { requested, dim } => {
                write!(f, "Requested dimension {requested} exceeds dimension {dim}")
            }
            CovMatError::BandTooWide { band, dim } => {
                write!(f, "Band {band} too wide for dimension {dim}")
            }
            CovMatError::IncompleteMatrix => write!(f, "Covariance matrix is not complete"),
            CovMatError::NotPositiveDefinite => {
                write!(f, "Covariance matrix is not positive definite")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CovMatError {}

/// Result type for covariance matrix operations
pub type Result<T> = core::result::Result<T, CovMatError>;
