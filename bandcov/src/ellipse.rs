//! Standard error ellipse of a coordinate pair

use bandcov_core::format::constants::POSITIVE_DEFINITE_TOLERANCE;
use bandcov_core::{CovMatError, Result, SymmetricMatrix};

use crate::covmat::BandedCovMat;

/// Standard error ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorEllipse {
    /// Semi-major axis
    pub a: f64,
    /// Semi-minor axis
    pub b: f64,
    /// Orientation of the major axis from the x axis, radians in `-pi..=pi`
    pub omega: f64,
}

impl ErrorEllipse {
    /// Ellipse of variances `vx`, `vy` and covariance `cxy`
    ///
    /// Fails with [`CovMatError::NotPositiveDefinite`] for a negative
    /// variance or a determinant below the tolerance.
    pub fn from_components(vx: f64, vy: f64, cxy: f64) -> Result<Self> {
        let det = vx * vy - cxy * cxy;
        if vx < 0.0 || vy < 0.0 || det < POSITIVE_DEFINITE_TOLERANCE {
            return Err(CovMatError::NotPositiveDefinite);
        }

        let c = ((vx - vy).powi(2) + 4.0 * cxy * cxy).sqrt();
        let a = ((vx + vy + c) / 2.0).sqrt();
        let minor = vx + vy - c;
        let b = if minor < 0.0 { 0.0 } else { (minor / 2.0).sqrt() };
        let omega = (2.0 * cxy).atan2(vx - vy) / 2.0;

        Ok(Self { a, b, omega })
    }

    /// Ellipse of the 2x2 block at rows `i` and `j` of `cov`
    pub fn from_matrix<M: SymmetricMatrix + ?Sized>(cov: &M, i: usize, j: usize) -> Result<Self> {
        let vx = cov.var(i)?.ok_or(CovMatError::IncompleteMatrix)?;
        let vy = cov.var(j)?.ok_or(CovMatError::IncompleteMatrix)?;
        let cxy = cov.cov(i, j)?.ok_or(CovMatError::IncompleteMatrix)?;
        Self::from_components(vx, vy, cxy)
    }
}

impl BandedCovMat {
    /// Standard error ellipse of rows `i` and `j`
    pub fn error_ellipse(&self, i: usize, j: usize) -> Result<ErrorEllipse> {
        ErrorEllipse::from_matrix(self, i, j)
    }
}
