//! Dense square-matrix conversion and covariance propagation
//!
//! Dense views use `ndarray::Array2<f64>` so that linear transforms can work
//! on the full symmetric matrix.

use bandcov_core::{full_band, Cell, CovMatError, Result};
use ndarray::{s, Array2, ArrayBase, Data, Ix2};
use tracing::debug;

use crate::covmat::BandedCovMat;

/// Propagates a covariance matrix through a linear transform
///
/// Implementations return the dense covariance of the transformed
/// quantities, of the same order as the input.
pub trait CovarianceTransform {
    /// Transform `cov`, returning the propagated dense covariance
    fn transform_cov_mat(&self, cov: &BandedCovMat) -> Result<Array2<f64>>;
}

impl<F> CovarianceTransform for F
where
    F: Fn(&BandedCovMat) -> Result<Array2<f64>>,
{
    fn transform_cov_mat(&self, cov: &BandedCovMat) -> Result<Array2<f64>> {
        self(cov)
    }
}

/// Transform given by its square Jacobian `J`, propagating `Σ` to `J Σ Jᵀ`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTransform {
    jacobian: Array2<f64>,
}

impl LinearTransform {
    /// Create a transform from a square Jacobian
    pub fn new(jacobian: Array2<f64>) -> Result<Self> {
        let (nrows, ncols) = jacobian.dim();
        if nrows != ncols {
            return Err(CovMatError::DimensionMismatch {
                expected: nrows,
                found: ncols,
            });
        }
        Ok(Self { jacobian })
    }

    /// Identity transform of order `dim`
    pub fn identity(dim: usize) -> Self {
        Self {
            jacobian: Array2::eye(dim),
        }
    }

    /// Block-diagonal transform applying `block` to each of `points` points
    ///
    /// Used for coordinate lists where every point carries `block.nrows()`
    /// consecutive rows of the covariance matrix.
    pub fn per_point(block: &Array2<f64>, points: usize) -> Result<Self> {
        let (k, ncols) = block.dim();
        if k != ncols {
            return Err(CovMatError::DimensionMismatch {
                expected: k,
                found: ncols,
            });
        }

        let mut jacobian = Array2::zeros((k * points, k * points));
        for p in 0..points {
            let range = p * k..(p + 1) * k;
            jacobian
                .slice_mut(s![range.clone(), range])
                .assign(block);
        }
        Ok(Self { jacobian })
    }

    /// The Jacobian
    pub fn jacobian(&self) -> &Array2<f64> {
        &self.jacobian
    }
}

impl CovarianceTransform for LinearTransform {
    fn transform_cov_mat(&self, cov: &BandedCovMat) -> Result<Array2<f64>> {
        if self.jacobian.ncols() != cov.dim() {
            return Err(CovMatError::DimensionMismatch {
                expected: cov.dim(),
                found: self.jacobian.ncols(),
            });
        }
        let sigma = cov.to_dense();
        Ok(self.jacobian.dot(&sigma).dot(&self.jacobian.t()))
    }
}

impl BandedCovMat {
    /// Full symmetric dense matrix
    ///
    /// Entries outside the stored band and placeholders are zero.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.dim, self.dim));
        for (i, row) in self.rows.iter().enumerate() {
            for (k, cell) in row.iter().take(self.dim - i).enumerate() {
                let value = cell.or_zero();
                dense[[i, i + k]] = value;
                dense[[i + k, i]] = value;
            }
        }
        dense
    }

    /// Replace every row with the upper triangle of `matrix`
    ///
    /// The band widens to `dim - 1`; any previous band restriction is
    /// dropped.
    pub fn from_dense<S>(&mut self, matrix: &ArrayBase<S, Ix2>) -> Result<()>
    where
        S: Data<Elem = f64>,
    {
        let (nrows, ncols) = matrix.dim();
        for found in [nrows, ncols] {
            if found != self.dim {
                return Err(CovMatError::DimensionMismatch {
                    expected: self.dim,
                    found,
                });
            }
        }

        let rows = matrix
            .outer_iter()
            .enumerate()
            .map(|(i, row)| row.iter().skip(i).map(|&v| Cell::Set(v)).collect())
            .collect();
        *self = Self::from_parts(self.dim, full_band(self.dim), rows);
        debug!(dim = self.dim, "loaded covariance matrix from dense");
        Ok(())
    }

    /// Build a dense-band matrix from a square dense matrix
    pub fn from_dense_matrix<S>(matrix: &ArrayBase<S, Ix2>) -> Result<Self>
    where
        S: Data<Elem = f64>,
    {
        let mut cov = Self::new(matrix.nrows())?;
        cov.from_dense(matrix)?;
        Ok(cov)
    }

    /// Propagate through `transform`, storing the dense result
    ///
    /// On failure the band and append position are left as they were.
    pub fn transform<T: CovarianceTransform + ?Sized>(&mut self, transform: &T) -> Result<()> {
        let (band, cursor) = (self.band, self.cursor);
        self.set_band(full_band(self.dim))?;

        let result = transform
            .transform_cov_mat(self)
            .and_then(|dense| self.from_dense(&dense));
        match result {
            Ok(()) => {
                debug!(dim = self.dim, "transformed covariance matrix");
                Ok(())
            }
            Err(e) => {
                self.band = band;
                self.cursor = cursor;
                Err(e)
            }
        }
    }
}
