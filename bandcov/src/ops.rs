//! Whole-matrix arithmetic, slicing and structural copies

use bandcov_core::{
    resolve_slice_band, row_capacity, validate_index, Cell, CovMatError, Result, SymmetricMatrix,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::covmat::BandedCovMat;

fn add_rows(a: &[Cell], b: &[Cell]) -> Vec<Cell> {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.zip_with(*y, |x, y| x + y))
        .collect()
}

impl BandedCovMat {
    /// Sum of two matrices of equal order
    ///
    /// The result band is the narrower of the two. Rows are summed
    /// pairwise up to the shorter stored row; a placeholder on either side
    /// gives a placeholder.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.dim != other.dim {
            return Err(CovMatError::DimensionMismatch {
                expected: self.dim,
                found: other.dim,
            });
        }

        let dropped: usize = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.len().abs_diff(b.len()))
            .sum();
        if dropped > 0 {
            warn!(dropped, "rows of unequal length truncated in covariance sum");
        }

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<Cell>> = self
            .rows
            .par_iter()
            .zip(other.rows.par_iter())
            .map(|(a, b)| add_rows(a, b))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<Cell>> = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| add_rows(a, b))
            .collect();

        Ok(Self::from_parts(self.dim, self.band.min(other.band), rows))
    }

    /// Scale in place for a linear coordinate factor
    ///
    /// Every stored value is multiplied by `factor²`; placeholders stay.
    pub fn scale(&mut self, factor: f64) {
        let factor2 = factor * factor;

        #[cfg(feature = "parallel")]
        self.rows.par_iter_mut().for_each(|row| {
            for cell in row.iter_mut() {
                *cell = cell.map(|v| v * factor2);
            }
        });
        #[cfg(not(feature = "parallel"))]
        for row in self.rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.map(|v| v * factor2);
            }
        }
    }

    /// Truncate to the leading `new_dim` rows and `new_band` off-diagonals
    ///
    /// The band defaults to `new_dim - 1` and is clamped to the current band.
    pub fn slice(&mut self, new_dim: usize, new_band: Option<isize>) -> Result<()> {
        if !self.is_complete() {
            return Err(CovMatError::IncompleteMatrix);
        }
        if new_dim > self.dim {
            return Err(CovMatError::DimensionExceeded {
                requested: new_dim,
                dim: self.dim,
            });
        }
        if new_dim == self.dim {
            return Ok(());
        }

        let band = resolve_slice_band(self.dim, self.band, new_dim, new_band)?;
        let requested = new_band.unwrap_or(new_dim as isize - 1);
        if requested > band {
            warn!(requested, band, "slice band clamped to current band");
        }

        self.rows.truncate(new_dim);
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.truncate(row_capacity(new_dim, band, i));
        }
        *self = Self::from_parts(new_dim, band, std::mem::take(&mut self.rows));
        debug!(dim = new_dim, band, "sliced covariance matrix");
        Ok(())
    }

    /// Same `(dim, band)` with no stored values
    pub fn empty_copy(&self) -> Self {
        Self::empty(self.dim, self.band)
    }

    /// Principal submatrix over `indices`, in the given order
    ///
    /// The result band is `min(indices.len() - 1, band)`. Unset source
    /// values stay unset.
    pub fn submatrix(&self, indices: &[usize]) -> Result<Self> {
        for &index in indices {
            validate_index(index, self.dim)?;
        }

        let dim = indices.len();
        let band = (dim as isize - 1).min(self.band);
        let mut sub = Self::empty(dim, band);

        for (i, &src) in indices.iter().enumerate() {
            if let Some(var) = self.get_var(src)? {
                sub.set_var(i, var)?;
            }
        }
        for (i, &src_row) in indices.iter().enumerate() {
            let reach = row_capacity(dim, band, i);
            let cols = indices.iter().enumerate().skip(i + 1);
            for (j, &src_col) in cols.take(reach.saturating_sub(1)) {
                if let Some(cov) = self.get_cov(src_row, src_col)? {
                    sub.set_cov(i, j, cov)?;
                }
            }
        }

        Ok(Self::from_parts(dim, band, sub.rows))
    }

    /// Whether the stored slot count differs from a complete `(dim, band)` layout
    pub fn is_invalid(&self) -> bool {
        !self.has_complete_layout()
    }

    /// Whether the stored slot count matches a complete `(dim, band)` layout
    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(dim: usize, band: isize) -> BandedCovMat {
        let mut m = BandedCovMat::with_band(dim, band).unwrap();
        for i in 0..dim {
            for j in 0..row_capacity(dim, band, i) {
                m.append_value((2 * i + j) as f64).unwrap();
            }
        }
        m
    }

    #[test]
    fn test_add_doubles() {
        let m = stream(6, 5);
        let sum = m.add(&m).unwrap();
        assert_eq!(sum.band(), 5);
        assert!(sum.is_complete());
        for i in 0..6usize {
            for j in 0..6usize {
                let v = m.get_cov(i, j).unwrap().unwrap();
                assert_eq!(sum.get_cov(i, j).unwrap(), Some(2.0 * v));
            }
        }
    }

    #[test]
    fn test_add_mismatched_band() {
        let narrow = stream(6, 1);
        let wide = stream(6, 5);
        let sum = narrow.add(&wide).unwrap();
        assert_eq!(sum.band(), 1);
        for i in 0..6usize {
            for j in 0..6usize {
                let expected = if i.abs_diff(j) <= 1 {
                    2.0 * (i + j) as f64
                } else {
                    0.0
                };
                assert_eq!(sum.get_cov(i, j).unwrap(), Some(expected), "({i}, {j})");
            }
        }
    }

    #[test]
    fn test_add_propagates_unset() {
        let mut a = BandedCovMat::new(3).unwrap();
        let mut b = BandedCovMat::new(3).unwrap();
        a.set_cov(0, 2, 1.0).unwrap();
        b.set_cov(0, 2, 2.0).unwrap();
        b.set_var(0, 5.0).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get_cov(0, 2).unwrap(), Some(3.0));
        assert_eq!(sum.get_var(0).unwrap(), None);
        assert_eq!(sum.get_cov(0, 1).unwrap(), None);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = BandedCovMat::new(3).unwrap();
        let b = BandedCovMat::new(4).unwrap();
        assert_eq!(
            a.add(&b),
            Err(CovMatError::DimensionMismatch { expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_scale_squares_factor() {
        let mut m = BandedCovMat::new(3).unwrap();
        m.set_var(0, 2.0).unwrap();
        m.set_cov(0, 2, -1.0).unwrap();
        m.scale(3.0);
        assert_eq!(m.get_var(0).unwrap(), Some(18.0));
        assert_eq!(m.get_cov(2, 0).unwrap(), Some(-9.0));
        assert_eq!(m.get_cov(0, 1).unwrap(), None);
    }

    #[test]
    fn test_slice_keeps_leading_block() {
        let mut m = stream(6, 5);
        m.slice(3, None).unwrap();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.band(), 2);
        assert!(m.is_complete());
        assert!(m.is_valid());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get_cov(i, j).unwrap(), Some((i + j) as f64));
            }
        }
    }

    #[test]
    fn test_slice_narrows_band() {
        let mut m = stream(6, 5);
        m.slice(4, Some(1)).unwrap();
        assert_eq!(m.band(), 1);
        let lengths: Vec<usize> = m.rows().iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![2, 2, 2, 1]);
        assert_eq!(m.get_cov(0, 2).unwrap(), Some(0.0));
    }

    #[test]
    fn test_slice_clamps_to_current_band() {
        let mut m = stream(6, 1);
        m.slice(4, None).unwrap();
        assert_eq!(m.band(), 1);
        assert!(m.is_valid());
    }

    #[test]
    fn test_slice_errors() {
        let mut m = BandedCovMat::new(4).unwrap();
        assert_eq!(m.slice(2, None), Err(CovMatError::IncompleteMatrix));

        let mut m = stream(4, 3);
        assert_eq!(
            m.slice(5, None),
            Err(CovMatError::DimensionExceeded { requested: 5, dim: 4 })
        );
        assert_eq!(
            m.slice(2, Some(2)),
            Err(CovMatError::BandTooWide { band: 2, dim: 2 })
        );

        // same dimension is a no-op, even with a band that would be rejected
        m.slice(4, Some(7)).unwrap();
        assert_eq!((m.dim(), m.band()), (4, 3));
    }

    #[test]
    fn test_empty_copy() {
        let m = stream(5, 2);
        let e = m.empty_copy();
        assert_eq!((e.dim(), e.band()), (5, 2));
        assert_eq!(e.stored_len(), 0);
        assert!(!e.is_complete());
        for i in 0..5 {
            assert_eq!(e.get_var(i).unwrap(), None);
            for j in 0..5 {
                assert_eq!(e.get_cov(i, j).unwrap(), Some(0.0));
            }
        }
    }

    #[test]
    fn test_submatrix_selects_rows() {
        let m = stream(6, 5);
        let sub = m.submatrix(&[1, 4]).unwrap();
        assert_eq!((sub.dim(), sub.band()), (2, 1));
        assert_eq!(sub.get_var(0).unwrap(), Some(2.0));
        assert_eq!(sub.get_var(1).unwrap(), Some(8.0));
        assert_eq!(sub.get_cov(0, 1).unwrap(), Some(5.0));
        assert!(sub.is_valid());
        assert!(sub.is_complete());

        let narrow = stream(6, 1);
        let sub = narrow.submatrix(&[0, 1, 2]).unwrap();
        assert_eq!(sub.band(), 1);
        assert_eq!(sub.get_cov(0, 2).unwrap(), Some(0.0));

        assert_eq!(
            m.submatrix(&[0, 6]),
            Err(CovMatError::InvalidIndex { index: 6, dim: 6 })
        );
    }

    #[test]
    fn test_validity() {
        let mut m = BandedCovMat::with_band(3, 1).unwrap();
        assert!(m.is_invalid());
        m.append_values([1.0, 0.1, 2.0, 0.2, 3.0]).unwrap();
        assert!(m.is_valid());
        m.set_cov(0, 0, 1.5).unwrap();
        assert!(m.is_valid());
    }
}
