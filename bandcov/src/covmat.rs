//! Banded symmetric covariance matrix storage
//!
//! Only the upper triangle within `band` of the diagonal is stored. Row `i`
//! keeps its variance at slot 0 and the covariance with column `i + k` at
//! slot `k`; rows may be shorter than their capacity while the matrix is
//! being built.

use bandcov_core::{
    full_band, upper_slot, validate_band, validate_band_distance, validate_dim, validate_index,
    Cell, CovMatError, Result, SymmetricMatrix,
};
use tracing::debug;

use crate::append::AppendCursor;

/// Banded symmetric covariance matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBandedCovMat")
)]
pub struct BandedCovMat {
    pub(crate) dim: usize,
    pub(crate) band: isize,
    pub(crate) rows: Vec<Vec<Cell>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub(crate) cursor: AppendCursor,
}

/// Serialized form, checked before it becomes a [`BandedCovMat`]
///
/// The append cursor is not part of the payload; it is rebuilt from the rows.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBandedCovMat {
    dim: usize,
    band: isize,
    rows: Vec<Vec<Cell>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBandedCovMat> for BandedCovMat {
    type Error = CovMatError;

    fn try_from(raw: RawBandedCovMat) -> Result<Self> {
        validate_dim(raw.dim)?;
        validate_band(raw.band)?;
        if raw.rows.len() != raw.dim {
            return Err(CovMatError::DimensionMismatch {
                expected: raw.dim,
                found: raw.rows.len(),
            });
        }
        for (i, row) in raw.rows.iter().enumerate() {
            if row.len() > raw.dim - i {
                return Err(CovMatError::InvalidIndex {
                    index: i + row.len() - 1,
                    dim: raw.dim,
                });
            }
        }
        Ok(Self::from_parts(raw.dim, raw.band, raw.rows))
    }
}

impl BandedCovMat {
    /// Create an empty dense matrix of order `dim` (band `dim - 1`)
    pub fn new(dim: usize) -> Result<Self> {
        validate_dim(dim)?;
        Self::with_band(dim, full_band(dim))
    }

    /// Create an empty matrix of order `dim` storing `band` off-diagonals
    ///
    /// The band is not checked against `dim`; a band wider than the matrix
    /// is stored as dense.
    pub fn with_band(dim: usize, band: isize) -> Result<Self> {
        validate_dim(dim)?;
        validate_band(band)?;
        debug!(dim, band, "created covariance matrix");
        Ok(Self::empty(dim, band))
    }

    /// Build a matrix from already validated parts
    pub(crate) fn from_parts(dim: usize, band: isize, rows: Vec<Vec<Cell>>) -> Self {
        let cursor = AppendCursor::resume(dim, band, &rows);
        Self {
            dim,
            band,
            rows,
            cursor,
        }
    }

    pub(crate) fn empty(dim: usize, band: isize) -> Self {
        Self {
            dim,
            band,
            rows: vec![Vec::new(); dim],
            cursor: AppendCursor::new(dim, band),
        }
    }

    /// Matrix order
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Stored distance from the diagonal
    pub fn band(&self) -> isize {
        self.band
    }

    /// Reset to `dim` empty rows, dropping every stored value
    pub fn set_dim(&mut self, dim: usize) -> Result<()> {
        validate_dim(dim)?;
        debug!(old = self.dim, dim, "reset covariance matrix dimension");
        *self = Self::empty(dim, self.band);
        Ok(())
    }

    /// Change the declared band without touching stored rows
    pub fn set_band(&mut self, band: isize) -> Result<()> {
        validate_band(band)?;
        self.band = band;
        self.cursor.rebind(self.dim, band);
        Ok(())
    }

    /// Grow the matrix by `num` empty rows and reopen the append stream
    pub fn extend_dim(&mut self, num: usize) -> Result<()> {
        let dim = self
            .dim
            .checked_add(num)
            .ok_or(CovMatError::InvalidDimension { dim: usize::MAX })?;
        validate_dim(dim)?;

        self.rows.resize_with(dim, Vec::new);
        self.dim = dim;
        self.cursor.extend(dim, self.band);
        debug!(dim, added = num, "extended covariance matrix");
        Ok(())
    }

    /// Stored rows, upper triangle from the diagonal
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Stored slots of `row`
    pub fn row(&self, row: usize) -> Result<&[Cell]> {
        validate_index(row, self.dim)?;
        Ok(&self.rows[row])
    }

    /// Number of stored slots, placeholders included
    pub fn stored_len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Variance of `row`
    ///
    /// Returns `None` while the variance has not been set; unlike
    /// [`BandedCovMat::get_cov`] there is no zero default.
    pub fn get_var(&self, row: usize) -> Result<Option<f64>> {
        validate_index(row, self.dim)?;
        Ok(self.rows[row].first().and_then(|c| c.value()))
    }

    /// Covariance of `(row, col)`, in either order
    ///
    /// Slots beyond the stored row read as `Some(0.0)`, placeholders as
    /// `None`. The band is not checked on read.
    pub fn get_cov(&self, row: usize, col: usize) -> Result<Option<f64>> {
        validate_index(row, self.dim)?;
        validate_index(col, self.dim)?;
        let (r, k) = upper_slot(row, col);
        Ok(self.rows[r].get(k).map_or(Some(0.0), |c| c.value()))
    }

    /// Standard deviation of `row`
    pub fn stdev(&self, row: usize) -> Result<Option<f64>> {
        Ok(self.get_var(row)?.map(f64::sqrt))
    }

    /// Set the variance of `row`
    ///
    /// Random-access writes bypass the append stream.
    pub fn set_var(&mut self, row: usize, value: f64) -> Result<()> {
        validate_index(row, self.dim)?;
        let slots = &mut self.rows[row];
        match slots.first_mut() {
            Some(slot) => *slot = Cell::Set(value),
            None => slots.push(Cell::Set(value)),
        }
        Ok(())
    }

    /// Set the covariance of `(row, col)`, in either order
    ///
    /// Missing slots before the target are padded with placeholders.
    pub fn set_cov(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        validate_index(row, self.dim)?;
        validate_index(col, self.dim)?;
        validate_band_distance(row, col, self.band)?;

        let (r, k) = upper_slot(row, col);
        let slots = &mut self.rows[r];
        if k < slots.len() {
            slots[k] = Cell::Set(value);
        } else {
            slots.resize(k, Cell::Unset);
            slots.push(Cell::Set(value));
        }
        Ok(())
    }
}

impl Default for BandedCovMat {
    fn default() -> Self {
        Self::empty(0, -1)
    }
}

impl SymmetricMatrix for BandedCovMat {
    fn dim(&self) -> usize {
        self.dim
    }

    fn band(&self) -> isize {
        self.band
    }

    fn var(&self, row: usize) -> Result<Option<f64>> {
        self.get_var(row)
    }

    fn cov(&self, row: usize, col: usize) -> Result<Option<f64>> {
        self.get_cov(row, col)
    }

    fn stored_len(&self) -> usize {
        BandedCovMat::stored_len(self)
    }
}
