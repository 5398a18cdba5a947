//! Streaming construction in canonical band order
//!
//! Values arrive row by row: row 0's `min(band + 1, dim)` slots, then row
//! 1's, and so on, with rows near the end of the matrix holding fewer slots
//! once the band reaches past the last column.

use bandcov_core::{band_element_count, row_capacity, Cell, CovMatError, Result};
use tracing::{debug, trace};

use crate::covmat::BandedCovMat;

/// Write position of the streaming append protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppendCursor {
    /// Row receiving the next value
    row: usize,
    /// Slots already written in `row`
    col: usize,
    /// Slots `row` takes before the cursor moves on
    capacity: usize,
    /// Set once every row holds its band slots
    complete: bool,
}

impl AppendCursor {
    /// Cursor at the start of an empty `(dim, band)` matrix
    pub(crate) const fn new(dim: usize, band: isize) -> Self {
        Self {
            row: 0,
            col: 0,
            capacity: row_capacity(dim, band, 0),
            complete: band_element_count(dim, band) == 0,
        }
    }

    /// Cursor positioned at the first row of `rows` short of its capacity
    ///
    /// The matrix is complete when no such row exists.
    pub(crate) fn resume(dim: usize, band: isize, rows: &[Vec<Cell>]) -> Self {
        if band_element_count(dim, band) == 0 {
            return Self::new(dim, band);
        }

        let short = rows
            .iter()
            .enumerate()
            .find(|(i, r)| r.len() < row_capacity(dim, band, *i))
            .map(|(i, _)| i);
        let row = short.unwrap_or(dim - 1);
        Self {
            row,
            col: rows.get(row).map_or(0, Vec::len),
            capacity: row_capacity(dim, band, row),
            complete: short.is_none(),
        }
    }

    /// Re-open the cursor after the matrix grew
    pub(crate) fn extend(&mut self, dim: usize, band: isize) {
        self.capacity = row_capacity(dim, band, self.row);
        self.complete = band_element_count(dim, band) == 0;
    }

    /// Follow a changed band from the current row on
    pub(crate) fn rebind(&mut self, dim: usize, band: isize) {
        self.capacity = row_capacity(dim, band, self.row);
        self.complete =
            band_element_count(dim, band) == 0 || (self.row + 1 == dim && self.col > 0);
    }

    pub(crate) const fn is_complete(&self) -> bool {
        self.complete
    }
}

impl BandedCovMat {
    /// Append the next value of the canonical band stream
    ///
    /// Completion is flagged as soon as a value lands in the last row, whose
    /// single diagonal slot is the final slot of the stream. A row that
    /// fills up moves the cursor to the start of the next one. A stream with
    /// the wrong number of values is not detected here; check
    /// [`BandedCovMat::is_invalid`] afterwards.
    pub fn append_value(&mut self, value: f64) -> Result<()> {
        if self.cursor.complete {
            return Err(CovMatError::AlreadyComplete);
        }

        if self.cursor.col >= self.cursor.capacity {
            let next = self.cursor.row + 1;
            if next >= self.dim {
                self.cursor.complete = true;
                return Err(CovMatError::AlreadyComplete);
            }
            self.cursor.row = next;
            self.cursor.col = 0;
            self.cursor.capacity = row_capacity(self.dim, self.band, next);
        }

        let (row, col) = (self.cursor.row, self.cursor.col);
        self.rows[row].push(Cell::Set(value));
        self.cursor.col += 1;
        trace!(row, col, value, "appended covariance value");

        if row + 1 == self.dim {
            self.cursor.complete = true;
            debug!(dim = self.dim, band = self.band, "covariance stream complete");
        } else if self.cursor.col == self.cursor.capacity {
            self.cursor.row = row + 1;
            self.cursor.col = 0;
            self.cursor.capacity = row_capacity(self.dim, self.band, row + 1);
        }

        Ok(())
    }

    /// Append every value of `values` in order
    ///
    /// Stops at the first failing append.
    pub fn append_values<I: IntoIterator<Item = f64>>(&mut self, values: I) -> Result<()> {
        for value in values {
            self.append_value(value)?;
        }
        Ok(())
    }

    /// Whether the append stream has been completed
    pub fn is_complete(&self) -> bool {
        self.cursor.is_complete()
    }
}
