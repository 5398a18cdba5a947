//! Core symmetric matrix access trait

use crate::format::band_element_count;
use crate::Result;

/// Format-agnostic access to a symmetric covariance matrix
///
/// Implementations store only the upper triangle; lookups below the
/// diagonal resolve to the mirrored entry.
pub trait SymmetricMatrix {
    /// Matrix order
    fn dim(&self) -> usize;

    /// Maximum stored distance from the diagonal (`-1` for the empty band)
    fn band(&self) -> isize;

    /// Variance of `row`, `None` when not set
    fn var(&self, row: usize) -> Result<Option<f64>>;

    /// Covariance of `(row, col)`
    ///
    /// Returns `Some(0.0)` for slots beyond stored data and `None` for
    /// placeholder slots.
    fn cov(&self, row: usize, col: usize) -> Result<Option<f64>>;

    /// Number of stored slots, placeholders included
    fn stored_len(&self) -> usize;

    /// Check that the stored slot count matches a complete `(dim, band)` layout
    fn has_complete_layout(&self) -> bool {
        self.stored_len() == band_element_count(self.dim(), self.band())
    }
}
