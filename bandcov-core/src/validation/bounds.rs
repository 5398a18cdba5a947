//! Dimension, band and index validation

use crate::format::slot_distance;
use crate::{CovMatError, Result};

/// Validate that `dim` fits alongside a signed band
pub const fn validate_dim(dim: usize) -> Result<usize> {
    if dim > isize::MAX as usize {
        return Err(CovMatError::InvalidDimension { dim });
    }
    Ok(dim)
}

/// Validate that `band >= -1`
///
/// No upper bound against the dimension is enforced; a band wider than the
/// matrix behaves as dense.
pub const fn validate_band(band: isize) -> Result<isize> {
    if band < -1 {
        return Err(CovMatError::InvalidBand { band });
    }
    Ok(band)
}

/// Validate a row or column index against `dim`
pub const fn validate_index(index: usize, dim: usize) -> Result<usize> {
    if index >= dim {
        return Err(CovMatError::InvalidIndex { index, dim });
    }
    Ok(index)
}

/// Validate that `(row, col)` lies within `band` of the diagonal
pub const fn validate_band_distance(row: usize, col: usize, band: isize) -> Result<usize> {
    let distance = slot_distance(row, col);
    if band < 0 || distance > band as usize {
        return Err(CovMatError::BandExceeded { distance, band });
    }
    Ok(distance)
}

/// Resolve the band a slice to `new_dim` ends up with
///
/// Defaults to `new_dim - 1`, rejects bands reaching past the new
/// dimension and clamps to the current band.
pub const fn resolve_slice_band(
    dim: usize,
    band: isize,
    new_dim: usize,
    new_band: Option<isize>,
) -> Result<isize> {
    if new_dim > dim {
        return Err(CovMatError::DimensionExceeded {
            requested: new_dim,
            dim,
        });
    }

    let requested = match new_band {
        Some(b) => b,
        None => new_dim as isize - 1,
    };
    if requested >= new_dim as isize {
        return Err(CovMatError::BandTooWide {
            band: requested,
            dim: new_dim,
        });
    }
    if let Err(e) = validate_band(requested) {
        return Err(e);
    }

    if requested > band {
        Ok(band)
    } else {
        Ok(requested)
    }
}
