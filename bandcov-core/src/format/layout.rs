//! Upper-triangle band layout arithmetic
//!
//! Row `i` of a banded symmetric matrix stores its diagonal at offset 0 and
//! the covariance with column `i + k` at offset `k`, for `k <= band`.

/// Band of a fully dense upper triangle for `dim`
pub const fn full_band(dim: usize) -> isize {
    dim as isize - 1
}

/// Number of slots row `row` holds once complete
///
/// This is `min(band + 1, dim - row)`, or zero for rows outside the matrix
/// and for the empty band.
pub const fn row_capacity(dim: usize, band: isize, row: usize) -> usize {
    if row >= dim || band < 0 {
        return 0;
    }

    let reach = band as usize + 1;
    let remaining = dim - row;
    if reach < remaining {
        reach
    } else {
        remaining
    }
}

/// Number of slots a complete matrix of `(dim, band)` holds
///
/// Closed form `dim*(dim+1)/2 - (dim-band)*(dim-band-1)/2`, with the band
/// capped at `dim - 1` so that oversized bands count as dense.
pub const fn band_element_count(dim: usize, band: isize) -> usize {
    if dim == 0 || band < 0 {
        return 0;
    }

    let band = if band as usize > dim - 1 {
        dim - 1
    } else {
        band as usize
    };
    let outside = dim - band;
    dim * (dim + 1) / 2 - outside * (outside - 1) / 2
}

/// Distance of `(row, col)` from the diagonal
pub const fn slot_distance(row: usize, col: usize) -> usize {
    row.abs_diff(col)
}

/// Map `(row, col)` to its upper-triangle `(row, offset)` slot
pub const fn upper_slot(row: usize, col: usize) -> (usize, usize) {
    if col >= row {
        (row, col - row)
    } else {
        (col, row - col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_capacity() {
        // dense 6x6
        assert_eq!(row_capacity(6, 5, 0), 6);
        assert_eq!(row_capacity(6, 5, 3), 3);
        assert_eq!(row_capacity(6, 5, 5), 1);

        // band 1 stays at two slots until the last row
        assert_eq!(row_capacity(6, 1, 0), 2);
        assert_eq!(row_capacity(6, 1, 4), 2);
        assert_eq!(row_capacity(6, 1, 5), 1);

        // outside the matrix and empty band
        assert_eq!(row_capacity(6, 5, 6), 0);
        assert_eq!(row_capacity(6, -1, 0), 0);
    }

    #[test]
    fn test_band_element_count() {
        assert_eq!(band_element_count(6, 5), 21);
        assert_eq!(band_element_count(6, 1), 11);
        assert_eq!(band_element_count(6, 0), 6);
        assert_eq!(band_element_count(3, 2), 6);
        assert_eq!(band_element_count(3, 10), 6);
        assert_eq!(band_element_count(0, -1), 0);
        assert_eq!(band_element_count(4, -1), 0);

        // closed form agrees with summing row capacities
        for dim in 0..12 {
            for band in -1..(dim as isize + 2) {
                let summed: usize = (0..dim).map(|row| row_capacity(dim, band, row)).sum();
                assert_eq!(band_element_count(dim, band), summed, "dim={dim} band={band}");
            }
        }
    }

    #[test]
    fn test_upper_slot() {
        assert_eq!(upper_slot(1, 4), (1, 3));
        assert_eq!(upper_slot(4, 1), (1, 3));
        assert_eq!(upper_slot(2, 2), (2, 0));
        assert_eq!(slot_distance(4, 1), 3);
        assert_eq!(slot_distance(1, 4), 3);
    }

    #[test]
    fn test_full_band() {
        assert_eq!(full_band(6), 5);
        assert_eq!(full_band(0), -1);
    }
}
