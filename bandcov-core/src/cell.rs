//! Storage slot for a single variance or covariance value

/// One stored slot of the upper-triangle band
///
/// A slot exists once a row has been padded or appended past it. `Unset`
/// marks a slot that is materialized but has no value yet, which is
/// different from a slot beyond the stored row length (read as zero).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Slot holds a value
    Set(f64),
    /// Slot is a placeholder
    #[default]
    Unset,
}

impl Cell {
    /// Get the stored value, if any
    pub const fn value(self) -> Option<f64> {
        match self {
            Cell::Set(v) => Some(v),
            Cell::Unset => None,
        }
    }

    /// Check whether the slot holds a value
    pub const fn is_set(self) -> bool {
        matches!(self, Cell::Set(_))
    }

    /// Stored value, or zero for a placeholder
    pub const fn or_zero(self) -> f64 {
        match self {
            Cell::Set(v) => v,
            Cell::Unset => 0.0,
        }
    }

    /// Apply `f` to a stored value, leaving placeholders untouched
    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> Self {
        match self {
            Cell::Set(v) => Cell::Set(f(v)),
            Cell::Unset => Cell::Unset,
        }
    }

    /// Combine two slots; the result is unset when either side is
    pub fn zip_with<F: FnOnce(f64, f64) -> f64>(self, other: Self, f: F) -> Self {
        match (self, other) {
            (Cell::Set(a), Cell::Set(b)) => Cell::Set(f(a, b)),
            _ => Cell::Unset,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Set(value)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Cell::Set(v),
            None => Cell::Unset,
        }
    }
}

impl From<Cell> for Option<f64> {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}
