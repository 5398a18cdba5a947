//! Argument validation utilities
//!
//! Pure checks on dimensions, bands and indices, shared by every mutating
//! and reading operation of the storage engine.

pub mod bounds;

pub use bounds::{
    resolve_slice_band, validate_band, validate_band_distance, validate_dim, validate_index,
};
