//! Abstract interfaces for banded symmetric matrices
//!
//! Traits are pure interfaces; the storage engine lives in the `bandcov` crate.

pub mod matrix;

pub use matrix::SymmetricMatrix;
