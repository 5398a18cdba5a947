#![no_std]

//! bandcov Core - Banded Symmetric Covariance Matrix Definitions
//!
//! This crate provides the error taxonomy, slot type, band layout arithmetic
//! and access traits for banded symmetric covariance matrix storage

#[cfg(test)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod cell;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use cell::*;
pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
