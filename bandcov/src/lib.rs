//! bandcov - Banded Symmetric Covariance Matrix Engine
//!
//! This library stores symmetric covariance matrices as the upper triangle
//! within a fixed distance ("band") of the diagonal, with streaming
//! construction, random access, arithmetic, dense conversion and text block
//! serialization.
//!
//! ## Architecture
//!
//! bandcov follows a definition/implementation separation:
//!
//! - **bandcov-core**: Error taxonomy, slot type, layout arithmetic and traits (no storage)
//! - **bandcov**: The row storage engine, dense conversion and serialization
//!
//! ## Quick Start
//!
//! ```rust
//! use bandcov::{BandedCovMat, Result};
//!
//! fn example() -> Result<()> {
//!     // Three coordinates, covariances between neighbours only
//!     let mut cov = BandedCovMat::with_band(3, 1)?;
//!     cov.append_values([1.0, 0.1, 2.0, 0.2, 3.0])?;
//!     assert!(cov.is_complete());
//!
//!     assert_eq!(cov.get_cov(2, 1)?, Some(0.2));
//!     assert_eq!(cov.get_cov(0, 2)?, Some(0.0));
//!
//!     let dense = cov.to_dense();
//!     assert_eq!(dense[[1, 0]], 0.1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Streaming append**: Fill rows in canonical band order with completion tracking
//! - **Placeholders**: Random-access writes leave explicit unset slots
//! - **Dense conversion**: `ndarray` round trips and linear error propagation
//! - **Text blocks**: Scaled scientific-notation output for XML embedding
//! - **serde**: Derive support for every public data type (`serde` feature)
//! - **rayon**: Row-parallel addition and scaling (`parallel` feature)

// Re-export core abstractions and layout definitions
pub use bandcov_core::{
    // Slot type and traits
    Cell, SymmetricMatrix,
    // Error handling
    CovMatError, Result,
    // Layout arithmetic
    band_element_count, full_band, row_capacity,
};

mod append;
pub mod covmat;
pub mod dense;
pub mod ellipse;
pub mod ops;
pub mod text;

// Public exports
pub use covmat::BandedCovMat;
pub use dense::{CovarianceTransform, LinearTransform};
pub use ellipse::ErrorEllipse;
pub use text::{format_scientific, TextBlockConfig};
