//! Band layout and text block format definitions
//!
//! This module contains pure arithmetic describing how the upper-triangle
//! band is laid out in row storage, plus the constants of the text block
//! serialization. No storage or I/O lives here.

pub mod constants;
pub mod layout;

pub use layout::{band_element_count, full_band, row_capacity, slot_distance, upper_slot};
