//! Text block serialization
//!
//! Emits the matrix as a tagged block for embedding in an XML document:
//!
//! ```text
//! <cov-mat dim="3" band="1">
//!  1.0000000e+06  1.0000000e+05
//!  2.0000000e+06  2.0000000e+05
//!  3.0000000e+06
//! </cov-mat>
//! ```
//!
//! Only stored slots are written, one line per row. Placeholders are
//! written as zero. Values are scaled on output only.

use std::fmt::{self, Write};

use bandcov_core::format::constants::{
    DEFAULT_TEXT_PRECISION, DEFAULT_TEXT_SCALE, DEFAULT_TEXT_WIDTH, TEXT_TAG,
};

use crate::covmat::BandedCovMat;

/// Configuration for text block output
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBlockConfig {
    /// Factor applied to every value on output
    pub scale: f64,
    /// Fractional digits of the mantissa
    pub precision: usize,
    /// Minimum field width, values are right-aligned
    pub width: usize,
    /// Element name of the block
    pub tag: String,
}

impl TextBlockConfig {
    /// Set the output scale factor
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the number of fractional mantissa digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the minimum field width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the element name
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

impl Default for TextBlockConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_TEXT_SCALE,
            precision: DEFAULT_TEXT_PRECISION,
            width: DEFAULT_TEXT_WIDTH,
            tag: TEXT_TAG.to_string(),
        }
    }
}

/// Format `value` like C's `%{width}.{precision}e`
///
/// The exponent always carries a sign and at least two digits.
pub fn format_scientific(value: f64, precision: usize, width: usize) -> String {
    let formatted = if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        let raw = format!("{value:.precision$e}");
        match raw.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
            Some((mantissa, Ok(exp))) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            _ => raw,
        }
    };
    format!("{formatted:>width$}")
}

impl BandedCovMat {
    /// Write the text block with `config` into `out`
    pub fn write_text_block<W: Write>(
        &self,
        out: &mut W,
        config: &TextBlockConfig,
    ) -> fmt::Result {
        writeln!(
            out,
            "<{} dim=\"{}\" band=\"{}\">",
            config.tag, self.dim, self.band
        )?;
        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let value = cell.or_zero() * config.scale;
                    format_scientific(value, config.precision, config.width)
                })
                .collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        writeln!(out, "</{}>", config.tag)
    }

    /// Text block with the default configuration
    pub fn to_text_block(&self) -> String {
        self.to_text_block_with(&TextBlockConfig::default())
    }

    /// Text block with `config`
    pub fn to_text_block_with(&self, config: &TextBlockConfig) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_text_block(&mut out, config);
        out
    }
}

impl fmt::Display for BandedCovMat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text_block(f, &TextBlockConfig::default())
    }
}
