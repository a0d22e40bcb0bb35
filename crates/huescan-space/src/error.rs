// SPDX-License-Identifier: MIT
//
// Errors raised by checked color constructors.

use std::fmt;
use std::ops::RangeInclusive;

/// A color component outside of its valid range.
///
/// Produced by [`Rgb8::new`](crate::Rgb8::new) and
/// [`Rgb8::with_alpha`](crate::Rgb8::with_alpha). The ranges in use are:
///
///   * `0..=255` for the red, green, and blue channels of an 8-bit color;
///   * `0..=1` for alpha.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeError {
    /// Name of the offending component, e.g. `"red"` or `"alpha"`.
    pub component: &'static str,
    pub value: f64,
    pub expected: RangeInclusive<f64>,
}

impl RangeError {
    /// Create a new range error.
    #[must_use]
    pub const fn new(component: &'static str, value: f64, expected: RangeInclusive<f64>) -> Self {
        Self {
            component,
            value,
            expected,
        }
    }

    /// Check `value` against `expected`, producing an error when it falls
    /// outside. NaN never fits.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] naming `component` if `value` is out of range.
    pub fn check(
        component: &'static str,
        value: f64,
        expected: RangeInclusive<f64>,
    ) -> Result<f64, Self> {
        if expected.contains(&value) {
            Ok(value)
        } else {
            Err(Self::new(component, value, expected))
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value {} does not fit into range {}..={}",
            self.component,
            self.value,
            self.expected.start(),
            self.expected.end()
        )
    }
}

impl std::error::Error for RangeError {}
