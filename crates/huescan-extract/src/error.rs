//! Errors for the extraction pipeline.
//!
//! [`ParseError`] never reaches callers of [`extract`](crate::extract): a
//! candidate that fails to parse is logged and dropped. It is public so the
//! parser can be driven directly.

use std::fmt;

use huescan_space::RangeError;

/// Why a matched candidate could not become a color.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// A captured number did not parse at all.
    Malformed {
        component: &'static str,
        text: String,
    },

    /// A component parsed but fell outside its valid range.
    OutOfRange(RangeError),

    /// A hex literal with a digit count other than 3, 6, or 8.
    BadHexLength(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { component, text } => {
                write!(f, "malformed {component} component `{text}`")
            }
            Self::OutOfRange(err) => fmt::Display::fmt(err, f),
            Self::BadHexLength(len) => {
                write!(f, "hex color has {len} digits, expected 3, 6, or 8")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RangeError> for ParseError {
    fn from(err: RangeError) -> Self {
        Self::OutOfRange(err)
    }
}

/// An unknown target notation name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatError(pub String);

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color format `{}`", self.0)
    }
}

impl std::error::Error for FormatError {}
