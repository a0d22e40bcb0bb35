// SPDX-License-Identifier: MIT
//
// 8-bit sRGB with optional alpha, plus the hex codec that serves as the
// canonical form for the whole RGB family.

use std::fmt;

use crate::error::RangeError;
use crate::space::Srgb;

/// An 8-bit sRGB color with optional alpha.
///
/// Channels are always in range by construction: the checked constructors
/// reject anything else, and [`Rgb8::from_srgb`] clamps before quantizing.
///
/// # Examples
///
/// ```
/// use huescan_space::Rgb8;
///
/// let coral = Rgb8::new(255, 87, 51).unwrap();
/// assert_eq!(coral.to_hex(), "#FF5733");
///
/// let red = Rgb8::from_hex("#f00").unwrap();
/// assert_eq!(red.to_hex(), "#FF0000");
///
/// assert!(Rgb8::new(300, 0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1]. `None` means the notation carried no alpha term,
    /// which is distinct from an explicit `1`.
    pub alpha: Option<f64>,
}

impl Rgb8 {
    /// Create a color from channel values, checking each is in `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] naming the first channel out of range.
    pub fn new(r: u32, g: u32, b: u32) -> Result<Self, RangeError> {
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
            alpha: None,
        })
    }

    /// Create an opaque color from bytes. Cannot fail.
    #[must_use]
    pub const fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Attach an alpha value, checking it is in `0..=1`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `alpha` is out of range or NaN.
    pub fn with_alpha(self, alpha: f64) -> Result<Self, RangeError> {
        let alpha = RangeError::check("alpha", alpha, 0.0..=1.0)?;
        Ok(Self {
            alpha: Some(alpha),
            ..self
        })
    }

    /// Quantize a normalized color, clamping out-of-range channels.
    #[must_use]
    pub fn from_srgb(color: Srgb, alpha: Option<f64>) -> Self {
        Self {
            r: to_u8(color.r),
            g: to_u8(color.g),
            b: to_u8(color.b),
            alpha,
        }
    }

    /// Normalize to [0, 1] per channel. Alpha is dropped.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Alpha quantized to a byte, if present.
    #[must_use]
    pub fn alpha_byte(self) -> Option<u8> {
        self.alpha.map(to_u8)
    }

    /// Alpha as a byte, treating a missing alpha as fully opaque.
    #[must_use]
    pub fn opacity_byte(self) -> u8 {
        self.alpha_byte().unwrap_or(u8::MAX)
    }

    /// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Three-digit input is expanded by doubling each digit. Four-digit
    /// `#RGBA` is not accepted.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();

        match bytes {
            [r, g, b] => {
                let r = parse_hex_digit(*r)?;
                let g = parse_hex_digit(*g)?;
                let b = parse_hex_digit(*b)?;
                Some(Self::from_bytes(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            [r1, r2, g1, g2, b1, b2] => Some(Self::from_bytes(
                parse_hex_byte(*r1, *r2)?,
                parse_hex_byte(*g1, *g2)?,
                parse_hex_byte(*b1, *b2)?,
            )),
            [r1, r2, g1, g2, b1, b2, a1, a2] => {
                let a = parse_hex_byte(*a1, *a2)?;
                Some(Self {
                    alpha: Some(f64::from(a) / 255.0),
                    ..Self::from_bytes(
                        parse_hex_byte(*r1, *r2)?,
                        parse_hex_byte(*g1, *g2)?,
                        parse_hex_byte(*b1, *b2)?,
                    )
                })
            }
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when alpha is present. Uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, .. } = self;
        match self.alpha_byte() {
            Some(a) => format!("#{r:02X}{g:02X}{b:02X}{a:02X}"),
            None => format!("#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn channel(component: &'static str, value: u32) -> Result<u8, RangeError> {
    if value <= 255 {
        Ok(value as u8)
    } else {
        Err(RangeError::new(component, f64::from(value), 0.0..=255.0))
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
const fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (parse_hex_digit(hi), parse_hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some(hi << 4 | lo),
        _ => None,
    }
}

/// Convert a float in [0, 1] to a byte with round-half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}
