//! Color notations and the parsed color value they carry.
//!
//! [`ColorValue`] is a closed sum over the four payload families. The
//! notation set is fixed, so every consumer matches on it exhaustively.

use std::fmt;

use huescan_space::{Hsl, Oklch, Rgb8};

/// The textual grammar a color was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorNotation {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Oklch,
    Oklcha,
}

impl ColorNotation {
    /// Lowercase name, e.g. `"rgba"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Oklch => "oklch",
            Self::Oklcha => "oklcha",
        }
    }

    /// Whether colors in this notation keep an OKLCH canonical key.
    #[must_use]
    pub const fn is_oklch_family(self) -> bool {
        matches!(self, Self::Oklch | Self::Oklcha)
    }
}

impl fmt::Display for ColorNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated color, tagged by the family it was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Hex(Rgb8),
    Rgb(Rgb8),
    /// Saturation and lightness are fractions in [0, 1].
    Hsl {
        hsl: Hsl,
        alpha: Option<f64>,
    },
    /// Lightness is a fraction in [0, 1].
    Oklch {
        oklch: Oklch,
        alpha: Option<f64>,
    },
}

impl ColorValue {
    #[must_use]
    pub const fn notation(&self) -> ColorNotation {
        match self {
            Self::Hex(_) => ColorNotation::Hex,
            Self::Rgb(rgb) => {
                if rgb.alpha.is_some() {
                    ColorNotation::Rgba
                } else {
                    ColorNotation::Rgb
                }
            }
            Self::Hsl { alpha, .. } => {
                if alpha.is_some() {
                    ColorNotation::Hsla
                } else {
                    ColorNotation::Hsl
                }
            }
            Self::Oklch { alpha, .. } => {
                if alpha.is_some() {
                    ColorNotation::Oklcha
                } else {
                    ColorNotation::Oklch
                }
            }
        }
    }

    /// The canonical key.
    ///
    /// The RGB and HSL families collapse onto uppercase hex; OKLCH keeps a
    /// fixed-precision `oklch()` string and is never quantized to hex.
    #[must_use]
    pub fn normalized(&self) -> String {
        match *self {
            Self::Hex(rgb) | Self::Rgb(rgb) => rgb.to_hex(),
            Self::Hsl { hsl, alpha } => Rgb8::from_srgb(hsl.to_srgb(), alpha).to_hex(),
            Self::Oklch { oklch, alpha } => format_oklch(oklch, alpha),
        }
    }

    /// Quantized sRGB. OKLCH values outside the gamut are clamped.
    #[must_use]
    pub fn to_rgb8(&self) -> Rgb8 {
        match *self {
            Self::Hex(rgb) | Self::Rgb(rgb) => rgb,
            Self::Hsl { hsl, alpha } => Rgb8::from_srgb(hsl.to_srgb(), alpha),
            Self::Oklch { oklch, alpha } => Rgb8::from_srgb(oklch.to_srgb(), alpha),
        }
    }

    /// Reinterpret a canonical key produced by [`ColorValue::normalized`].
    ///
    /// Hex keys come back as [`ColorValue::Hex`]; OKLCH keys as
    /// [`ColorValue::Oklch`]. Anything else yields `None`.
    #[must_use]
    pub fn from_canonical_key(key: &str) -> Option<Self> {
        if let Some(digits) = key.strip_prefix('#') {
            return Rgb8::from_hex(digits).map(Self::Hex);
        }

        let body = key
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("oklch("))
            .and_then(|_| key[6..].strip_suffix(')'))?;
        let (components, alpha) = match body.split_once('/') {
            Some((components, alpha)) => (components, Some(parse_unit(alpha.trim())?)),
            None => (body, None),
        };

        let mut parts = components.split_whitespace();
        let l: f64 = parts.next()?.strip_suffix('%')?.parse().ok()?;
        let c: f64 = parts.next()?.parse().ok()?;
        let h: f64 = parts.next()?.parse().ok()?;
        if parts.next().is_some()
            || !(0.0..=100.0).contains(&l)
            || !c.is_finite()
            || c < 0.0
            || !(0.0..=360.0).contains(&h)
        {
            return None;
        }

        Some(Self::Oklch {
            oklch: Oklch::new(l / 100.0, c, h),
            alpha,
        })
    }
}

fn parse_unit(text: &str) -> Option<f64> {
    text.parse().ok().filter(|v| (0.0..=1.0).contains(v))
}

/// `oklch(L.LL% C.CCCC H.HH[ / A.AA])` with lightness as a fraction.
#[must_use]
pub fn format_oklch(oklch: Oklch, alpha: Option<f64>) -> String {
    let l = fixed(oklch.l * 100.0, 2);
    let c = fixed(oklch.c, 4);
    let h = fixed_hue(oklch.h);
    match alpha {
        Some(a) => format!("oklch({l}% {c} {h} / {})", fixed(a, 2)),
        None => format!("oklch({l}% {c} {h})"),
    }
}

/// Fixed-point formatting without a `-0.00`.
#[must_use]
pub fn fixed(value: f64, places: usize) -> String {
    let text = format!("{value:.places$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_owned(),
        _ => text,
    }
}

/// Two-place hue that never prints as `360.00`.
#[must_use]
pub fn fixed_hue(hue: f64) -> String {
    let text = fixed(hue, 2);
    if text == "360.00" {
        "0.00".to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Notation ─────────────────────────────────────────────────────────

    #[test]
    fn notation_follows_alpha() {
        let opaque = ColorValue::Rgb(Rgb8::from_bytes(1, 2, 3));
        let translucent = ColorValue::Rgb(Rgb8::from_bytes(1, 2, 3).with_alpha(0.5).unwrap());
        assert_eq!(opaque.notation(), ColorNotation::Rgb);
        assert_eq!(translucent.notation(), ColorNotation::Rgba);
        assert_eq!(
            ColorValue::Hex(Rgb8::from_hex("#11223344").unwrap()).notation(),
            ColorNotation::Hex
        );
    }

    #[test]
    fn notation_names() {
        assert_eq!(ColorNotation::Hsla.to_string(), "hsla");
        assert!(ColorNotation::Oklcha.is_oklch_family());
        assert!(!ColorNotation::Hex.is_oklch_family());
    }

    // ── Normalization ────────────────────────────────────────────────────

    #[test]
    fn hsl_normalizes_to_hex() {
        let value = ColorValue::Hsl {
            hsl: Hsl::new(0.0, 1.0, 0.5),
            alpha: None,
        };
        assert_eq!(value.normalized(), "#FF0000");
    }

    #[test]
    fn hsl_alpha_is_baked_into_hex() {
        let value = ColorValue::Hsl {
            hsl: Hsl::new(120.0, 1.0, 0.25),
            alpha: Some(0.5),
        };
        assert_eq!(value.normalized(), "#00800080");
    }

    #[test]
    fn oklch_keeps_its_own_key() {
        let value = ColorValue::Oklch {
            oklch: Oklch::new(0.628, 0.2577, 29.23),
            alpha: None,
        };
        assert_eq!(value.normalized(), "oklch(62.80% 0.2577 29.23)");

        let translucent = ColorValue::Oklch {
            oklch: Oklch::new(0.5, 0.1, 200.0),
            alpha: Some(0.5),
        };
        assert_eq!(translucent.normalized(), "oklch(50.00% 0.1000 200.00 / 0.50)");
    }

    // ── Reinterpretation ─────────────────────────────────────────────────

    #[test]
    fn canonical_keys_reinterpret() {
        for key in [
            "#FF5733",
            "#FF000080",
            "oklch(62.80% 0.2577 29.23)",
            "oklch(50.00% 0.1000 200.00 / 0.50)",
        ] {
            let value = ColorValue::from_canonical_key(key).unwrap();
            assert_eq!(value.normalized(), key);
        }
    }

    #[test]
    fn foreign_keys_do_not_reinterpret() {
        for key in [
            "",
            "FF5733",
            "#GGG",
            "oklch(1 2 3)",
            "oklch(50% 0.1)",
            "lab(1 2 3)",
            "oklch(50% NaN 10)",
            "oklch(50% inf 10)",
            "oklch(NaN% 0.1 10)",
        ] {
            assert_eq!(ColorValue::from_canonical_key(key), None, "{key}");
        }
    }

    // ── Formatting helpers ───────────────────────────────────────────────

    #[test]
    fn fixed_drops_negative_zero() {
        assert_eq!(fixed(-0.0001, 2), "0.00");
        assert_eq!(fixed(-0.5, 2), "-0.50");
        assert_eq!(fixed(1.23456, 4), "1.2346");
    }

    #[test]
    fn fixed_hue_wraps_rounding() {
        assert_eq!(fixed_hue(359.999), "0.00");
        assert_eq!(fixed_hue(359.99), "359.99");
    }
}
