//! Component parser: raw captures to validated [`ColorValue`]s.
//!
//! | Notation | Component  | Accepted            |
//! |----------|------------|---------------------|
//! | hex      | digits     | 3, 6, or 8          |
//! | rgb      | r, g, b    | integer `0..=255`   |
//! | hsl      | hue        | `0..=360`           |
//! | hsl      | s, l       | `0..=100` percent   |
//! | oklch    | lightness  | `0..=100` percent   |
//! | oklch    | chroma     | `>= 0`              |
//! | oklch    | hue        | `0..=360`           |
//! | all      | alpha      | `0..=1`             |
//!
//! Any violation rejects the whole candidate.

use huescan_space::{Hsl, Oklch, RangeError, Rgb8};

use crate::error::ParseError;
use crate::matcher::Captured;
use crate::notation::ColorValue;

/// Validate one match.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first component that failed.
pub fn parse(captured: &Captured<'_>) -> Result<ColorValue, ParseError> {
    match *captured {
        Captured::Hex { digits } => parse_hex(digits),
        Captured::Rgb { r, g, b, alpha } => {
            let rgb = Rgb8::new(integer("red", r)?, integer("green", g)?, integer("blue", b)?)?;
            let rgb = match alpha {
                Some(alpha) => rgb.with_alpha(number("alpha", alpha)?)?,
                None => rgb,
            };
            Ok(ColorValue::Rgb(rgb))
        }
        Captured::Hsl { h, s, l, alpha } => {
            let h = bounded("hue", h, 0.0..=360.0)?;
            let s = bounded("saturation", s, 0.0..=100.0)?;
            let l = bounded("lightness", l, 0.0..=100.0)?;
            Ok(ColorValue::Hsl {
                hsl: Hsl::new(h, s / 100.0, l / 100.0),
                alpha: parse_alpha(alpha)?,
            })
        }
        Captured::Oklch { l, c, h, alpha } => {
            let l = bounded("lightness", l, 0.0..=100.0)?;
            let c = bounded("chroma", c, 0.0..=f64::INFINITY)?;
            let h = bounded("hue", h, 0.0..=360.0)?;
            Ok(ColorValue::Oklch {
                oklch: Oklch::new(l / 100.0, c, h),
                alpha: parse_alpha(alpha)?,
            })
        }
    }
}

fn parse_hex(digits: &str) -> Result<ColorValue, ParseError> {
    match digits.len() {
        3 | 6 | 8 => Rgb8::from_hex(digits)
            .map(ColorValue::Hex)
            .ok_or_else(|| malformed("hex", digits)),
        len => Err(ParseError::BadHexLength(len)),
    }
}

fn parse_alpha(alpha: Option<&str>) -> Result<Option<f64>, ParseError> {
    alpha
        .map(|text| bounded("alpha", text, 0.0..=1.0))
        .transpose()
}

fn integer(component: &'static str, text: &str) -> Result<u32, ParseError> {
    text.parse().map_err(|_| malformed(component, text))
}

fn number(component: &'static str, text: &str) -> Result<f64, ParseError> {
    text.parse().map_err(|_| malformed(component, text))
}

fn bounded(
    component: &'static str,
    text: &str,
    expected: std::ops::RangeInclusive<f64>,
) -> Result<f64, ParseError> {
    RangeError::check(component, number(component, text)?, expected).map_err(ParseError::from)
}

fn malformed(component: &'static str, text: &str) -> ParseError {
    ParseError::Malformed {
        component,
        text: text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::ColorNotation;
    use pretty_assertions::assert_eq;

    fn rgb<'t>(r: &'t str, g: &'t str, b: &'t str, alpha: Option<&'t str>) -> Captured<'t> {
        Captured::Rgb { r, g, b, alpha }
    }

    fn hsl<'t>(h: &'t str, s: &'t str, l: &'t str, alpha: Option<&'t str>) -> Captured<'t> {
        Captured::Hsl { h, s, l, alpha }
    }

    fn oklch<'t>(l: &'t str, c: &'t str, h: &'t str, alpha: Option<&'t str>) -> Captured<'t> {
        Captured::Oklch { l, c, h, alpha }
    }

    fn key(captured: &Captured<'_>) -> String {
        parse(captured).unwrap().normalized()
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_short_form_expands() {
        assert_eq!(key(&Captured::Hex { digits: "F00" }), "#FF0000");
        assert_eq!(key(&Captured::Hex { digits: "abc" }), "#AABBCC");
    }

    #[test]
    fn hex_lengths() {
        assert_eq!(key(&Captured::Hex { digits: "ff5733" }), "#FF5733");
        assert_eq!(key(&Captured::Hex { digits: "ff573380" }), "#FF573380");
        assert_eq!(
            parse(&Captured::Hex { digits: "ff57" }),
            Err(ParseError::BadHexLength(4))
        );
        assert_eq!(
            parse(&Captured::Hex { digits: "1234567" }),
            Err(ParseError::BadHexLength(7))
        );
    }

    // ── rgb() ────────────────────────────────────────────────────────────

    #[test]
    fn rgb_accepts_bounds() {
        assert_eq!(key(&rgb("0", "0", "0", None)), "#000000");
        assert_eq!(key(&rgb("255", "87", "51", None)), "#FF5733");
        assert_eq!(key(&rgb("255", "87", "51", Some("0.5"))), "#FF573380");
        assert_eq!(key(&rgb("255", "87", "51", Some("1"))), "#FF5733FF");
    }

    #[test]
    fn rgb_rejects_out_of_range() {
        assert!(matches!(
            parse(&rgb("300", "400", "500", None)),
            Err(ParseError::OutOfRange(_))
        ));
        assert!(parse(&rgb("255", "256", "0", None)).is_err());
        assert!(parse(&rgb("1", "2", "3", Some("1.5"))).is_err());
    }

    #[test]
    fn rgb_notation_tracks_alpha() {
        let value = parse(&rgb("1", "2", "3", Some(".25"))).unwrap();
        assert_eq!(value.notation(), ColorNotation::Rgba);
    }

    // ── hsl() ────────────────────────────────────────────────────────────

    #[test]
    fn hsl_to_hex() {
        assert_eq!(key(&hsl("0", "100", "50", None)), "#FF0000");
        assert_eq!(key(&hsl("240", "100", "50", None)), "#0000FF");
        assert_eq!(key(&hsl("360", "100", "50", None)), "#FF0000");
        assert_eq!(key(&hsl("0", "0", "100", None)), "#FFFFFF");
    }

    #[test]
    fn hsl_rejects_out_of_range() {
        assert!(parse(&hsl("400", "150", "200", None)).is_err());
        assert!(parse(&hsl("361", "50", "50", None)).is_err());
        assert!(parse(&hsl("10", "100.5", "50", None)).is_err());
        assert!(parse(&hsl("10", "50", "50", Some("2"))).is_err());
    }

    // ── oklch() ──────────────────────────────────────────────────────────

    #[test]
    fn oklch_keeps_oklch_key() {
        assert_eq!(
            key(&oklch("62.8", "0.2577", "29.23", None)),
            "oklch(62.80% 0.2577 29.23)"
        );
        assert_eq!(
            key(&oklch("70", "0.1", "120", Some(".3"))),
            "oklch(70.00% 0.1000 120.00 / 0.30)"
        );
    }

    #[test]
    fn oklch_chroma_is_unbounded_above() {
        assert!(parse(&oklch("50", "5", "120", None)).is_ok());
    }

    #[test]
    fn oklch_rejects_out_of_range() {
        assert!(parse(&oklch("101", "0.1", "120", None)).is_err());
        assert!(parse(&oklch("50", "0.1", "400", None)).is_err());
        assert!(parse(&oklch("50", "0.1", "120", Some("1.01"))).is_err());
    }

    // ── Malformed ────────────────────────────────────────────────────────

    #[test]
    fn overflowing_integer_is_malformed() {
        assert_eq!(
            parse(&rgb("99999999999", "0", "0", None)),
            Err(ParseError::Malformed {
                component: "red",
                text: "99999999999".to_owned(),
            })
        );
    }
}
