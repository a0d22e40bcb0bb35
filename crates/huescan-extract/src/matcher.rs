//! Notation matcher: one regex pass over the input.
//!
//! The four grammars share a single alternation, so the scan is strictly
//! left to right and matches never overlap. Every grammar starts with a
//! distinct literal prefix (`#`, `rgb`, `hsl`, `oklch`), which rules out
//! cross-grammar ambiguity.
//!
//! | Grammar | Shape                                                          |
//! |---------|----------------------------------------------------------------|
//! | hex     | `#` followed by a run of hex digits                            |
//! | rgb     | `rgb(` or `rgba(`, three integers, optional `, ALPHA`, `)`     |
//! | hsl     | `hsl(` or `hsla(`, NUM, NUM`%`, NUM`%`, optional alpha, `)`     |
//! | oklch   | `oklch(`, NUM`%`, NUM, NUM, optional `/ ALPHA`, `)`             |
//!
//! Commas between hsl components are optional, and its alpha may follow
//! either `/` or `,`. The oklch components are whitespace separated.
//!
//! The hex digit run is taken whole so a literal like `#1234567` cannot
//! match as `#123456` followed by a stray digit; the parser rejects runs
//! whose length is not 3, 6, or 8. Numeric ranges are likewise left to the
//! parser.

use std::fmt;
use std::ops::Range;

use regex::{CaptureMatches, Captures, Regex};

/// Unsigned decimal, with optional fraction or fraction only.
const NUM: &str = r"(?:\d+(?:\.\d+)?|\.\d+)";

/// Which grammar produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Hex,
    Rgb,
    Hsl,
    Oklch,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        })
    }
}

/// The raw substrings captured for one match, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Captured<'t> {
    Hex {
        digits: &'t str,
    },
    Rgb {
        r: &'t str,
        g: &'t str,
        b: &'t str,
        alpha: Option<&'t str>,
    },
    Hsl {
        h: &'t str,
        s: &'t str,
        l: &'t str,
        alpha: Option<&'t str>,
    },
    Oklch {
        l: &'t str,
        c: &'t str,
        h: &'t str,
        alpha: Option<&'t str>,
    },
}

impl Captured<'_> {
    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        match self {
            Self::Hex { .. } => Grammar::Hex,
            Self::Rgb { .. } => Grammar::Rgb,
            Self::Hsl { .. } => Grammar::Hsl,
            Self::Oklch { .. } => Grammar::Oklch,
        }
    }
}

/// One candidate color literal found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'t> {
    /// The full matched text, e.g. `rgb(255, 0, 0)`.
    pub text: &'t str,
    /// Byte range of `text` within the input.
    pub span: Range<usize>,
    pub captured: Captured<'t>,
}

/// Compiled color grammars.
///
/// Build once and share; matching borrows it immutably.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile the color grammars.
    ///
    /// # Panics
    ///
    /// Never in practice: the pattern is assembled from constants.
    #[must_use]
    pub fn new() -> Self {
        let pattern = [
            r"#(?P<hex>[0-9A-Fa-f]+)".to_owned(),
            format!(
                r"rgba?\(\s*(?P<rgb_r>\d{{1,3}})\s*,\s*(?P<rgb_g>\d{{1,3}})\s*,\s*(?P<rgb_b>\d{{1,3}})\s*(?:,\s*(?P<rgb_a>{NUM})\s*)?\)"
            ),
            format!(
                r"hsla?\(\s*(?P<hsl_h>{NUM})\s*,?\s*(?P<hsl_s>{NUM})%\s*,?\s*(?P<hsl_l>{NUM})%\s*(?:[/,]\s*(?P<hsl_a>{NUM})\s*)?\)"
            ),
            format!(
                r"oklch\(\s*(?P<ok_l>{NUM})%\s+(?P<ok_c>{NUM})\s+(?P<ok_h>{NUM})\s*(?:/\s*(?P<ok_a>{NUM})\s*)?\)"
            ),
        ]
        .join("|");

        let regex = Regex::new(&pattern).expect("color grammar must compile");
        Self { regex }
    }

    /// Lazily scan `text` for color literals.
    ///
    /// The iterator is single-use and yields matches in input order.
    #[must_use]
    pub fn matches<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        Matches {
            inner: self.regex.captures_iter(text),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`Matcher::matches`].
#[derive(Debug)]
pub struct Matches<'m, 't> {
    inner: CaptureMatches<'m, 't>,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = RawMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        // Every alternative carries at least one mandatory group, so a
        // match without one cannot happen; skip it rather than panic.
        self.inner.by_ref().find_map(|caps| to_raw(&caps))
    }
}

fn to_raw<'t>(caps: &Captures<'t>) -> Option<RawMatch<'t>> {
    let whole = caps.get(0)?;
    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    let captured = if let Some(digits) = group("hex") {
        Captured::Hex { digits }
    } else if let Some(r) = group("rgb_r") {
        Captured::Rgb {
            r,
            g: group("rgb_g")?,
            b: group("rgb_b")?,
            alpha: group("rgb_a"),
        }
    } else if let Some(h) = group("hsl_h") {
        Captured::Hsl {
            h,
            s: group("hsl_s")?,
            l: group("hsl_l")?,
            alpha: group("hsl_a"),
        }
    } else {
        Captured::Oklch {
            l: group("ok_l")?,
            c: group("ok_c")?,
            h: group("ok_h")?,
            alpha: group("ok_a"),
        }
    };

    Some(RawMatch {
        text: whole.as_str(),
        span: whole.range(),
        captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(text: &str) -> Vec<RawMatch<'_>> {
        Matcher::new().matches(text).collect()
    }

    fn texts(text: &str) -> Vec<&str> {
        scan(text).into_iter().map(|m| m.text).collect()
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_forms() {
        assert_eq!(texts("#F00 #ff5733 #FF000080"), vec!["#F00", "#ff5733", "#FF000080"]);
    }

    #[test]
    fn hex_takes_whole_digit_run() {
        let matches = scan("#1234567");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].captured, Captured::Hex { digits: "1234567" });
    }

    #[test]
    fn hex_requires_a_digit() {
        assert!(scan("#GGGGGG and # alone").is_empty());
    }

    #[test]
    fn hex_span_is_byte_range() {
        let matches = scan("color: #abc;");
        assert_eq!(matches[0].span, 7..11);
    }

    // ── rgb() ────────────────────────────────────────────────────────────

    #[test]
    fn rgb_with_and_without_alpha() {
        let matches = scan("rgb(255,87,51) rgba( 1 , 2 , 3 , .5 )");
        assert_eq!(
            matches[0].captured,
            Captured::Rgb {
                r: "255",
                g: "87",
                b: "51",
                alpha: None
            }
        );
        assert_eq!(
            matches[1].captured,
            Captured::Rgb {
                r: "1",
                g: "2",
                b: "3",
                alpha: Some(".5")
            }
        );
    }

    #[test]
    fn rgb_alpha_takes_any_number_form() {
        let alphas: Vec<Option<&str>> = scan("rgba(1,2,3,1) rgba(1,2,3,0.25) rgba(1,2,3,.5) rgba(1,2,3,1.)")
            .into_iter()
            .map(|m| match m.captured {
                Captured::Rgb { alpha, .. } => alpha,
                other => panic!("expected rgb, got {other:?}"),
            })
            .collect();
        assert_eq!(alphas, vec![Some("1"), Some("0.25"), Some(".5")]);
    }

    #[test]
    fn grammar_names() {
        assert_eq!(Grammar::Oklch.to_string(), "oklch");
        assert_eq!(scan("#abc")[0].captured.grammar().to_string(), "hex");
    }

    #[test]
    fn rgb_out_of_range_still_matches() {
        // Range checks belong to the parser.
        assert_eq!(texts("rgb(300,400,500)"), vec!["rgb(300,400,500)"]);
    }

    #[test]
    fn rgb_uppercase_name_is_not_matched() {
        assert!(scan("RGB(1,2,3)").is_empty());
    }

    // ── hsl() ────────────────────────────────────────────────────────────

    #[test]
    fn hsl_separators() {
        assert_eq!(
            texts("hsl(120, 50%, 25%) hsla(120 50% 25% / 0.3) hsla(1,2%,3%,1)"),
            vec!["hsl(120, 50%, 25%)", "hsla(120 50% 25% / 0.3)", "hsla(1,2%,3%,1)"]
        );
    }

    #[test]
    fn hsl_captures_decimals() {
        let matches = scan("hsl(10.5, 99.9%, 0.5%)");
        assert_eq!(
            matches[0].captured,
            Captured::Hsl {
                h: "10.5",
                s: "99.9",
                l: "0.5",
                alpha: None
            }
        );
    }

    #[test]
    fn hsl_requires_percent() {
        assert!(scan("hsl(120, 50, 25)").is_empty());
    }

    // ── oklch() ──────────────────────────────────────────────────────────

    #[test]
    fn oklch_forms() {
        let matches = scan("oklch(62.8% 0.2577 29.23) oklch(50% 0.1 200 / 0.5)");
        assert_eq!(matches.len(), 2);
        assert_eq!(
            matches[1].captured,
            Captured::Oklch {
                l: "50",
                c: "0.1",
                h: "200",
                alpha: Some("0.5")
            }
        );
        assert_eq!(matches[1].captured.grammar(), Grammar::Oklch);
    }

    #[test]
    fn oklch_requires_percent_lightness() {
        assert!(scan("oklch(0.5 0.1 200)").is_empty());
    }

    // ── Scanning ─────────────────────────────────────────────────────────

    #[test]
    fn matches_arrive_in_text_order() {
        let grammars: Vec<Grammar> = scan("oklch(50% 0.1 20) #fff hsl(1,2%,3%) rgb(1,2,3)")
            .iter()
            .map(|m| m.captured.grammar())
            .collect();
        assert_eq!(
            grammars,
            vec![Grammar::Oklch, Grammar::Hex, Grammar::Hsl, Grammar::Rgb]
        );
    }

    #[test]
    fn no_colors_in_plain_prose() {
        assert!(scan("issue #, rgb values, hsl space, oklch()").is_empty());
    }
}
