//! Normalization and deduplication: the extraction entry points.
//!
//! Each match that survives the parser gets a canonical key (see
//! [`ColorValue::normalized`]). Records are kept in text order and a key
//! that was already seen, compared case-insensitively, is dropped.
//!
//! Deduplication only works within a family: hex, `rgb()` and `hsl()`
//! literals share hex keys and collapse into one another, while an
//! `oklch()` literal keeps its own key and never collapses into a hex
//! entry, even when both describe the same sRGB color. Alpha is part of
//! the key, so `#FF0000` and `#FF0000FF` are different colors.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use huescan_space::Rgb8;

use crate::matcher::Matcher;
use crate::notation::{ColorNotation, ColorValue};
use crate::parse::parse;

// ─── ExtractedColor ─────────────────────────────────────────────────────────

/// Where a color was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// Index of the input within the batch (0 for single-text extraction).
    pub input: usize,
    /// Byte offset of the first character of the literal.
    pub start: usize,
    /// Byte offset one past the literal.
    pub end: usize,
}

/// One distinct color found in the input.
///
/// Identity is the canonical key alone, compared without regard to ASCII
/// case: two records written differently but with the same key are equal
/// and hash the same.
#[derive(Debug, Clone)]
pub struct ExtractedColor {
    original: String,
    notation: ColorNotation,
    canonical_key: String,
    source: Option<SourceSpan>,
}

impl ExtractedColor {
    /// Build a record directly, without a source span.
    ///
    /// The key is taken as-is. A key that is neither hex nor `oklch()` is
    /// allowed; conversion then falls back to printing the key itself.
    #[must_use]
    pub fn new(
        original: impl Into<String>,
        notation: ColorNotation,
        canonical_key: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            notation,
            canonical_key: canonical_key.into(),
            source: None,
        }
    }

    fn from_value(original: &str, value: &ColorValue, source: SourceSpan) -> Self {
        Self {
            original: original.to_owned(),
            notation: value.notation(),
            canonical_key: value.normalized(),
            source: Some(source),
        }
    }

    /// The literal exactly as it appeared in the text.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub const fn notation(&self) -> ColorNotation {
        self.notation
    }

    #[must_use]
    pub fn canonical_key(&self) -> &str {
        &self.canonical_key
    }

    #[must_use]
    pub const fn source(&self) -> Option<SourceSpan> {
        self.source
    }

    /// The key as an 8-bit color, when it is a hex key.
    #[must_use]
    pub fn rgb(&self) -> Option<Rgb8> {
        self.canonical_key
            .strip_prefix('#')
            .and_then(Rgb8::from_hex)
    }

    /// The key reinterpreted as a color value, when it is hex or `oklch()`.
    #[must_use]
    pub fn value(&self) -> Option<ColorValue> {
        ColorValue::from_canonical_key(&self.canonical_key)
    }

    fn folded_key(&self) -> String {
        self.canonical_key.to_ascii_lowercase()
    }
}

impl PartialEq for ExtractedColor {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key.eq_ignore_ascii_case(&other.canonical_key)
    }
}

impl Eq for ExtractedColor {}

impl Hash for ExtractedColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.canonical_key.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

// ─── Deduplicator ───────────────────────────────────────────────────────────

/// Order-preserving set insertion keyed on the case-folded canonical key.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
    colors: Vec<ExtractedColor>,
}

impl Deduplicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `color` unless its key was seen before. Returns whether it was kept.
    pub fn insert(&mut self, color: ExtractedColor) -> bool {
        if self.seen.insert(color.folded_key()) {
            self.colors.push(color);
            true
        } else {
            log::trace!(
                "dropping duplicate {} ({})",
                color.original,
                color.canonical_key
            );
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The kept colors, in first-seen order.
    #[must_use]
    pub fn into_colors(self) -> Vec<ExtractedColor> {
        self.colors
    }
}

impl Extend<ExtractedColor> for Deduplicator {
    fn extend<I: IntoIterator<Item = ExtractedColor>>(&mut self, iter: I) {
        for color in iter {
            self.insert(color);
        }
    }
}

impl FromIterator<ExtractedColor> for Deduplicator {
    fn from_iter<I: IntoIterator<Item = ExtractedColor>>(iter: I) -> Self {
        let mut dedup = Self::new();
        dedup.extend(iter);
        dedup
    }
}

// ─── Extractor ──────────────────────────────────────────────────────────────

/// The extraction pipeline: matcher, parser, normalizer, deduplicator.
///
/// # Examples
///
/// ```
/// use huescan_extract::Extractor;
///
/// let extractor = Extractor::new();
/// let colors = extractor.extract("#F00 rgb(255, 0, 0) hsl(0, 100%, 50%) oklch(62.8% 0.2577 29.23)");
///
/// let keys: Vec<&str> = colors.iter().map(|c| c.canonical_key()).collect();
/// assert_eq!(keys, ["#FF0000", "oklch(62.80% 0.2577 29.23)"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    matcher: Matcher,
}

impl Extractor {
    /// Create an extractor with freshly compiled patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::with_matcher(Matcher::new())
    }

    #[must_use]
    pub const fn with_matcher(matcher: Matcher) -> Self {
        Self { matcher }
    }

    /// Every valid color in `text`, duplicates included, in text order.
    ///
    /// `input` is recorded in each [`SourceSpan`].
    pub fn candidates<'a>(
        &'a self,
        text: &'a str,
        input: usize,
    ) -> impl Iterator<Item = ExtractedColor> + 'a {
        self.matcher.matches(text).filter_map(move |raw| {
            match parse(&raw.captured) {
                Ok(value) => Some(ExtractedColor::from_value(
                    raw.text,
                    &value,
                    SourceSpan {
                        input,
                        start: raw.span.start,
                        end: raw.span.end,
                    },
                )),
                Err(err) => {
                    log::debug!(
                        "skipping {} literal `{}` at byte {}: {err}",
                        raw.captured.grammar(),
                        raw.text,
                        raw.span.start
                    );
                    None
                }
            }
        })
    }

    /// Distinct colors in `text`, in order of first appearance.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<ExtractedColor> {
        self.extract_all([text])
    }

    /// Distinct colors across a whole batch of texts.
    ///
    /// Deduplication spans the batch: a color repeated in a later text is
    /// dropped just like one repeated within a text.
    #[must_use]
    pub fn extract_all<'t, I>(&self, texts: I) -> Vec<ExtractedColor>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut dedup = Deduplicator::new();
        for (input, text) in texts.into_iter().enumerate() {
            dedup.extend(self.candidates(text, input));
        }
        dedup.into_colors()
    }
}

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::new);

/// Distinct colors in `text`, using a shared default [`Extractor`].
#[must_use]
pub fn extract(text: &str) -> Vec<ExtractedColor> {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Distinct colors across a batch of texts, using a shared default [`Extractor`].
#[must_use]
pub fn extract_all<'t, I>(texts: I) -> Vec<ExtractedColor>
where
    I: IntoIterator<Item = &'t str>,
{
    DEFAULT_EXTRACTOR.extract_all(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;

    fn keys(colors: &[ExtractedColor]) -> Vec<&str> {
        colors.iter().map(ExtractedColor::canonical_key).collect()
    }

    fn hash_of(color: &ExtractedColor) -> u64 {
        let mut hasher = DefaultHasher::new();
        color.hash(&mut hasher);
        hasher.finish()
    }

    // ── Dedup ────────────────────────────────────────────────────────────

    #[test]
    fn hex_and_rgb_collapse() {
        let colors = extract("#FF5733 #ff5733 rgb(255,87,51)");
        assert_eq!(keys(&colors), vec!["#FF5733"]);
        assert_eq!(colors[0].original(), "#FF5733");
        assert_eq!(colors[0].notation(), ColorNotation::Hex);
    }

    #[test]
    fn first_occurrence_wins() {
        let colors = extract("rgb(255, 0, 0) then #F00 then hsl(0, 100%, 50%)");
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].original(), "rgb(255, 0, 0)");
        assert_eq!(colors[0].notation(), ColorNotation::Rgb);
    }

    #[test]
    fn short_hex_canonicalizes() {
        assert_eq!(keys(&extract("#F00")), vec!["#FF0000"]);
    }

    #[test]
    fn order_is_text_order() {
        let colors = extract("#00F, #0F0, #F00, #0F0");
        assert_eq!(keys(&colors), vec!["#0000FF", "#00FF00", "#FF0000"]);
    }

    #[test]
    fn oklch_does_not_collapse_into_hex() {
        let colors = extract("#FF0000 oklch(62.8% 0.2577 29.23)");
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn oklch_duplicates_collapse() {
        let colors = extract("oklch(62.8% 0.2577 29.23) oklch(62.80% 0.25770 29.230)");
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn alpha_variants_stay_distinct() {
        let colors = extract("#FF0000 #FF0000FF rgba(255, 0, 0, 1)");
        assert_eq!(keys(&colors), vec!["#FF0000", "#FF0000FF"]);
    }

    // ── Rejection ────────────────────────────────────────────────────────

    #[test]
    fn out_of_range_literals_are_dropped() {
        assert!(extract("rgb(300,400,500)").is_empty());
        assert!(extract("#GGGGGG").is_empty());
        assert!(extract("hsl(400,150%,200%)").is_empty());
    }

    #[test]
    fn bad_literal_does_not_hide_good_ones() {
        let colors = extract("rgb(999,0,0) #12345 #abc oklch(120% 0.1 10) hsl(10, 10%, 10%)");
        assert_eq!(keys(&colors), vec!["#AABBCC", "#1C1817"]);
    }

    // ── Batch ────────────────────────────────────────────────────────────

    #[test]
    fn batch_dedups_across_inputs() {
        let colors = extract_all([" #FF0000", "#ff0000 "]);
        assert_eq!(colors.len(), 1);
        assert_eq!(
            colors[0].source(),
            Some(SourceSpan {
                input: 0,
                start: 1,
                end: 8
            })
        );
    }

    #[test]
    fn batch_records_input_index() {
        let colors = extract_all(["#000", "text #fff"]);
        assert_eq!(
            colors[1].source(),
            Some(SourceSpan {
                input: 1,
                start: 5,
                end: 9
            })
        );
    }

    #[test]
    fn empty_inputs() {
        assert!(extract("").is_empty());
        assert!(extract_all(std::iter::empty()).is_empty());
    }

    #[test]
    fn candidates_keep_duplicates() {
        let extractor = Extractor::new();
        assert_eq!(extractor.candidates("#fff #FFF", 0).count(), 2);
    }

    // ── Identity ─────────────────────────────────────────────────────────

    #[test]
    fn equality_ignores_everything_but_folded_key() {
        let a = ExtractedColor::new("#ff5733", ColorNotation::Hex, "#FF5733");
        let b = ExtractedColor::new("rgb(255,87,51)", ColorNotation::Rgb, "#ff5733");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = ExtractedColor::new("#ff5733", ColorNotation::Hex, "#FF5734");
        assert_ne!(a, c);
    }

    #[test]
    fn deduplicator_reports_insertions() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.insert(ExtractedColor::new("#abc", ColorNotation::Hex, "#AABBCC")));
        assert!(!dedup.insert(ExtractedColor::new("#aabbcc", ColorNotation::Hex, "#aabbcc")));
        assert_eq!(dedup.len(), 1);
        assert!(!dedup.is_empty());
    }

    #[test]
    fn record_accessors() {
        let color = extract("x rgba(0, 0, 255, 0.5)").remove(0);
        assert_eq!(color.notation(), ColorNotation::Rgba);
        assert_eq!(color.canonical_key(), "#0000FF80");
        assert_eq!(color.rgb().map(Rgb8::opacity_byte), Some(0x80));
        assert_eq!(color.source().map(|s| s.start), Some(2));
    }

    // ── Canonicalization ─────────────────────────────────────────────────

    #[test]
    fn canonicalization_is_idempotent() {
        for text in ["#abc", "rgb(10, 20, 30)", "hsl(200, 40%, 60%)", "hsla(1, 2%, 3%, .4)"] {
            let first = extract(text).remove(0);
            let again = extract(first.canonical_key()).remove(0);
            assert_eq!(first.canonical_key(), again.canonical_key(), "{text}");
        }
    }
}
